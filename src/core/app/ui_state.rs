use std::collections::VecDeque;
use std::time::Instant;

use tui_textarea::TextArea;

use crate::core::contact::QuoteForm;
use crate::core::content::site_content;
use crate::core::message::Message;
use crate::ui::carousel::CarouselState;
use crate::ui::theme::Theme;

/// Browse screens, mirroring the site's section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    HowItWorks,
    WhyChooseUs,
    Testimonials,
    Contact,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::HowItWorks,
        Screen::WhyChooseUs,
        Screen::Testimonials,
        Screen::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::HowItWorks => "How It Works",
            Screen::WhyChooseUs => "Why Choose Us",
            Screen::Testimonials => "Testimonials",
            Screen::Contact => "Get a Quote",
        }
    }

    /// Digit hotkey shown in the tab bar.
    pub fn from_digit(c: char) -> Option<Screen> {
        let index = c.to_digit(10)? as usize;
        (1..=Self::ALL.len()).contains(&index).then(|| Self::ALL[index - 1])
    }
}

/// Current input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating screens; single-key shortcuts are live.
    Browse,
    /// Typing into the chat panel.
    Chat,
    /// Editing the quote form.
    Form,
}

/// The chat overlay: transcript, composer, and scroll state.
pub struct ChatPanel {
    pub open: bool,
    pub messages: VecDeque<Message>,
    pub greeted: bool,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    /// Drives the thinking-indicator pulse animation.
    pub pulse_start: Instant,
    textarea: TextArea<'static>,
    input_style: ratatui::style::Style,
    placeholder_style: ratatui::style::Style,
}

impl ChatPanel {
    pub fn new() -> Self {
        let mut panel = Self {
            open: false,
            messages: VecDeque::new(),
            greeted: false,
            scroll_offset: 0,
            auto_scroll: true,
            pulse_start: Instant::now(),
            textarea: TextArea::default(),
            input_style: ratatui::style::Style::default(),
            placeholder_style: ratatui::style::Style::default(),
        };
        panel.textarea = panel.fresh_textarea();
        panel
    }

    /// Re-style the composer; survives `clear_input`.
    pub fn configure_style(&mut self, theme: &Theme) {
        self.input_style = theme.input_text_style;
        self.placeholder_style = theme.muted_style;
        self.textarea.set_style(self.input_style);
        self.textarea.set_placeholder_style(self.placeholder_style);
    }

    fn fresh_textarea(&self) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("Ask about license valuation...");
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea.set_style(self.input_style);
        textarea.set_placeholder_style(self.placeholder_style);
        textarea
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Submit is refused while the composer holds only whitespace.
    pub fn can_send(&self) -> bool {
        !self.input_text().trim().is_empty()
    }

    pub fn clear_input(&mut self) {
        self.textarea = self.fresh_textarea();
    }

    pub fn edit_input<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        edit(&mut self.textarea);
    }

    pub fn input_line_count(&self) -> usize {
        self.textarea.lines().len()
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

pub struct UiState {
    pub screen: Screen,
    pub mode: Mode,
    pub chat: ChatPanel,
    pub form: QuoteForm,
    pub carousel: CarouselState,
    pub theme: Theme,
    pub theme_id: String,
    pub status: Option<String>,
    pub browse_scroll: u16,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme_id: String) -> Self {
        let mut ui = Self {
            screen: Screen::Home,
            mode: Mode::Browse,
            chat: ChatPanel::new(),
            form: QuoteForm::new(),
            carousel: CarouselState::new(site_content().testimonials.len()),
            theme: Theme::from_name(&theme_id),
            theme_id,
            status: None,
            browse_scroll: 0,
            exit_requested: false,
        };
        ui.chat.configure_style(&ui.theme);
        ui
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.browse_scroll = 0;
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn apply_theme(&mut self, theme_id: &str) {
        self.theme = Theme::from_name(theme_id);
        self.theme_id = theme_id.to_ascii_lowercase();
        self.chat.configure_style(&self.theme);
    }
}
