use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::{App, Mode, Screen};
use crate::ui::sections;
use crate::utils::scroll::ScrollCalculator;

const CHAT_PANEL_WIDTH: u16 = 46;

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;

    // Paint the frame background before any widget lands.
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_title(f, app, chunks[0]);
    draw_tabs(f, app, chunks[1]);

    let body = chunks[2];
    if app.ui.chat.open && body.width > CHAT_PANEL_WIDTH + 20 {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(CHAT_PANEL_WIDTH)])
            .split(body);
        draw_screen(f, app, split[0]);
        draw_chat_panel(f, app, split[1]);
    } else if app.ui.chat.open {
        // Narrow terminal: the chat panel takes the whole body.
        draw_chat_panel(f, app, body);
    } else {
        draw_screen(f, app, body);
    }

    draw_status(f, app, chunks[3]);
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "SoftSell v{} — Unlock hidden value in unused software licenses • Logging: {}",
        env!("CARGO_PKG_VERSION"),
        app.session.logging.get_status_string()
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(title, app.ui.theme.title_style))),
        area,
    );
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let mut spans = Vec::new();
    for (index, screen) in Screen::ALL.iter().enumerate() {
        let style = if *screen == app.ui.screen {
            theme.tab_active_style
        } else {
            theme.tab_inactive_style
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", index + 1, screen.title()),
            style,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_screen(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let width = area.width.saturating_sub(2);
    if width == 0 {
        return;
    }
    let lines = match app.ui.screen {
        Screen::Home => sections::home_lines(theme, width),
        Screen::HowItWorks => sections::how_it_works_lines(theme, width),
        Screen::WhyChooseUs => sections::why_choose_us_lines(theme, width),
        Screen::Testimonials => sections::testimonials_lines(theme, &app.ui.carousel, width),
        Screen::Contact => {
            sections::contact_lines(theme, &app.ui.form, app.ui.mode == Mode::Form, width)
        }
    };

    let total = lines.len().min(u16::MAX as usize) as u16;
    let max_offset = ScrollCalculator::max_scroll_offset(total, area.height);
    let offset = app.ui.browse_scroll.min(max_offset);

    let inner = Rect {
        x: area.x + 1,
        width,
        ..area
    };
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn draw_chat_panel(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(
            "SoftBot — License Concierge",
            theme.title_style,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let input_height = (app.ui.chat.input_line_count() as u16).clamp(1, 4) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(input_height),
        ])
        .split(inner);

    draw_transcript(f, app, chunks[0]);
    draw_thinking_indicator(f, app, chunks[1]);
    draw_composer(f, app, chunks[2]);
}

fn draw_transcript(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let lines = sections::transcript_lines(&app.ui.chat.messages, theme, area.width.max(1));

    let total = lines.len().min(u16::MAX as usize) as u16;
    let max_offset = ScrollCalculator::max_scroll_offset(total, area.height);
    let offset = if app.ui.chat.auto_scroll {
        ScrollCalculator::bottom_offset(total, area.height)
    } else {
        app.ui.chat.scroll_offset.min(max_offset)
    };

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn draw_thinking_indicator(f: &mut Frame, app: &App, area: Rect) {
    if !app.session.has_pending_reply() {
        return;
    }

    // Two pulse cycles per second, matched to the redraw cadence.
    let elapsed = app.ui.chat.pulse_start.elapsed().as_millis() as f32 / 1000.0;
    let phase = (elapsed * 2.0) % 2.0;
    let intensity = if phase < 1.0 { phase } else { 2.0 - phase };
    let symbol = if intensity < 0.33 {
        "○"
    } else if intensity < 0.66 {
        "◐"
    } else {
        "●"
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{symbol} SoftBot is thinking…"),
            app.ui.theme.thinking_indicator_style,
        ))),
        area,
    );
}

fn draw_composer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let title = if app.ui.mode == Mode::Chat {
        "Enter to send • Alt+Enter newline • Esc to close"
    } else {
        "Press c to start typing"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(title, theme.input_title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(app.ui.chat.textarea(), inner);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let text = match &app.ui.status {
        Some(status) => status.clone(),
        None => match app.ui.mode {
            Mode::Browse => "1-5 screens • c chat • t theme • q quit".to_string(),
            Mode::Chat => "Chatting with SoftBot • Esc returns to browsing".to_string(),
            Mode::Form => "Editing the quote form • Esc returns to browsing".to_string(),
        },
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.muted_style))),
        area,
    );
}
