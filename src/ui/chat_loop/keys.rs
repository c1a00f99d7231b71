//! Key dispatch for the three input modes. Kept free of terminal I/O so the
//! transitions are unit-testable.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use crate::commands::{self, CommandResult};
use crate::core::app::{App, Mode, Screen};
use crate::core::contact::FormField;
use crate::utils::input::sanitize_text_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> LoopAction {
    // Ctrl+C always quits, whatever has focus.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return LoopAction::Quit;
    }

    match app.ui.mode {
        Mode::Browse => handle_browse_key(app, key),
        Mode::Chat => handle_chat_key(app, key),
        Mode::Form => handle_form_key(app, key),
    }
}

/// Route pasted text to whichever editor has focus.
pub fn handle_paste(app: &mut App, pasted: &str) {
    let sanitized = sanitize_text_input(pasted);
    match app.ui.mode {
        Mode::Chat => app.ui.chat.edit_input(|ta| {
            ta.insert_str(&sanitized);
        }),
        Mode::Form => {
            for c in sanitized.chars().filter(|c| *c != '\n') {
                app.ui.form.insert_char(c);
            }
        }
        Mode::Browse => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) -> LoopAction {
    match key.code {
        KeyCode::Char('q') => return LoopAction::Quit,
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(screen) = Screen::from_digit(c) {
                app.ui.clear_status();
                app.ui.set_screen(screen);
            }
        }
        KeyCode::Char('c') => {
            app.ui.chat.open = true;
            app.ui.mode = Mode::Chat;
            app.ui.clear_status();
            app.conversation().show_greeting_if_needed();
        }
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Enter if app.ui.screen == Screen::Contact => {
            app.ui.mode = Mode::Form;
            app.ui.clear_status();
        }
        KeyCode::Up => app.ui.browse_scroll = app.ui.browse_scroll.saturating_sub(1),
        KeyCode::Down => app.ui.browse_scroll = app.ui.browse_scroll.saturating_add(1),
        KeyCode::Left if app.ui.screen == Screen::Testimonials => app.ui.carousel.prev(),
        KeyCode::Right if app.ui.screen == Screen::Testimonials => app.ui.carousel.next(),
        KeyCode::Home if app.ui.screen == Screen::Testimonials => app.ui.carousel.jump(0),
        KeyCode::End if app.ui.screen == Screen::Testimonials => {
            let last = app.ui.carousel.len().saturating_sub(1);
            app.ui.carousel.jump(last);
        }
        _ => {}
    }
    LoopAction::Continue
}

fn handle_chat_key(app: &mut App, key: KeyEvent) -> LoopAction {
    match key.code {
        KeyCode::Esc => {
            app.ui.chat.open = false;
            app.ui.mode = Mode::Browse;
        }
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.ui.chat.edit_input(|ta| ta.insert_newline());
        }
        KeyCode::Enter => submit_chat_input(app),
        KeyCode::Up => {
            app.ui.chat.auto_scroll = false;
            app.ui.chat.scroll_offset = app.ui.chat.scroll_offset.saturating_sub(1);
        }
        KeyCode::Down => {
            app.ui.chat.scroll_offset = app.ui.chat.scroll_offset.saturating_add(1);
        }
        KeyCode::End | KeyCode::PageDown => {
            app.ui.chat.auto_scroll = true;
        }
        _ => {
            app.ui.chat.edit_input(|ta| {
                ta.input(Input::from(key));
            });
        }
    }
    LoopAction::Continue
}

fn submit_chat_input(app: &mut App) {
    // The send control stays disabled for whitespace-only input.
    if !app.ui.chat.can_send() {
        return;
    }

    let text = sanitize_text_input(app.ui.chat.input_text().trim());
    app.ui.chat.clear_input();

    match commands::process_input(app, &text) {
        CommandResult::Continue => {}
        CommandResult::ProcessAsMessage(message) => {
            app.conversation().submit_user_message(message);
        }
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> LoopAction {
    match key.code {
        KeyCode::Esc => app.ui.mode = Mode::Browse,
        KeyCode::Tab => app.ui.form.focus_next(),
        KeyCode::BackTab => app.ui.form.focus_prev(),
        KeyCode::Up if app.ui.form.focused() == FormField::LicenseType => {
            app.ui.form.cycle_license_type(false);
        }
        KeyCode::Down if app.ui.form.focused() == FormField::LicenseType => {
            app.ui.form.cycle_license_type(true);
        }
        KeyCode::Enter => {
            if app.ui.form.focused() == FormField::Submit {
                if app.ui.form.submit() {
                    app.ui
                        .set_status("Quote request sent — we'll reply within 24 hours");
                } else {
                    app.ui.set_status("Please fix the highlighted fields");
                }
            } else {
                app.ui.form.focus_next();
            }
        }
        KeyCode::Backspace => app.ui.form.delete_backward(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !c.is_control() {
                app.ui.form.insert_char(c);
            }
        }
        _ => {}
    }
    LoopAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::responder::ResponderService;

    fn test_app() -> App {
        let (responder, _rx) = ResponderService::new();
        App::new(Config::default(), None, responder, None, Some("dark"))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = test_app();
        for mode in [Mode::Browse, Mode::Chat, Mode::Form] {
            app.ui.mode = mode;
            let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(handle_key(&mut app, key), LoopAction::Quit);
        }
    }

    #[test]
    fn digits_switch_screens_in_browse_mode() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.ui.screen, Screen::WhyChooseUs);
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.ui.screen, Screen::WhyChooseUs);
    }

    #[test]
    fn c_opens_the_chat_and_shows_the_greeting() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert!(app.ui.chat.open);
        assert_eq!(app.ui.mode, Mode::Chat);
        assert_eq!(app.ui.chat.messages.len(), 1);
    }

    #[test]
    fn esc_closes_the_chat_back_to_browse() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.ui.chat.open);
        assert_eq!(app.ui.mode, Mode::Browse);
    }

    #[tokio::test]
    async fn typed_text_submits_on_enter() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        for c in "pricing?".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));

        assert!(app.ui.chat.input_text().is_empty());
        assert!(app.ui.chat.messages.iter().any(|m| m.is_user()));
        assert!(app.session.has_pending_reply());
    }

    #[test]
    fn whitespace_only_input_is_not_sent() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Enter));

        assert!(!app.ui.chat.messages.iter().any(|m| m.is_user()));
        assert!(!app.session.has_pending_reply());
    }

    #[test]
    fn alt_enter_inserts_a_newline_instead_of_sending() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        handle_key(&mut app, press(KeyCode::Char('b')));

        assert_eq!(app.ui.chat.input_text(), "a\nb");
        assert!(!app.ui.chat.messages.iter().any(|m| m.is_user()));
    }

    #[test]
    fn slash_commands_run_instead_of_messaging() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        for c in "/theme".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.ui.theme_id, "light");
        assert!(!app.ui.chat.messages.iter().any(|m| m.is_user()));
        assert!(!app.session.has_pending_reply());
    }

    #[test]
    fn enter_on_contact_screen_enters_form_mode() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('5')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.ui.mode, Mode::Form);
    }

    #[test]
    fn form_typing_tab_and_escape() {
        let mut app = test_app();
        app.ui.set_screen(Screen::Contact);
        app.ui.mode = Mode::Form;

        handle_key(&mut app, press(KeyCode::Char('J')));
        handle_key(&mut app, press(KeyCode::Char('o')));
        assert_eq!(app.ui.form.name, "Jo");

        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.ui.form.focused(), FormField::Email);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.ui.mode, Mode::Browse);
    }

    #[test]
    fn submit_with_empty_form_reports_validation_errors() {
        let mut app = test_app();
        app.ui.set_screen(Screen::Contact);
        app.ui.mode = Mode::Form;
        while app.ui.form.focused() != FormField::Submit {
            app.ui.form.focus_next();
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.ui.form.errors.is_empty());
        assert!(!app.ui.form.submitted);
    }

    #[test]
    fn carousel_keys_only_act_on_the_testimonials_screen() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.ui.carousel.index(), 0);

        handle_key(&mut app, press(KeyCode::Char('4')));
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.ui.carousel.index(), 1);
        handle_key(&mut app, press(KeyCode::Home));
        assert_eq!(app.ui.carousel.index(), 0);
    }

    #[test]
    fn pasted_control_bytes_never_reach_the_composer() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        handle_paste(&mut app, "pri\x07cing");
        assert_eq!(app.ui.chat.input_text(), "pricing");
    }
}
