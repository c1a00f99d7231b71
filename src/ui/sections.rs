//! Pre-wrapped display lines for the browse screens and the chat
//! transcript. Everything here returns owned `Line`s already wrapped to the
//! target width, so scroll math downstream can trust `lines.len()`.

use std::collections::VecDeque;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::core::contact::{FormField, QuoteForm};
use crate::core::content::site_content;
use crate::core::message::Message;
use crate::ui::carousel::CarouselState;
use crate::ui::theme::Theme;
use crate::utils::scroll::ScrollCalculator;

const USER_PREFIX: &str = "You: ";

fn push_wrapped(out: &mut Vec<Line<'static>>, text: &str, style: Style, width: u16) {
    for row in ScrollCalculator::wrap_text(text, width) {
        out.push(Line::from(Span::styled(row, style)));
    }
}

fn blank(out: &mut Vec<Line<'static>>) {
    out.push(Line::from(""));
}

pub fn home_lines(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let hero = &site_content().hero;
    let mut out = Vec::new();

    push_wrapped(&mut out, &hero.headline, theme.heading_style, width);
    blank(&mut out);
    push_wrapped(&mut out, &hero.subheadline, theme.assistant_text_style, width);
    blank(&mut out);

    out.push(Line::from(Span::styled(
        "Recent Success Story",
        theme.accent_style,
    )));
    push_wrapped(
        &mut out,
        &format!("\u{201c}{}\u{201d}", hero.success_story),
        theme.assistant_text_style,
        width,
    );
    blank(&mut out);

    push_wrapped(
        &mut out,
        "Trusted by innovative companies worldwide",
        theme.muted_style,
        width,
    );
    push_wrapped(
        &mut out,
        &hero.trusted_by.join("  •  "),
        theme.accent_style,
        width,
    );
    out
}

pub fn how_it_works_lines(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    push_wrapped(&mut out, "How It Works", theme.heading_style, width);
    blank(&mut out);

    for (index, step) in site_content().steps.iter().enumerate() {
        out.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, step.title),
            theme.accent_style,
        )));
        push_wrapped(&mut out, &step.description, theme.assistant_text_style, width);
        blank(&mut out);
    }
    out
}

pub fn why_choose_us_lines(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let content = site_content();
    let mut out = Vec::new();

    push_wrapped(&mut out, "Why Choose SoftSell", theme.heading_style, width);
    blank(&mut out);

    for feature in &content.features {
        out.push(Line::from(Span::styled(
            feature.title.clone(),
            theme.accent_style,
        )));
        push_wrapped(
            &mut out,
            &feature.description,
            theme.assistant_text_style,
            width,
        );
        blank(&mut out);
    }

    for stat in &content.stats {
        out.push(Line::from(vec![
            Span::styled(format!("{:<8}", stat.value), theme.accent_style),
            Span::styled(stat.label.clone(), theme.muted_style),
        ]));
    }
    out
}

pub fn testimonials_lines(
    theme: &Theme,
    carousel: &CarouselState,
    width: u16,
) -> Vec<Line<'static>> {
    let testimonials = &site_content().testimonials;
    let mut out = Vec::new();

    push_wrapped(&mut out, "What Our Clients Say", theme.heading_style, width);
    blank(&mut out);

    if let Some(testimonial) = testimonials.get(carousel.index()) {
        push_wrapped(
            &mut out,
            &format!("\u{201c}{}\u{201d}", testimonial.quote),
            theme.assistant_text_style,
            width,
        );
        blank(&mut out);
        push_wrapped(
            &mut out,
            &format!(
                "— {}, {}, {}",
                testimonial.name, testimonial.role, testimonial.company
            ),
            theme.accent_style,
            width,
        );
        blank(&mut out);

        let dots: String = (0..carousel.len())
            .map(|i| if i == carousel.index() { "● " } else { "○ " })
            .collect();
        out.push(Line::from(Span::styled(dots, theme.accent_style)));
        push_wrapped(
            &mut out,
            "←/→ browse • Home/End jump to the first/last story",
            theme.muted_style,
            width,
        );
    }
    out
}

pub fn contact_lines(theme: &Theme, form: &QuoteForm, focused: bool, width: u16) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    push_wrapped(&mut out, "Get a Free Valuation", theme.heading_style, width);
    push_wrapped(
        &mut out,
        "Fill out the form below and our team will get back to you within 24 hours",
        theme.muted_style,
        width,
    );
    blank(&mut out);

    if form.submitted {
        push_wrapped(&mut out, "Thanks for reaching out!", theme.accent_style, width);
        push_wrapped(
            &mut out,
            "We've received your message and will get back to you within 24 hours with a valuation estimate.",
            theme.assistant_text_style,
            width,
        );
        blank(&mut out);
    }

    for field in FormField::TAB_ORDER {
        let has_focus = focused && form.focused() == field;
        let marker = if has_focus { "▸ " } else { "  " };
        let label_style = if has_focus {
            theme.accent_style
        } else {
            theme.muted_style
        };

        match field {
            FormField::LicenseType => {
                let value = form
                    .license_type_label()
                    .map(|label| format!("‹ {label} ›"))
                    .unwrap_or_else(|| "‹ select with ↑/↓ ›".to_string());
                out.push(Line::from(vec![
                    Span::styled(format!("{marker}{:<14}", field.label()), label_style),
                    Span::styled(value, theme.input_text_style),
                ]));
            }
            FormField::Submit => {
                blank(&mut out);
                out.push(Line::from(Span::styled(
                    format!("{marker}[ {} ]", field.label()),
                    if has_focus {
                        theme.accent_style
                    } else {
                        theme.input_border_style
                    },
                )));
            }
            _ => {
                let value = form.text_field(field).unwrap_or_default();
                let cursor = if has_focus { "▏" } else { "" };
                out.push(Line::from(vec![
                    Span::styled(format!("{marker}{:<14}", field.label()), label_style),
                    Span::styled(format!("{value}{cursor}"), theme.input_text_style),
                ]));
            }
        }

        if let Some(error) = form.errors.get(&field) {
            out.push(Line::from(Span::styled(
                format!("    {error}"),
                theme.error_text_style,
            )));
        }
    }

    blank(&mut out);
    let hint = if focused {
        "Tab/Shift+Tab move • Enter advances, submits on the button • Esc leaves the form"
    } else {
        "Press Enter to fill in the form"
    };
    push_wrapped(&mut out, hint, theme.muted_style, width);
    out
}

/// Transcript rows for the chat panel: `You:`-prefixed user messages,
/// plain assistant text, dimmed app notices, one blank row between
/// messages.
pub fn transcript_lines(
    messages: &VecDeque<Message>,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let indent: String = " ".repeat(USER_PREFIX.len());

    for message in messages {
        if message.is_user() {
            let inner_width = width.saturating_sub(USER_PREFIX.len() as u16).max(1);
            for (i, row) in ScrollCalculator::wrap_text(&message.content, inner_width)
                .into_iter()
                .enumerate()
            {
                let prefix = if i == 0 {
                    Span::styled(USER_PREFIX, theme.user_prefix_style)
                } else {
                    Span::raw(indent.clone())
                };
                out.push(Line::from(vec![
                    prefix,
                    Span::styled(row, theme.user_text_style),
                ]));
            }
        } else {
            let style = if message.is_assistant() {
                theme.assistant_text_style
            } else {
                theme.notice_text_style
            };
            push_wrapped(&mut out, &message.content, style, width);
        }
        blank(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::AppMessageKind;

    fn theme() -> Theme {
        Theme::dark_default()
    }

    #[test]
    fn every_screen_produces_lines() {
        let theme = theme();
        let carousel = CarouselState::new(site_content().testimonials.len());
        let form = QuoteForm::new();
        assert!(!home_lines(&theme, 60).is_empty());
        assert!(!how_it_works_lines(&theme, 60).is_empty());
        assert!(!why_choose_us_lines(&theme, 60).is_empty());
        assert!(!testimonials_lines(&theme, &carousel, 60).is_empty());
        assert!(!contact_lines(&theme, &form, false, 60).is_empty());
    }

    #[test]
    fn testimonial_lines_follow_the_carousel() {
        let theme = theme();
        let mut carousel = CarouselState::new(site_content().testimonials.len());
        let first = testimonials_lines(&theme, &carousel, 60);
        carousel.next();
        let second = testimonials_lines(&theme, &carousel, 60);

        let flatten = |lines: &[Line]| {
            lines
                .iter()
                .map(|l| {
                    l.spans
                        .iter()
                        .map(|s| s.content.clone().into_owned())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_ne!(flatten(&first), flatten(&second));
    }

    #[test]
    fn form_errors_are_rendered_under_their_field() {
        let theme = theme();
        let mut form = QuoteForm::new();
        form.validate();
        let rendered = contact_lines(&theme, &form, true, 60);
        let text: String = rendered
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone().into_owned()))
            .collect();
        assert!(text.contains("Name is required"));
        assert!(text.contains("Please select a license type"));
    }

    #[test]
    fn transcript_prefixes_user_messages_only() {
        let theme = theme();
        let mut messages = VecDeque::new();
        messages.push_back(Message::user("what about pricing"));
        messages.push_back(Message::assistant("the pricing reply"));
        messages.push_back(Message::app(AppMessageKind::Info, "notice"));

        let lines = transcript_lines(&messages, &theme, 60);
        let rows: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.clone().into_owned())
                    .collect()
            })
            .collect();
        assert!(rows[0].starts_with("You: what about pricing"));
        assert!(rows.iter().any(|r| r == "the pricing reply"));
        assert_eq!(rows.iter().filter(|r| r.starts_with("You: ")).count(), 1);
    }

    #[test]
    fn long_user_messages_wrap_with_hanging_indent() {
        let theme = theme();
        let mut messages = VecDeque::new();
        messages.push_back(Message::user(
            "a rather long question about reselling several hundred unused seats",
        ));
        let lines = transcript_lines(&messages, &theme, 30);
        assert!(lines.len() > 2);
        let second: String = lines[1]
            .spans
            .iter()
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(second.starts_with("     "));
    }
}
