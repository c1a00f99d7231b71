//! Text-input sanitizing shared by the chat panel and the quote form.

/// Normalize typed or pasted text before it reaches UI state: tabs become
/// four spaces, carriage returns become newlines, and remaining control
/// characters are dropped so stray escape bytes cannot corrupt the terminal.
pub fn sanitize_text_input(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match c {
            '\t' => out.push_str("    "),
            '\r' => out.push('\n'),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c => out.push(c),
        }
        out
    })
}
