/// Greedy word wrap using an approximate per-character advance.
///
/// Exact glyph metrics are not available for the builtin fonts; a rough
/// 0.6 em advance keeps lines inside the frame. Blank input lines are
/// preserved as empty strings.
pub(crate) fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    if max_width <= 0.0 {
        return text.lines().map(|s| s.to_string()).collect();
    }
    let char_width = font_size * 0.6;
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            if test_line.len() as f32 * char_width > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = word.to_string();
            } else {
                current_line = test_line;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}
