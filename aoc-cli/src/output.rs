//! Human-facing output: download previews and banners

/// Lines shown in full before the preview is cut off
const PREVIEW_LINES: usize = 10;

/// Characters kept from the first line of a short input
const PREVIEW_WIDTH: usize = 80;

/// Preview of a freshly downloaded input.
///
/// Inputs longer than ten lines show their first ten lines; shorter ones
/// (often a single huge line) show the first 80 characters of the first
/// line. Either way the preview ends with `...`.
pub fn input_preview(input: &str) -> String {
    let lines: Vec<&str> = input.lines().collect();
    let mut out = String::new();
    if lines.len() > PREVIEW_LINES {
        for line in &lines[..PREVIEW_LINES] {
            out.push_str(line);
            out.push('\n');
        }
    } else {
        let first = lines.first().copied().unwrap_or_default();
        out.extend(first.chars().take(PREVIEW_WIDTH));
        out.push('\n');
    }
    out.push_str("...");
    out
}

/// `text` centred in a dashed rule of `width` characters
pub fn banner(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", "-".repeat(left), text, "-".repeat(right))
}
