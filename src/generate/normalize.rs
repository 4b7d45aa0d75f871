pub const OPEN_MARKER: &str = "/**";
pub const CLOSE_MARKER: &str = "*/";
const FENCE: &str = "```";

/// Turn raw model output into a well-formed `/** ... */` block.
///
/// Never fails: badly shaped input degrades into a best-effort block. Applying it to
/// text that already starts with `/**` and ends with `*/` returns the text unchanged.
pub fn normalize_comment(raw: &str) -> String {
    let mut text = strip_fence(raw.trim());

    if !text.starts_with(OPEN_MARKER) {
        text = format!("{OPEN_MARKER}\n * {}", text.trim_start_matches(['*', ' ']));
    }
    if !text.ends_with(CLOSE_MARKER) {
        text = format!("{}\n {CLOSE_MARKER}", text.trim_end());
    }
    text
}

/// Drop the opening and closing fence lines of a fenced block. Inputs with two or
/// fewer lines are returned as-is.
fn strip_fence(text: &str) -> String {
    if !text.starts_with(FENCE) {
        return text.to_string();
    }
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        text.to_string()
    }
}
