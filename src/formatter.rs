//! Reply formatting for Telegram: normalizes the model's markdown dialect
//! into MarkdownV2 and splits long replies into sendable segments.

use std::sync::LazyLock;

use regex::Regex;

/// Telegram's hard limit for a single message, in characters.
pub const MAX_MESSAGE_LEN: usize = 4096;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+(.+)$").expect("valid heading pattern"));
static DOUBLE_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid emphasis pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\s+").expect("valid bullet pattern"));

/// Characters MarkdownV2 treats as syntax; each must be backslash-escaped.
const RESERVED: &[char] = &[
    '_', '`', '[', ']', '(', ')', '~', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Translate the model's loose markdown into Telegram MarkdownV2.
///
/// Headings become bold lines, double emphasis collapses to single, bullet
/// markers become literal bullets, and reserved characters are escaped.
#[must_use]
pub fn format_response(text: &str) -> String {
    let text = HEADING.replace_all(text, "*${1}*");
    let text = DOUBLE_EMPHASIS.replace_all(&text, "*${1}*");
    let text = BULLET.replace_all(&text, "\u{2022} ");

    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    // Collapse doubled backslashes exactly once, after escaping. An input
    // that already contained a literal backslash before a reserved character
    // comes out singly escaped; callers depend on that exact shape.
    escaped.replace("\\\\", "\\")
}

/// Strip every emphasis marker from a segment whose marker count is odd;
/// Telegram rejects messages with unbalanced entities.
#[must_use]
pub fn balance_emphasis(text: String) -> String {
    if text.matches('*').count() % 2 == 0 {
        text
    } else {
        text.replace('*', "")
    }
}

/// Split a model reply into Telegram-sized segments.
///
/// The reply is normalized with [`format_response`], then cut into pieces of
/// at most `max_length` characters, preferring newline and sentence
/// boundaries. Each emitted segment has an even number of emphasis markers.
/// An empty reply yields no segments.
#[must_use]
pub fn split_message(text: &str, max_length: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = format_response(text);

    while !current.is_empty() {
        if current.chars().count() <= max_length {
            segments.push(balance_emphasis(current));
            break;
        }

        let window_end = byte_index_of_char(&current, max_length);
        let split_at = find_split_point(&current, window_end, max_length);

        let chunk = &current[..split_at];
        // Counted before repair: a marker stripped from this segment may
        // still have been opened for the text that follows.
        let reopen = chunk.matches('*').count() % 2 != 0;
        segments.push(balance_emphasis(chunk.to_string()));

        let mut rest = current[split_at..].trim_start().to_string();
        if reopen {
            rest.insert(0, '*');
        }
        current = rest;
    }

    segments
}

/// Pick the split offset for a text longer than `max_length` characters.
///
/// Prefers the last newline in the window unless it falls before the
/// midpoint, then the last `". "` occurrence, then a hard cut at the window
/// end. A split at offset zero would never advance, so it also falls back to
/// the hard cut.
fn find_split_point(text: &str, window_end: usize, max_length: usize) -> usize {
    let window = &text[..window_end];

    if let Some(newline) = window.rfind('\n') {
        if window[..newline].chars().count() >= max_length / 2 {
            return newline;
        }
    }

    match window.rfind(". ") {
        Some(0) | None => window_end,
        Some(dot) => dot,
    }
}

/// Byte offset of the `n`-th character of `s`, or `s.len()` past the end.
fn byte_index_of_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_becomes_bold() {
        assert_eq!(format_response("## Title\ntext"), "*Title*\ntext");
    }

    #[test]
    fn heading_marker_mid_line_is_escaped_instead() {
        assert_eq!(format_response("see ## this"), "see \\#\\# this");
    }

    #[test]
    fn double_emphasis_collapses_to_single() {
        assert_eq!(format_response("**bold** word"), "*bold* word");
    }

    #[test]
    fn bullet_marker_becomes_literal_bullet() {
        assert_eq!(
            format_response("* first item\n* second item"),
            "\u{2022} first item\n\u{2022} second item"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(format_response("1. Hello!"), "1\\. Hello\\!");
    }

    #[test]
    fn existing_backslash_is_not_double_escaped() {
        // Escaping inserts a second backslash before the dot; the collapse
        // pass folds the pair back to one.
        assert_eq!(format_response("a\\.b"), "a\\.b");
    }

    #[test]
    fn doubled_backslash_collapses_to_one() {
        assert_eq!(format_response("a\\\\b"), "a\\b");
    }

    #[test]
    fn short_input_is_a_single_segment() {
        assert_eq!(
            split_message("plain text", MAX_MESSAGE_LEN),
            vec!["plain text"]
        );
    }

    #[test]
    fn single_segment_equals_balanced_formatted_input() {
        let input = "## Title\nAn *unmatched marker";
        assert_eq!(
            split_message(input, MAX_MESSAGE_LEN),
            vec![balance_emphasis(format_response(input))]
        );
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(split_message("", MAX_MESSAGE_LEN).is_empty());
    }

    #[test]
    fn long_plain_text_hard_cuts_at_limit() {
        let text = "a".repeat(9000);
        let segments = split_message(&text, MAX_MESSAGE_LEN);

        let lengths: Vec<usize> = segments.iter().map(String::len).collect();
        assert_eq!(lengths, vec![4096, 4096, 808]);
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn split_prefers_last_newline_in_window() {
        let mut text = "x".repeat(4000);
        text.push('\n');
        text.push_str(&"y".repeat(2000));

        let segments = split_message(&text, MAX_MESSAGE_LEN);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], "x".repeat(4000));
        assert_eq!(segments[1], "y".repeat(2000));
    }

    #[test]
    fn newline_before_midpoint_falls_back_to_sentence_split() {
        let mut text = "x".repeat(100);
        text.push('\n');
        text.push_str(&"y".repeat(3000));
        text.push_str(". ");
        text.push_str(&"z".repeat(3000));

        let segments = split_message(&text, MAX_MESSAGE_LEN);
        assert_eq!(segments.len(), 2);
        // The period is escaped during normalization, so the split lands on
        // the ". " inside "\. " and the escape backslash stays behind.
        assert_eq!(segments[0].chars().count(), 3102);
        assert!(segments[0].ends_with('\\'));
        assert!(segments[1].starts_with(". z"));
    }

    #[test]
    fn odd_marker_is_stripped_and_next_segment_unaffected() {
        let mut text = "a".repeat(100);
        text.push('*');
        text.push_str(&"b".repeat(3899));
        text.push('\n');
        text.push_str(&"c".repeat(1999));

        let segments = split_message(&text, MAX_MESSAGE_LEN);
        assert_eq!(segments.len(), 2);
        // First segment had one unmatched marker within the window.
        assert!(!segments[0].contains('*'));
        assert_eq!(segments[0].len(), 3999);
        // The carried-forward marker is stripped again by the repair, leaving
        // the tail text unchanged.
        assert_eq!(segments[1], "c".repeat(1999));
    }

    #[test]
    fn every_segment_is_bounded_and_balanced() {
        let mut text = String::new();
        for i in 0..400 {
            text.push_str(&format!(
                "## Part {i}\nSome **important** notes about topic {i}. More detail follows!\n"
            ));
        }

        let segments = split_message(&text, MAX_MESSAGE_LEN);
        assert!(segments.len() > 1);
        for segment in &segments {
            assert!(segment.chars().count() <= MAX_MESSAGE_LEN);
            assert_eq!(segment.matches('*').count() % 2, 0);
        }
    }

    #[test]
    fn balance_is_idempotent_on_balanced_text() {
        let balanced = balance_emphasis("*bold* and *more*".to_string());
        assert_eq!(balance_emphasis(balanced.clone()), balanced);
    }

    #[test]
    fn balance_strips_odd_marker_counts() {
        assert_eq!(
            balance_emphasis("*bold* and *broken".to_string()),
            "bold and broken"
        );
    }

    #[test]
    fn multibyte_hard_cut_lands_on_char_boundary() {
        let text = "\u{e9}".repeat(5000);
        let segments = split_message(&text, MAX_MESSAGE_LEN);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chars().count(), 4096);
        assert_eq!(segments[1].chars().count(), 904);
    }
}
