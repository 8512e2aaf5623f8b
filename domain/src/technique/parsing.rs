//! Idea extraction from free-form generated text.
//!
//! Pure text processing: no I/O, no knowledge of which technique produced
//! the text.

/// Leading markers stripped from an accepted line, first match wins.
///
/// `*` is stripped but does not make a line an idea on its own.
const MARKERS: [&str; 8] = ["1.", "2.", "3.", "4.", "5.", "-", "•", "*"];

/// Parse generated text into at most `max_ideas` idea strings.
///
/// A line is accepted when, trimmed, it is non-empty and starts with a digit,
/// `-` or `•`. One leading marker is stripped from each accepted line.
/// When no line is accepted the whole trimmed text becomes a single idea.
///
/// # Examples
///
/// ```
/// use scamper_domain::technique::parsing::parse_ideas;
///
/// let ideas = parse_ideas("Ideas:\n1. Walk\n2. Run\n3. Swim\n4. Fly", 3);
/// assert_eq!(ideas, vec!["Walk", "Run", "Swim"]);
///
/// assert_eq!(parse_ideas("just one thought", 3), vec!["just one thought"]);
/// ```
pub fn parse_ideas(text: &str, max_ideas: usize) -> Vec<String> {
    let mut ideas: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| is_idea_line(line))
        .map(strip_marker)
        .filter(|idea| !idea.is_empty())
        .map(str::to_string)
        .collect();

    if ideas.is_empty() {
        let whole = text.trim();
        if whole.is_empty() {
            return Vec::new();
        }
        ideas.push(whole.to_string());
    }

    ideas.truncate(max_ideas);
    ideas
}

fn is_idea_line(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => c.is_ascii_digit() || matches!(c, '-' | '•'),
        None => false,
    }
}

fn strip_marker(line: &str) -> &str {
    MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_markers_stripped_in_order() {
        let text = "1. Rotate facilitators\n2. Async standups\n3. No-meeting Fridays";
        assert_eq!(
            parse_ideas(text, 3),
            vec!["Rotate facilitators", "Async standups", "No-meeting Fridays"]
        );
    }

    #[test]
    fn test_fewer_items_than_cap() {
        let text = "- First\n- Second";
        assert_eq!(parse_ideas(text, 3), vec!["First", "Second"]);
    }

    #[test]
    fn test_mixed_bullets_and_preamble() {
        let text = "Here are some ideas:\n\n• Alpha\n  - Beta  \nclosing remark";
        assert_eq!(parse_ideas(text, 5), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_asterisk_lines_are_not_ideas() {
        let text = "Aquí van:\n* Primera\n* Segunda\n**Negrita** final";
        assert_eq!(parse_ideas(text, 3), vec![text]);
    }

    #[test]
    fn test_cap_keeps_first_in_appearance_order() {
        let text = "1. a\n2. b\n3. c\n4. d\n5. e";
        assert_eq!(parse_ideas(text, 3), vec!["a", "b", "c"]);
        assert_eq!(parse_ideas(text, 1), vec!["a"]);
    }

    #[test]
    fn test_fallback_to_whole_text() {
        let text = "  A single paragraph without any list markers.\nSecond line.  ";
        assert_eq!(
            parse_ideas(text, 3),
            vec!["A single paragraph without any list markers.\nSecond line."]
        );
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(parse_ideas("", 3).is_empty());
        assert!(parse_ideas("   \n  ", 3).is_empty());
    }

    #[test]
    fn test_only_one_marker_stripped() {
        assert_eq!(parse_ideas("1. - nested", 3), vec!["- nested"]);
    }

    #[test]
    fn test_unlisted_number_kept_verbatim() {
        // Only "1."-"5." are stripped; "6." stays as-is.
        assert_eq!(parse_ideas("6. sixth", 3), vec!["6. sixth"]);
    }

    #[test]
    fn test_bare_marker_line_skipped() {
        let text = "-\n1. real idea";
        assert_eq!(parse_ideas(text, 3), vec!["real idea"]);
    }
}
