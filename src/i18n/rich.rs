//! Rich - Minimal Markup Transform
//!
//! Catalog strings may carry `**bold**` segments and `\n` line breaks.
//! Everything else renders as plain text.

/// One styled fragment of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: false,
        }
    }

    fn bold(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: true,
        }
    }
}

/// True when the text needs the rich-text path
pub fn is_rich(text: &str) -> bool {
    text.contains("**") || text.contains('\n')
}

/// Parse text into lines of styled spans. An unpaired `**` stays verbatim.
pub fn parse_lines(text: &str) -> Vec<Vec<Span>> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let (plain, after_open) = rest.split_at(open);
        let Some(close) = after_open[2..].find("**") else {
            break;
        };
        if !plain.is_empty() {
            spans.push(Span::plain(plain));
        }
        let bold = &after_open[2..2 + close];
        if !bold.is_empty() {
            spans.push(Span::bold(bold));
        }
        rest = &after_open[2 + close + 2..];
    }
    if !rest.is_empty() {
        spans.push(Span::plain(rest));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_span() {
        let lines = parse_lines("just words");
        assert_eq!(lines, vec![vec![Span::plain("just words")]]);
    }

    #[test]
    fn test_bold_segment_splits_line() {
        let lines = parse_lines("Mint the **Flash**. Own the future.");
        assert_eq!(
            lines,
            vec![vec![
                Span::plain("Mint the "),
                Span::bold("Flash"),
                Span::plain(". Own the future."),
            ]]
        );
    }

    #[test]
    fn test_line_break_marker_makes_lines() {
        let lines = parse_lines("first\nsecond");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], vec![Span::plain("second")]);
    }

    #[test]
    fn test_unpaired_marker_stays_verbatim() {
        let lines = parse_lines("odd ** marker");
        assert_eq!(lines, vec![vec![Span::plain("odd ** marker")]]);
    }

    #[test]
    fn test_is_rich() {
        assert!(is_rich("**b**"));
        assert!(is_rich("a\nb"));
        assert!(!is_rich("plain"));
    }
}
