use super::{CorpusLine, Matcher};
use crate::state::rows::RowRef;

/// Case-insensitive subsequence filter. No scoring: corpus order is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsequenceMatcher;

impl Matcher for SubsequenceMatcher {
    fn matches(&self, corpus: &[CorpusLine], query: &str) -> Vec<RowRef> {
        let needle: Vec<char> = query.to_lowercase().chars().collect();
        corpus
            .iter()
            .filter(|line| is_subsequence(&needle, &line.text.to_lowercase()))
            .map(|line| line.row)
            .collect()
    }
}

/// True when every char of `needle` appears in `haystack` in order.
pub fn is_subsequence(needle: &[char], haystack: &str) -> bool {
    let mut want = needle.iter().peekable();
    for c in haystack.chars() {
        match want.peek() {
            Some(&&w) if w == c => {
                want.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    want.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_contiguous_and_scattered() {
        assert!(is_subsequence(&chars("hub"), "github"));
        assert!(is_subsequence(&chars("gtb"), "github"));
        assert!(!is_subsequence(&chars("bug"), "github"));
    }

    #[test]
    fn test_empty_needle_matches() {
        assert!(is_subsequence(&[], "anything"));
        assert!(is_subsequence(&[], ""));
    }

    #[test]
    fn test_multibyte() {
        assert!(is_subsequence(&chars("çé"), "garçon café"));
        assert!(!is_subsequence(&chars("éç"), "garçon"));
    }

    #[test]
    fn test_case_insensitive_and_ordered() {
        let corpus = vec![
            CorpusLine { row: RowRef::Folder(0), text: "Stripe".into() },
            CorpusLine { row: RowRef::Request(0, 0), text: "GitHub List Repos".into() },
            CorpusLine { row: RowRef::Request(0, 1), text: "Get User".into() },
        ];
        let rows = SubsequenceMatcher.matches(&corpus, "GU");
        assert_eq!(rows, vec![RowRef::Request(0, 0), RowRef::Request(0, 1)]);
    }
}
