use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::{CorpusLine, Matcher};
use crate::state::rows::RowRef;

/// Skim-style fuzzy matching, best score first. Equal scores keep corpus order.
#[derive(Default)]
pub struct SkimMatcher {
    inner: SkimMatcherV2,
}

impl Matcher for SkimMatcher {
    fn matches(&self, corpus: &[CorpusLine], query: &str) -> Vec<RowRef> {
        let mut scored: Vec<(i64, RowRef)> = corpus
            .iter()
            .filter_map(|line| {
                self.inner
                    .fuzzy_match(&line.text, query)
                    .map(|score| (score, line.row))
            })
            .collect();
        // stable: ties stay in tree order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, row)| row).collect()
    }
}
