pub mod fuzzy;
pub mod ripgrep;
pub mod subsequence;

use std::time::Duration;

use crate::config::{MatcherKind, SearchConfig};
use crate::state::request::ResourceTree;
use crate::state::rows::RowRef;

pub use fuzzy::SkimMatcher;
pub use ripgrep::RipgrepMatcher;
pub use subsequence::SubsequenceMatcher;

/// One searchable line, tagged with the row it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLine {
    pub row: RowRef,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("matcher I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("matcher timed out after {0:?}")]
    Timeout(Duration),
    #[error("matcher exited with status {0}")]
    Exit(i32),
}

/// A strategy that filters the corpus down to the rows matching `query`.
///
/// Implementations never fail: anything that goes wrong is reported as no
/// results. Returned rows come from the corpus, so they are always valid for
/// the tree the corpus was built from.
pub trait Matcher {
    fn matches(&self, corpus: &[CorpusLine], query: &str) -> Vec<RowRef>;
}

/// One line per folder (its name) and one per request (all searchable fields),
/// in tree order.
pub fn build_corpus(tree: &ResourceTree) -> Vec<CorpusLine> {
    let mut corpus = Vec::new();
    for (fi, folder) in tree.folders.iter().enumerate() {
        corpus.push(CorpusLine {
            row: RowRef::Folder(fi),
            text: folder.name.replace(['\n', '\r'], " "),
        });
        for (ri, request) in folder.requests.iter().enumerate() {
            corpus.push(CorpusLine {
                row: RowRef::Request(fi, ri),
                text: request.search_text(),
            });
        }
    }
    corpus
}

/// Rows of `tree` matching `query`. An empty query matches nothing; callers
/// fall back to the flattened tree.
pub fn search(tree: &ResourceTree, query: &str, matcher: &dyn Matcher) -> Vec<RowRef> {
    if query.is_empty() {
        return Vec::new();
    }
    let corpus = build_corpus(tree);
    matcher.matches(&corpus, query)
}

pub fn matcher_from_config(config: &SearchConfig) -> Box<dyn Matcher> {
    match config.matcher {
        MatcherKind::Subsequence => Box::new(SubsequenceMatcher),
        MatcherKind::Fuzzy => Box::new(SkimMatcher::default()),
        MatcherKind::Ripgrep => Box::new(RipgrepMatcher::new(
            config.rg_path.clone(),
            Duration::from_millis(config.timeout_ms),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::request::{Folder, Request};
    use crate::state::seed::seed_tree;

    #[test]
    fn test_corpus_has_line_per_folder_and_request() {
        let tree = seed_tree();
        let corpus = build_corpus(&tree);
        let expected: usize = tree.folders.iter().map(|f| 1 + f.requests.len()).sum();
        assert_eq!(corpus.len(), expected);
        assert_eq!(corpus[0].row, RowRef::Folder(0));
        assert_eq!(corpus[1].row, RowRef::Request(0, 0));
        assert!(corpus.iter().all(|l| !l.text.contains('\n')));
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        assert!(search(&seed_tree(), "", &SubsequenceMatcher).is_empty());
    }

    #[test]
    fn test_git_matches_only_github_request() {
        let mut github = Folder::new("Code");
        github.requests.push(Request::new("GitHub List Repos"));
        let mut stripe = Folder::new("Billing");
        stripe.requests.push(Request::new("Stripe List Customers"));
        let tree = crate::state::request::ResourceTree::new(vec![github, stripe]);

        let rows = search(&tree, "git", &SubsequenceMatcher);
        assert_eq!(rows, vec![RowRef::Request(0, 0)]);
    }

    #[test]
    fn test_matcher_from_config_respects_kind() {
        let config = SearchConfig { matcher: MatcherKind::Subsequence, ..Default::default() };
        let matcher = matcher_from_config(&config);
        let rows = search(&seed_tree(), "stripe", matcher.as_ref());
        assert!(rows.contains(&RowRef::Folder(2)));
    }
}
