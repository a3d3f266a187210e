use std::collections::BTreeSet;

use super::request::ResourceTree;

/// A transient reference to one visible line of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRef {
    Folder(usize),
    Request(usize, usize),
}

impl RowRef {
    pub fn folder_index(&self) -> usize {
        match *self {
            RowRef::Folder(fi) | RowRef::Request(fi, _) => fi,
        }
    }

    /// Whether the coordinates still point into `tree`.
    #[cfg(test)]
    pub fn is_valid(&self, tree: &ResourceTree) -> bool {
        match *self {
            RowRef::Folder(fi) => tree.folder(fi).is_some(),
            RowRef::Request(fi, ri) => tree.request(fi, ri).is_some(),
        }
    }
}

/// Set of expanded folder indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expansion {
    expanded: BTreeSet<usize>,
}

impl Expansion {
    pub fn is_expanded(&self, fi: usize) -> bool {
        self.expanded.contains(&fi)
    }

    pub fn any(&self) -> bool {
        !self.expanded.is_empty()
    }

    pub fn expand(&mut self, fi: usize) {
        self.expanded.insert(fi);
    }

    pub fn toggle(&mut self, fi: usize) {
        if !self.expanded.remove(&fi) {
            self.expanded.insert(fi);
        }
    }

    /// Collapses everything if anything is open, otherwise opens all `count` folders.
    pub fn toggle_all(&mut self, count: usize) {
        if self.any() {
            self.expanded.clear();
        } else {
            self.expanded.extend(0..count);
        }
    }

    /// Re-keys the set after folder `removed` left the tree: the removed index
    /// is dropped and every index above it shifts down by one.
    pub fn folder_removed(&mut self, removed: usize) {
        self.expanded = self
            .expanded
            .iter()
            .filter(|&&fi| fi != removed)
            .map(|&fi| if fi > removed { fi - 1 } else { fi })
            .collect();
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}

/// Tree rows in display order: every folder, followed by its requests when expanded.
pub fn flatten(tree: &ResourceTree, expansion: &Expansion) -> Vec<RowRef> {
    let mut rows = Vec::with_capacity(tree.folders.len());
    for (fi, folder) in tree.folders.iter().enumerate() {
        rows.push(RowRef::Folder(fi));
        if expansion.is_expanded(fi) {
            rows.extend((0..folder.requests.len()).map(|ri| RowRef::Request(fi, ri)));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::request::{Folder, Request};

    fn tree() -> ResourceTree {
        let mut a = Folder::new("A");
        a.requests.push(Request::new("GET /1"));
        a.requests.push(Request::new("GET /2"));
        let mut b = Folder::new("B");
        b.requests.push(Request::new("POST /3"));
        ResourceTree::new(vec![a, b, Folder::new("C")])
    }

    #[test]
    fn test_flatten_collapsed_lists_folders_only() {
        let rows = flatten(&tree(), &Expansion::default());
        assert_eq!(rows, vec![RowRef::Folder(0), RowRef::Folder(1), RowRef::Folder(2)]);
    }

    #[test]
    fn test_flatten_expanded_folder_children_follow_header() {
        let mut exp = Expansion::default();
        exp.expand(0);
        let rows = flatten(&tree(), &exp);
        assert_eq!(
            rows,
            vec![
                RowRef::Folder(0),
                RowRef::Request(0, 0),
                RowRef::Request(0, 1),
                RowRef::Folder(1),
                RowRef::Folder(2),
            ]
        );
    }

    #[test]
    fn test_flatten_empty_tree() {
        assert!(flatten(&ResourceTree::default(), &Expansion::default()).is_empty());
    }

    #[test]
    fn test_toggle_all_expands_then_collapses() {
        let mut exp = Expansion::default();
        exp.toggle_all(3);
        assert_eq!(exp.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        exp.toggle_all(3);
        assert!(!exp.any());
    }

    #[test]
    fn test_toggle_all_collapses_when_any_open() {
        let mut exp = Expansion::default();
        exp.expand(1);
        exp.toggle_all(3);
        assert!(!exp.any());
    }

    #[test]
    fn test_folder_removed_rekeys_indices() {
        let mut exp = Expansion::default();
        for fi in [0, 2, 3, 5] {
            exp.expand(fi);
        }
        exp.folder_removed(2);
        assert_eq!(exp.iter().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn test_folder_removed_unexpanded_index_still_shifts() {
        let mut exp = Expansion::default();
        exp.expand(0);
        exp.expand(4);
        exp.folder_removed(1);
        assert_eq!(exp.iter().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_row_validity() {
        let t = tree();
        assert!(RowRef::Request(1, 0).is_valid(&t));
        assert!(!RowRef::Request(1, 1).is_valid(&t));
        assert!(!RowRef::Folder(3).is_valid(&t));
    }
}
