use std::fmt;

use super::input::Key;
use super::request::{Folder, Request, ResourceTree};
use super::rows::{Expansion, RowRef, flatten};
use crate::search::{Matcher, search};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKind {
    Folder,
    Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    #[default]
    Normal,
    /// Typing edits the search query.
    Insert,
    /// Typing edits the name of a new folder or request.
    Adding(AddKind),
    /// Waiting for y/n on deleting the row under the cursor.
    ConfirmDelete,
}

/// What the owner of the picker has to do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    None,
    /// The picker closed without a selection.
    Close,
    /// A request was chosen; the picker has already closed itself.
    Select { folder: usize, request: usize },
    /// A node left the tree. Positional references held elsewhere must be re-keyed.
    Removed(RowRef),
}

/// One display line handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerRow {
    pub row: RowRef,
    pub selected: bool,
    pub expanded: bool,
}

/// Modal folder/request picker.
///
/// The cursor always indexes the row list currently shown: search results
/// while a query is set, the flattened tree otherwise. Every transition that
/// can shrink that list re-clamps the cursor before returning.
pub struct Picker {
    visible: bool,
    mode: PickerMode,
    query: String,
    cursor: usize,
    expansion: Expansion,
    /// Search results for `query`. Rebuilt on every query change and after
    /// every tree mutation, so coordinates never go stale.
    results: Vec<RowRef>,
    add_buffer: String,
    matcher: Box<dyn Matcher>,
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("visible", &self.visible)
            .field("mode", &self.mode)
            .field("query", &self.query)
            .field("cursor", &self.cursor)
            .field("expansion", &self.expansion)
            .field("results", &self.results)
            .field("add_buffer", &self.add_buffer)
            .finish_non_exhaustive()
    }
}

impl Picker {
    pub fn new(matcher: Box<dyn Matcher>) -> Self {
        Self {
            visible: false,
            mode: PickerMode::Normal,
            query: String::new(),
            cursor: 0,
            expansion: Expansion::default(),
            results: Vec::new(),
            add_buffer: String::new(),
            matcher,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn add_buffer(&self) -> &str {
        &self.add_buffer
    }

    #[cfg(test)]
    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    /// Shows the picker with a fresh query. Expansion survives between opens.
    pub fn open(&mut self) {
        self.visible = true;
        self.reset_session();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.mode = PickerMode::Normal;
        self.query.clear();
        self.results.clear();
        self.add_buffer.clear();
        self.cursor = 0;
    }

    /// The rows currently shown: search results or the flattened tree, never a mix.
    pub fn rows(&self, tree: &ResourceTree) -> Vec<RowRef> {
        if self.query.is_empty() {
            flatten(tree, &self.expansion)
        } else {
            self.results.clone()
        }
    }

    pub fn current(&self, tree: &ResourceTree) -> Option<RowRef> {
        self.rows(tree).get(self.cursor).copied()
    }

    pub fn view(&self, tree: &ResourceTree) -> Vec<PickerRow> {
        self.rows(tree)
            .into_iter()
            .enumerate()
            .map(|(i, row)| PickerRow {
                row,
                selected: i == self.cursor,
                expanded: matches!(row, RowRef::Folder(fi) if self.expansion.is_expanded(fi)),
            })
            .collect()
    }

    fn clamp_cursor(&mut self, tree: &ResourceTree) {
        let len = self.rows(tree).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn refresh_results(&mut self, tree: &ResourceTree) {
        self.results = search(tree, &self.query, self.matcher.as_ref());
    }

    fn clear_query(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    fn move_cursor(&mut self, tree: &ResourceTree, down: bool) {
        let len = self.rows(tree).len();
        if down {
            if self.cursor + 1 < len {
                self.cursor += 1;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, tree: &mut ResourceTree, key: Key) -> PickerAction {
        if !self.visible {
            return PickerAction::None;
        }
        match self.mode {
            PickerMode::ConfirmDelete => self.handle_confirm_key(tree, key),
            PickerMode::Adding(kind) => self.handle_adding_key(tree, kind, key),
            PickerMode::Insert => self.handle_insert_key(tree, key),
            PickerMode::Normal => self.handle_normal_key(tree, key),
        }
    }

    fn handle_normal_key(&mut self, tree: &mut ResourceTree, key: Key) -> PickerAction {
        match key {
            Key::Esc => {
                if self.query.is_empty() {
                    self.close();
                    return PickerAction::Close;
                }
                self.clear_query();
                self.cursor = 0;
            }
            Key::Char('/') => {
                self.expansion.toggle_all(tree.folders.len());
                self.clamp_cursor(tree);
            }
            Key::Enter => return self.activate(tree),
            Key::Char('j') | Key::Down | Key::Ctrl('j') => self.move_cursor(tree, true),
            Key::Char('k') | Key::Up | Key::Ctrl('k') => self.move_cursor(tree, false),
            Key::Char('i') => self.mode = PickerMode::Insert,
            Key::Char('n') => {
                let kind = if self.expansion.any() { AddKind::Request } else { AddKind::Folder };
                self.add_buffer.clear();
                self.mode = PickerMode::Adding(kind);
            }
            Key::Char('d') => {
                if !self.rows(tree).is_empty() {
                    self.mode = PickerMode::ConfirmDelete;
                }
            }
            _ => {}
        }
        PickerAction::None
    }

    fn handle_insert_key(&mut self, tree: &mut ResourceTree, key: Key) -> PickerAction {
        match key {
            Key::Esc => self.mode = PickerMode::Normal,
            Key::Enter => {
                self.mode = PickerMode::Normal;
                if let Some(RowRef::Request(..)) = self.current(tree) {
                    return self.activate(tree);
                }
            }
            Key::Backspace => {
                if self.query.pop().is_some() {
                    self.refresh_results(tree);
                    self.clamp_cursor(tree);
                }
            }
            Key::Up => self.move_cursor(tree, false),
            Key::Down => self.move_cursor(tree, true),
            Key::Char(c) => {
                self.query.push(c);
                self.refresh_results(tree);
                self.cursor = 0;
            }
            _ => {}
        }
        PickerAction::None
    }

    fn handle_adding_key(&mut self, tree: &mut ResourceTree, kind: AddKind, key: Key) -> PickerAction {
        match key {
            Key::Esc => {
                self.add_buffer.clear();
                self.mode = PickerMode::Normal;
            }
            Key::Enter => self.commit_add(tree, kind),
            Key::Backspace => {
                self.add_buffer.pop();
            }
            Key::Char(c) => self.add_buffer.push(c),
            _ => {}
        }
        PickerAction::None
    }

    fn handle_confirm_key(&mut self, tree: &mut ResourceTree, key: Key) -> PickerAction {
        match key {
            Key::Char('y') | Key::Enter => self.perform_delete(tree),
            Key::Char('n') | Key::Esc => {
                self.mode = PickerMode::Normal;
                PickerAction::None
            }
            _ => PickerAction::None,
        }
    }

    /// Enter on the current row: folders toggle open/closed, requests are selected.
    fn activate(&mut self, tree: &ResourceTree) -> PickerAction {
        match self.current(tree) {
            None => PickerAction::None,
            Some(RowRef::Folder(fi)) => {
                self.expansion.toggle(fi);
                self.clamp_cursor(tree);
                PickerAction::None
            }
            Some(RowRef::Request(folder, request)) => {
                self.close();
                PickerAction::Select { folder, request }
            }
        }
    }

    fn commit_add(&mut self, tree: &mut ResourceTree, kind: AddKind) {
        self.mode = PickerMode::Normal;
        let name = std::mem::take(&mut self.add_buffer);
        if name.is_empty() {
            return;
        }

        let new_row = match kind {
            AddKind::Folder => {
                let fi = tree.push_folder(Folder::new(name.as_str()));
                RowRef::Folder(fi)
            }
            AddKind::Request => {
                let Some(fi) = self.current(tree).map(|row| row.folder_index()) else {
                    return;
                };
                let Some(ri) = tree.push_request(fi, Request::new(name.as_str())) else {
                    return;
                };
                self.expansion.expand(fi);
                RowRef::Request(fi, ri)
            }
        };
        tracing::info!(?new_row, name = %name, "added to tree");

        // The new node is only guaranteed visible in the unfiltered tree.
        self.clear_query();
        let rows = self.rows(tree);
        self.cursor = rows.iter().position(|r| *r == new_row).unwrap_or(0);
        self.clamp_cursor(tree);
    }

    fn perform_delete(&mut self, tree: &mut ResourceTree) -> PickerAction {
        self.mode = PickerMode::Normal;
        let Some(row) = self.current(tree) else {
            return PickerAction::None;
        };
        let removed = match row {
            RowRef::Folder(fi) => {
                let removed = tree.remove_folder(fi).is_some();
                if removed {
                    self.expansion.folder_removed(fi);
                }
                removed
            }
            RowRef::Request(fi, ri) => tree.remove_request(fi, ri).is_some(),
        };
        if !removed {
            return PickerAction::None;
        }
        tracing::info!(?row, "removed from tree");

        if !self.query.is_empty() {
            self.refresh_results(tree);
        }
        self.clamp_cursor(tree);
        PickerAction::Removed(row)
    }
}
