use super::input::Key;
use super::request::{HttpMethod, Request, ResourceTree};
use super::rows::RowRef;

/// The request currently loaded into the request pane.
///
/// It is a copy: edits stay here until committed with Enter, which writes the
/// field back to the tree at `location`. `location` is positional, so the app
/// must report picker deletions through [`ActiveRequest::row_removed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveRequest {
    location: Option<(usize, usize)>,
    request: Option<Request>,
    url_input: String,
    /// URL before editing started, restored on Esc.
    url_prev: String,
    editing_url: bool,
    method: HttpMethod,
    /// Highlighted entry while the method popup is open.
    method_cursor: Option<usize>,
}

impl ActiveRequest {
    pub fn request(&self) -> Option<&Request> {
        self.request.as_ref()
    }

    #[cfg(test)]
    pub fn location(&self) -> Option<(usize, usize)> {
        self.location
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn is_editing_url(&self) -> bool {
        self.editing_url
    }

    pub fn method_cursor(&self) -> Option<usize> {
        self.method_cursor
    }

    /// Copies request `(fi, ri)` out of the tree. Returns false if it does not exist.
    pub fn load(&mut self, tree: &ResourceTree, fi: usize, ri: usize) -> bool {
        let Some(request) = tree.request(fi, ri) else {
            return false;
        };
        self.url_input = request.url.clone();
        self.method = request.method;
        self.request = Some(request.clone());
        self.location = Some((fi, ri));
        self.editing_url = false;
        self.method_cursor = None;
        true
    }

    /// The request as it would be sent: the loaded copy with the edited URL and method.
    pub fn snapshot(&self) -> Option<Request> {
        let mut request = self.request.clone()?;
        request.url = self.url_input.clone();
        request.method = self.method;
        Some(request)
    }

    pub fn begin_url_edit(&mut self) {
        self.url_prev = self.url_input.clone();
        self.editing_url = true;
    }

    pub fn handle_url_key(&mut self, tree: &mut ResourceTree, key: Key) {
        if !self.editing_url {
            return;
        }
        match key {
            Key::Enter => {
                self.editing_url = false;
                let url = self.url_input.clone();
                self.write_back(tree, |r| r.url.clone_from(&url));
            }
            Key::Esc => {
                self.editing_url = false;
                self.url_input = std::mem::take(&mut self.url_prev);
            }
            Key::Backspace => {
                self.url_input.pop();
            }
            Key::Char(c) => self.url_input.push(c),
            _ => {}
        }
    }

    pub fn open_method_picker(&mut self) {
        self.method_cursor = Some(self.method.index());
    }

    pub fn handle_method_key(&mut self, tree: &mut ResourceTree, key: Key) {
        let Some(cursor) = self.method_cursor else {
            return;
        };
        match key {
            Key::Esc => self.method_cursor = None,
            Key::Enter => {
                self.method_cursor = None;
                self.method = HttpMethod::ALL[cursor];
                let method = self.method;
                self.write_back(tree, |r| r.method = method);
            }
            Key::Char('j') | Key::Down => {
                self.method_cursor = Some((cursor + 1).min(HttpMethod::ALL.len() - 1));
            }
            Key::Char('k') | Key::Up => self.method_cursor = Some(cursor.saturating_sub(1)),
            _ => {}
        }
    }

    fn write_back(&mut self, tree: &mut ResourceTree, apply: impl Fn(&mut Request)) {
        if let Some(request) = self.request.as_mut() {
            apply(request);
        }
        if let Some((fi, ri)) = self.location {
            if let Some(target) = tree.request_mut(fi, ri) {
                apply(target);
                tracing::info!(folder = fi, request = ri, "request updated");
            }
        }
    }

    /// Re-keys the tree location after the picker removed `row`. The loaded copy
    /// stays on screen, but if it was the removed node it is detached from the tree.
    pub fn row_removed(&mut self, row: RowRef) {
        let Some((fi, ri)) = self.location else {
            return;
        };
        self.location = match row {
            RowRef::Folder(gone) if gone == fi => None,
            RowRef::Folder(gone) if gone < fi => Some((fi - 1, ri)),
            RowRef::Request(gf, gr) if gf == fi && gr == ri => None,
            RowRef::Request(gf, gr) if gf == fi && gr < ri => Some((fi, ri - 1)),
            _ => Some((fi, ri)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seed::seed_tree;

    fn loaded(fi: usize, ri: usize) -> (ResourceTree, ActiveRequest) {
        let tree = seed_tree();
        let mut active = ActiveRequest::default();
        assert!(active.load(&tree, fi, ri));
        (tree, active)
    }

    #[test]
    fn test_load_copies_url_and_method() {
        let (_, active) = loaded(0, 1);
        assert_eq!(active.url_input(), "https://httpbin.org/post");
        assert_eq!(active.method(), HttpMethod::Post);
        assert_eq!(active.location(), Some((0, 1)));
    }

    #[test]
    fn test_load_missing_request_fails() {
        let tree = seed_tree();
        let mut active = ActiveRequest::default();
        assert!(!active.load(&tree, 0, 9));
        assert!(active.request().is_none());
    }

    #[test]
    fn test_url_edit_commit_writes_back() {
        let (mut tree, mut active) = loaded(1, 0);
        active.begin_url_edit();
        for _ in 0.."octocat".len() {
            active.handle_url_key(&mut tree, Key::Backspace);
        }
        for c in "torvalds".chars() {
            active.handle_url_key(&mut tree, Key::Char(c));
        }
        active.handle_url_key(&mut tree, Key::Enter);
        assert!(!active.is_editing_url());
        assert_eq!(tree.folders[1].requests[0].url, "https://api.github.com/users/torvalds");
    }

    #[test]
    fn test_url_edit_escape_restores() {
        let (mut tree, mut active) = loaded(1, 0);
        let before = tree.clone();
        active.begin_url_edit();
        active.handle_url_key(&mut tree, Key::Char('!'));
        active.handle_url_key(&mut tree, Key::Esc);
        assert_eq!(active.url_input(), "https://api.github.com/users/octocat");
        assert_eq!(tree, before);
    }

    #[test]
    fn test_snapshot_is_decoupled_until_commit() {
        let (mut tree, mut active) = loaded(1, 0);
        active.begin_url_edit();
        active.handle_url_key(&mut tree, Key::Char('?'));
        let snap = active.snapshot().unwrap();
        assert!(snap.url.ends_with('?'));
        assert!(!tree.folders[1].requests[0].url.ends_with('?'));
    }

    #[test]
    fn test_method_picker_moves_and_commits() {
        let (mut tree, mut active) = loaded(1, 0);
        active.open_method_picker();
        assert_eq!(active.method_cursor(), Some(0));
        for key in [Key::Char('k'), Key::Down, Key::Down, Key::Char('j')] {
            active.handle_method_key(&mut tree, key);
        }
        assert_eq!(active.method_cursor(), Some(3));
        active.handle_method_key(&mut tree, Key::Enter);
        assert_eq!(active.method(), HttpMethod::Patch);
        assert_eq!(active.method_cursor(), None);
        assert_eq!(tree.folders[1].requests[0].method, HttpMethod::Patch);
    }

    #[test]
    fn test_method_picker_clamps_and_cancels() {
        let (mut tree, mut active) = loaded(2, 2);
        active.open_method_picker();
        assert_eq!(active.method_cursor(), Some(4));
        active.handle_method_key(&mut tree, Key::Down);
        assert_eq!(active.method_cursor(), Some(4));
        active.handle_method_key(&mut tree, Key::Up);
        active.handle_method_key(&mut tree, Key::Esc);
        assert_eq!(active.method(), HttpMethod::Delete);
    }

    #[test]
    fn test_row_removed_rekeys_location() {
        let (_, mut active) = loaded(2, 1);
        active.row_removed(RowRef::Request(1, 0));
        assert_eq!(active.location(), Some((2, 1)));
        active.row_removed(RowRef::Request(2, 0));
        assert_eq!(active.location(), Some((2, 0)));
        active.row_removed(RowRef::Folder(0));
        assert_eq!(active.location(), Some((1, 0)));
        active.row_removed(RowRef::Folder(1));
        assert_eq!(active.location(), None);
        assert!(active.request().is_some());
    }

    #[test]
    fn test_commit_after_detach_leaves_tree_alone() {
        let (mut tree, mut active) = loaded(0, 0);
        tree.remove_request(0, 0);
        active.row_removed(RowRef::Request(0, 0));
        let before = tree.clone();
        active.begin_url_edit();
        active.handle_url_key(&mut tree, Key::Char('x'));
        active.handle_url_key(&mut tree, Key::Enter);
        assert_eq!(tree, before);
    }
}
