#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Picker order, also the order of the method popup.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    None,
    Bearer { token: String },
    Basic { username: String, password: String },
    ApiKey { key: String, value: String },
}

impl Auth {
    pub fn kind(&self) -> &'static str {
        match self {
            Auth::None => "none",
            Auth::Bearer { .. } => "bearer",
            Auth::Basic { .. } => "basic",
            Auth::ApiKey { .. } => "apikey",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Auth::None => "No Auth",
            Auth::Bearer { .. } => "Bearer Token",
            Auth::Basic { .. } => "Basic Auth",
            Auth::ApiKey { .. } => "API Key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    pub method: HttpMethod,
    pub name: String,
    pub url: String,
    pub headers: Vec<KeyValuePair>,
    pub params: Vec<KeyValuePair>,
    pub body: String,
    pub auth: Auth,
}

impl Request {
    /// A fresh request as created from the picker: GET, no URL, no auth.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Every searchable field joined by spaces on a single line.
    ///
    /// The password of basic auth is deliberately left out.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            &self.name,
            self.method.as_str(),
            &self.url,
            &self.body,
            self.auth.kind(),
        ];
        match &self.auth {
            Auth::None => {}
            Auth::Bearer { token } => parts.push(token),
            Auth::Basic { username, .. } => parts.push(username),
            Auth::ApiKey { key, value } => {
                parts.push(key);
                parts.push(value);
            }
        }
        for pair in self.headers.iter().chain(&self.params) {
            parts.push(&pair.key);
            parts.push(&pair.value);
        }
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .flat_map(|p| p.lines())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Folder {
    pub name: String,
    pub requests: Vec<Request>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), requests: Vec::new() }
    }
}

/// The two-level folder/request tree. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceTree {
    pub folders: Vec<Folder>,
}

impl ResourceTree {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    pub fn folder(&self, fi: usize) -> Option<&Folder> {
        self.folders.get(fi)
    }

    pub fn request(&self, fi: usize, ri: usize) -> Option<&Request> {
        self.folders.get(fi)?.requests.get(ri)
    }

    pub fn request_mut(&mut self, fi: usize, ri: usize) -> Option<&mut Request> {
        self.folders.get_mut(fi)?.requests.get_mut(ri)
    }

    /// Appends a folder and returns its index.
    pub fn push_folder(&mut self, folder: Folder) -> usize {
        self.folders.push(folder);
        self.folders.len() - 1
    }

    /// Appends a request to folder `fi` and returns its index within the folder.
    pub fn push_request(&mut self, fi: usize, request: Request) -> Option<usize> {
        let folder = self.folders.get_mut(fi)?;
        folder.requests.push(request);
        Some(folder.requests.len() - 1)
    }

    pub fn remove_folder(&mut self, fi: usize) -> Option<Folder> {
        (fi < self.folders.len()).then(|| self.folders.remove(fi))
    }

    pub fn remove_request(&mut self, fi: usize, ri: usize) -> Option<Request> {
        let folder = self.folders.get_mut(fi)?;
        (ri < folder.requests.len()).then(|| folder.requests.remove(ri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_includes_auth_headers_and_params() {
        let req = Request {
            method: HttpMethod::Post,
            name: "Create".into(),
            url: "https://api.example.com/items".into(),
            headers: vec![KeyValuePair::new("Accept", "application/json")],
            params: vec![KeyValuePair::new("page", "2")],
            body: "{\n  \"a\": 1\n}".into(),
            auth: Auth::ApiKey { key: "X-Key".into(), value: "secret".into() },
        };
        insta::assert_snapshot!(
            req.search_text(),
            @r#"Create POST https://api.example.com/items {   "a": 1 } apikey X-Key secret Accept application/json page 2"#
        );
    }

    #[test]
    fn test_search_text_skips_basic_password() {
        let req = Request {
            auth: Auth::Basic { username: "alice".into(), password: "hunter2".into() },
            ..Request::new("Login")
        };
        let text = req.search_text();
        assert!(text.contains("alice"));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut tree = ResourceTree::new(vec![Folder::new("A")]);
        assert!(tree.remove_folder(3).is_none());
        assert!(tree.remove_request(0, 0).is_none());
        assert_eq!(tree.folders.len(), 1);
    }

    #[test]
    fn test_push_returns_indices() {
        let mut tree = ResourceTree::default();
        let fi = tree.push_folder(Folder::new("A"));
        assert_eq!(fi, 0);
        assert_eq!(tree.push_request(fi, Request::new("one")), Some(0));
        assert_eq!(tree.push_request(fi, Request::new("two")), Some(1));
        assert_eq!(tree.push_request(9, Request::new("x")), None);
        assert_eq!(tree.request(0, 1).map(|r| r.name.as_str()), Some("two"));
    }
}
