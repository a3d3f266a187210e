use ratatui::style::Color;

use super::request::HttpMethod;

/// Semantic palette used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Active borders, cursor, focused elements.
    pub accent: Color,
    /// Titles and key labels.
    pub highlight: Color,
    pub dimmed: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    pub method_get: Color,
    pub method_post: Color,
    pub method_put: Color,
    pub method_patch: Color,
    pub method_delete: Color,
}

impl Theme {
    pub fn method_color(&self, method: HttpMethod) -> Color {
        match method {
            HttpMethod::Get => self.method_get,
            HttpMethod::Post => self.method_post,
            HttpMethod::Put => self.method_put,
            HttpMethod::Patch => self.method_patch,
            HttpMethod::Delete => self.method_delete,
        }
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub const DEFAULT_THEME: &str = "xcode";

/// Registry keyed by the name accepted by the `theme` command.
pub static THEMES: [(&str, Theme); 5] = [
    ("rosepine", ROSE_PINE),
    ("xcode", XCODE),
    ("catppuccin", CATPPUCCIN),
    ("tokyonight", TOKYO_NIGHT),
    ("sonokai", SONOKAI),
];

pub fn lookup(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|(key, _)| *key == name).map(|(_, theme)| theme)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(key, _)| *key)
}

impl Default for Theme {
    fn default() -> Self {
        XCODE
    }
}

const ROSE_PINE: Theme = Theme {
    name: "Rose Pine",
    accent: rgb(0xEB6F92),
    highlight: rgb(0xF6C177),
    dimmed: rgb(0x6E6A86),
    error: rgb(0xEB6F92),
    text: rgb(0xE0DEF4),
    text_muted: rgb(0x908CAA),
    method_get: rgb(0x9CCFD8),
    method_post: rgb(0x31748F),
    method_put: rgb(0xF6C177),
    method_patch: rgb(0xEBBCBA),
    method_delete: rgb(0xEB6F92),
};

const XCODE: Theme = Theme {
    name: "Xcode Dark",
    accent: rgb(0x6BDFFF),
    highlight: rgb(0xD9C97C),
    dimmed: rgb(0x6C7986),
    error: rgb(0xFF5257),
    text: rgb(0xFFFFFF),
    text_muted: rgb(0xD4D4D4),
    method_get: rgb(0x67B7A4),
    method_post: rgb(0x4EB0CC),
    method_put: rgb(0xD9C97C),
    method_patch: rgb(0xFD8F3F),
    method_delete: rgb(0xFF7AB2),
};

const CATPPUCCIN: Theme = Theme {
    name: "Catppuccin Mocha",
    accent: rgb(0xCBA6F7),
    highlight: rgb(0xF9E2AF),
    dimmed: rgb(0x7F849C),
    error: rgb(0xF38BA8),
    text: rgb(0xCDD6F4),
    text_muted: rgb(0xA6ADC8),
    method_get: rgb(0xA6E3A1),
    method_post: rgb(0x89B4FA),
    method_put: rgb(0xF9E2AF),
    method_patch: rgb(0xFAB387),
    method_delete: rgb(0xF38BA8),
};

// TokyoNight palette
const TOKYO_NIGHT: Theme = Theme {
    name: "Tokyo Night",
    accent: rgb(0x7AA2F7),
    highlight: rgb(0xE0AF68),
    dimmed: rgb(0x565F89),
    error: rgb(0xF7768E),
    text: rgb(0xC0CAF5),
    text_muted: rgb(0xA9B1D6),
    method_get: rgb(0x9ECE6A),
    method_post: rgb(0x7AA2F7),
    method_put: rgb(0xE0AF68),
    method_patch: rgb(0xFF9E64),
    method_delete: rgb(0xF7768E),
};

const SONOKAI: Theme = Theme {
    name: "Sonokai",
    accent: rgb(0x9ED072),
    highlight: rgb(0xE7C664),
    dimmed: rgb(0x7F8490),
    error: rgb(0xFC5D7C),
    text: rgb(0xE2E2E3),
    text_muted: rgb(0xB0B0B2),
    method_get: rgb(0x9ED072),
    method_post: rgb(0x76CCE0),
    method_put: rgb(0xE7C664),
    method_patch: rgb(0xF39660),
    method_delete: rgb(0xFC5D7C),
};
