/// A key press, independent of the terminal backend.
///
/// State machines consume this instead of crossterm events so that every
/// transition can be replayed from plain values in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// A character typed with Ctrl held.
    Ctrl(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}
