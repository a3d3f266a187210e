use super::input::Key;
use super::theme;

/// A validated command, ready to be applied by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip between side-by-side and stacked panes.
    Orient,
    /// Switch to the theme registered under this name.
    Theme(&'static str),
    /// Show the command help overlay.
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    parse: fn(&[&str]) -> Result<Command, CommandError>,
}

/// The fixed command registry, in help-listing order.
pub static COMMANDS: [CommandInfo; 3] = [
    CommandInfo {
        name: "orient",
        usage: "orient",
        summary: "toggle side-by-side / stacked panes",
        parse: parse_orient,
    },
    CommandInfo {
        name: "theme",
        usage: "theme <name>",
        summary: "switch color theme",
        parse: parse_theme,
    },
    CommandInfo {
        name: "help",
        usage: "help",
        summary: "show this list",
        parse: parse_help,
    },
];

fn parse_orient(args: &[&str]) -> Result<Command, CommandError> {
    if args.is_empty() { Ok(Command::Orient) } else { Err(CommandError::Usage("orient")) }
}

fn parse_help(args: &[&str]) -> Result<Command, CommandError> {
    if args.is_empty() { Ok(Command::Help) } else { Err(CommandError::Usage("help")) }
}

fn parse_theme(args: &[&str]) -> Result<Command, CommandError> {
    let [name] = args else {
        return Err(CommandError::Usage("theme <name>"));
    };
    theme::THEMES
        .iter()
        .find(|(key, _)| key == name)
        .map(|(key, _)| Command::Theme(*key))
        .ok_or_else(|| CommandError::UnknownTheme(name.to_string()))
}

/// Tokenizes `line` on whitespace and dispatches on the first token
/// (exact, case-sensitive). Returns `None` for a blank line.
pub fn parse(line: &str) -> Option<Result<Command, CommandError>> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let args: Vec<&str> = tokens.collect();
    let result = match COMMANDS.iter().find(|info| info.name == name) {
        Some(info) => (info.parse)(&args),
        None => Err(CommandError::UnknownCommand(name.to_string())),
    };
    Some(result)
}

/// The `:` command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPalette {
    open: bool,
    buffer: String,
    error: Option<String>,
}

impl CommandPalette {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.buffer.clear();
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.buffer.clear();
        self.error = None;
    }

    /// Feeds one key. Returns the command to apply once a valid line is entered;
    /// the palette has closed itself by then. Invalid lines keep it open with
    /// an error and the buffer intact.
    pub fn handle_key(&mut self, key: Key) -> Option<Command> {
        if !self.open {
            return None;
        }
        match key {
            Key::Esc => self.close(),
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Char(c) => {
                self.buffer.push(c);
                self.error = None;
            }
            Key::Enter => match parse(&self.buffer)? {
                Ok(command) => {
                    tracing::debug!(?command, "command accepted");
                    self.close();
                    return Some(command);
                }
                Err(err) => {
                    tracing::debug!(line = %self.buffer, error = %err, "command rejected");
                    self.error = Some(err.to_string());
                }
            },
            _ => {}
        }
        None
    }
}
