//! Styled game output.
//!
//! Messages passed to [`Console::say`] go through three steps:
//!
//! 1. spaces and tabs are trimmed from both ends of every line, so indented
//!    multi-line literals print flush left;
//! 2. `$NAME` and `${NAME}` are replaced from the console's substitutes
//!    (`$$` is a literal `$`; unknown names are left as written);
//! 3. inline markup such as `[bold magenta]text[/]` is rendered as ANSI
//!    SGR codes, or stripped when colour is off. `\[` is a literal `[`,
//!    and brackets that do not hold known style words print unchanged.
//!
//! The console never wraps text.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::rc::Rc;

use wayfinder_foundation::Result;

const RESET: &str = "\x1b[0m";
const RULER_WIDTH: usize = 60;

/// Output sink for game text.
pub struct Console {
    sink: Box<dyn Write>,
    color: bool,
    substitutes: BTreeMap<String, String>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("color", &self.color)
            .field("substitutes", &self.substitutes)
            .finish_non_exhaustive()
    }
}

impl Console {
    /// Creates a console writing to `sink`.
    pub fn new(sink: impl Write + 'static, color: bool) -> Self {
        Self {
            sink: Box::new(sink),
            color,
            substitutes: BTreeMap::new(),
        }
    }

    /// Creates a console writing to standard output.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }

    /// Creates a console writing to an in-memory buffer.
    #[must_use]
    pub fn buffered(color: bool) -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::new(buffer.clone(), color), buffer)
    }

    /// Returns true if markup is rendered as colour.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Defines `$name` for later messages.
    pub fn substitute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.substitutes.insert(name.into(), value.into());
    }

    /// The current substitutes.
    #[must_use]
    pub fn substitutes(&self) -> &BTreeMap<String, String> {
        &self.substitutes
    }

    /// Prints a message with substitution and markup.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink fails.
    pub fn say(&mut self, msg: impl Display) -> Result<()> {
        let rendered = self.render(&msg.to_string());
        writeln!(self.sink, "{rendered}")?;
        Ok(())
    }

    /// Prints `text` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink fails.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.sink, "{text}")?;
        Ok(())
    }

    /// Prints an empty line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink fails.
    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }

    /// Prints a horizontal rule with `label` centred in it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink fails.
    pub fn ruler(&mut self, label: &str) -> Result<()> {
        let used = label.chars().count() + 2;
        let left = RULER_WIDTH.saturating_sub(used) / 2;
        let right = RULER_WIDTH.saturating_sub(used + left);
        let (left, right) = ("─".repeat(left), "─".repeat(right));
        if self.color {
            writeln!(
                self.sink,
                "\x1b[36m{left}{RESET} \x1b[1;35m{label}{RESET} \x1b[36m{right}{RESET}"
            )?;
        } else {
            writeln!(self.sink, "{left} {label} {right}")?;
        }
        Ok(())
    }

    /// Applies trimming, substitution, and markup to `msg`.
    #[must_use]
    pub fn render(&self, msg: &str) -> String {
        let trimmed = msg
            .split('\n')
            .map(|line| line.trim_matches([' ', '\t']))
            .collect::<Vec<_>>()
            .join("\n");
        let substituted = substitute(&trimmed, &self.substitutes);
        markup(&substituted, self.color)
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces `$NAME`, `${NAME}` and `$$`.
fn substitute(text: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(at) = rest.find('$') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
        } else if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) if values.contains_key(&braced[..end]) => {
                    out.push_str(&values[&braced[..end]]);
                    rest = &braced[end + 1..];
                }
                _ => {
                    out.push('$');
                    rest = after;
                }
            }
        } else if after.starts_with(is_name_start) {
            let end = after.find(|c| !is_name_char(c)).unwrap_or(after.len());
            let name = &after[..end];
            if let Some(value) = values.get(name) {
                out.push_str(value);
            } else {
                out.push('$');
                out.push_str(name);
            }
            rest = &after[end..];
        } else {
            out.push('$');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

fn sgr(word: &str) -> Option<&'static str> {
    Some(match word {
        "bold" => "1",
        "dim" => "2",
        "italic" => "3",
        "underline" => "4",
        "reverse" => "7",
        "black" => "30",
        "red" => "31",
        "green" => "32",
        "yellow" => "33",
        "blue" => "34",
        "magenta" => "35",
        "cyan" => "36",
        "white" => "37",
        _ => return None,
    })
}

/// Parses a style tag such as `bold magenta` into an SGR sequence.
fn style(tag: &str) -> Option<String> {
    let codes: Vec<&str> = tag
        .split_whitespace()
        .map(sgr)
        .collect::<Option<_>>()?;
    if codes.is_empty() {
        return None;
    }
    Some(format!("\x1b[{}m", codes.join(";")))
}

/// Renders or strips `[style]...[/]` markup.
fn markup(text: &str, color: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut stack: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(at) = rest.find(['[', '\\']) {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];

        if let Some(escaped) = tail.strip_prefix("\\[") {
            out.push('[');
            rest = escaped;
            continue;
        }
        if tail.starts_with('\\') {
            out.push('\\');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find(']') else {
            out.push('[');
            rest = &tail[1..];
            continue;
        };
        let tag = &tail[1..close];

        if tag == "/" {
            if stack.pop().is_some() && color {
                out.push_str(RESET);
                for open in &stack {
                    out.push_str(open);
                }
            }
        } else if let Some(code) = style(tag) {
            if color {
                out.push_str(&code);
            }
            stack.push(code);
        } else {
            out.push('[');
            rest = &tail[1..];
            continue;
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    if color && !stack.is_empty() {
        out.push_str(RESET);
    }
    out
}

/// A clonable in-memory sink for capturing console output.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
