//! Interaction loop configuration.

use std::io::{self, IsTerminal};

/// How the interaction loop presents itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text shown before each input line.
    pub prompt: String,
    /// Whether `help` and `?` are installed when the loop starts.
    pub help: bool,
    /// Whether console markup is rendered as ANSI colour.
    pub color: bool,
    /// Printed once before the first prompt.
    pub banner: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            help: true,
            color: io::stdout().is_terminal(),
            banner: None,
        }
    }
}

impl ReplConfig {
    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enables or disables the built-in help commands.
    #[must_use]
    pub const fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    /// Enables or disables colour output.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets the banner.
    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }
}
