//! The current narrative mode.

use log::debug;

/// Which narrative mode the game is in.
///
/// Commands declared with [`Grammar::in_context`](crate::Grammar::in_context)
/// are only eligible while the context equals their filter. Commands without
/// a filter are eligible in every context. The default context is unnamed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    current: Option<String>,
}

impl Context {
    /// Creates the default (unnamed) context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to the named context.
    pub fn set(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("context -> {name:?}");
        self.current = Some(name);
    }

    /// Returns to the default context.
    pub fn clear(&mut self) {
        debug!("context -> default");
        self.current = None;
    }

    /// The current context name, or `None` for the default context.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns true if a command with this filter is eligible now.
    #[must_use]
    pub fn allows(&self, filter: Option<&str>) -> bool {
        filter.is_none_or(|filter| self.current() == Some(filter))
    }
}
