//! Password-gated command handlers.
//!
//! ```ignore
//! let gate = Gate::new(GateConfig::default().with_password("plugh"));
//! repl.when("xyzzy", &[], protected(gate, |game, _| game.console.say("Poof.")))?;
//! ```

use std::io;
use std::time::{Duration, Instant};

use log::{debug, info};
use wayfinder_foundation::Result;
use wayfinder_grammar::Arguments;

use crate::repl::Game;

/// Reads a password, given the message to show.
pub type PasswordPrompt = Box<dyn FnMut(&str) -> io::Result<String>>;

/// Messages and password for a [`Gate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// The expected password.
    pub password: String,
    /// Shown when asking for the password.
    pub message: String,
    /// Printed after a correct password.
    pub success: Option<String>,
    /// Printed after a wrong password.
    pub failure: Option<String>,
    /// How long a correct password stays valid. Zero asks every time.
    pub timeout: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            password: "password".to_string(),
            message: "password? ".to_string(),
            success: None,
            failure: Some("wrong password!".to_string()),
            timeout: Duration::ZERO,
        }
    }
}

impl GateConfig {
    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the prompt message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the success message.
    #[must_use]
    pub fn with_success(mut self, success: impl Into<String>) -> Self {
        self.success = Some(success.into());
        self
    }

    /// Sets or clears the failure message.
    #[must_use]
    pub fn with_failure(mut self, failure: Option<String>) -> Self {
        self.failure = failure;
        self
    }

    /// Sets how long a correct password is remembered.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Asks for a password and remembers when it was last given.
pub struct Gate {
    config: GateConfig,
    prompt: PasswordPrompt,
    authorized_at: Option<Instant>,
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate")
            .field("config", &self.config)
            .field("authorized_at", &self.authorized_at)
            .finish_non_exhaustive()
    }
}

impl Gate {
    /// Creates a gate that reads the password from the terminal without echo.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self::with_prompt(config, |message: &str| rpassword::prompt_password(message))
    }

    /// Creates a gate that reads the password from `prompt`.
    pub fn with_prompt<P>(config: GateConfig, prompt: P) -> Self
    where
        P: FnMut(&str) -> io::Result<String> + 'static,
    {
        Self {
            config,
            prompt: Box::new(prompt),
            authorized_at: None,
        }
    }

    /// Returns true if a correct password was given within the timeout.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.authorized_at
            .is_some_and(|at| at.elapsed() < self.config.timeout)
    }

    /// Asks for the password unless still authorised, reporting the outcome
    /// on `game`'s console.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading the password or printing fails.
    pub fn check<S>(&mut self, game: &mut Game<S>) -> Result<bool> {
        if self.is_authorized() {
            return Ok(true);
        }

        let given = (self.prompt)(&self.config.message)?;
        if given.trim() != self.config.password {
            info!("wrong password given");
            if let Some(failure) = &self.config.failure {
                game.console.say(failure)?;
            }
            return Ok(false);
        }

        debug!("password accepted");
        self.authorized_at = Some(Instant::now());
        if let Some(success) = &self.config.success {
            game.console.say(success)?;
        }
        Ok(true)
    }
}

/// Wraps `handler` so it only runs after `gate` accepts a password.
pub fn protected<S, F>(
    mut gate: Gate,
    mut handler: F,
) -> impl FnMut(&mut Game<S>, &Arguments) -> Result<()>
where
    F: FnMut(&mut Game<S>, &Arguments) -> Result<()>,
{
    move |game: &mut Game<S>, args: &Arguments| {
        if gate.check(game)? {
            handler(game, args)
        } else {
            Ok(())
        }
    }
}
