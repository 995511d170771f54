use std::fmt::{Debug, Display, Formatter};

use anyhow::Result;
use thiserror::Error;

/// Positional-argument constraint enforced before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly `n` positional arguments.
    Exact(usize),
    /// Between zero and `n` positional arguments.
    AtMost(usize),
    /// No constraint.
    Any,
}

impl Arity {
    pub fn accepts(self, received: usize) -> bool {
        match self {
            Self::Exact(n) => received == n,
            Self::AtMost(n) => received <= n,
            Self::Any => true,
        }
    }

    /// Validates `received` against this arity on behalf of `command`.
    pub fn check(self, command: &str, received: usize) -> Result<(), ArityError> {
        if self.accepts(received) {
            return Ok(());
        }

        Err(ArityError {
            command: command.to_string(),
            expected: self,
            received,
        })
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "accepts {n} arg(s)"),
            Self::AtMost(n) => write!(f, "accepts at most {n} arg(s)"),
            Self::Any => write!(f, "accepts any number of args"),
        }
    }
}

/// Raised by the dispatcher when a command receives the wrong number of arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{command}: {expected}, received {received}")]
pub struct ArityError {
    pub command: String,
    pub expected: Arity,
    pub received: usize,
}

/// Raised by the dispatcher when a command receives a flag it does not define.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{command}: unknown flag '{flag}'")]
pub struct UnknownFlagError {
    pub command: String,
    pub flag: String,
}

/// Execution callback attached to a command. Receives the positional arguments
/// that follow the command name.
pub type Handler = Box<dyn Fn(&[String]) -> Result<()>>;

/// A named leaf command. Immutable once registered with a dispatcher.
pub struct CommandSpec {
    name: String,
    arg: Option<String>,
    about: String,
    long_about: Option<String>,
    arity: Arity,
    handler: Handler,
}

impl CommandSpec {
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            arg: None,
            about: String::new(),
            long_about: None,
            arity: Arity::Any,
            handler: Box::new(handler),
        }
    }

    /// Sets the placeholder shown for the positional argument, e.g. `app-name`.
    pub fn arg(mut self, placeholder: impl Into<String>) -> Self {
        self.arg = Some(placeholder.into());
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn long_about(mut self, long_about: impl Into<String>) -> Self {
        self.long_about = Some(long_about.into());
        self
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.arg.as_deref()
    }

    pub fn summary(&self) -> &str {
        &self.about
    }

    pub fn help(&self) -> &str {
        self.long_about.as_deref().unwrap_or(&self.about)
    }

    pub fn expected_arity(&self) -> Arity {
        self.arity
    }

    /// One-line usage, e.g. `deploy <app-name>` or `init [template]`.
    pub fn usage(&self) -> String {
        match (self.arg.as_deref(), self.arity) {
            (Some(arg), Arity::Exact(n)) if n > 0 => format!("{} <{arg}>", self.name),
            (Some(arg), Arity::AtMost(_) | Arity::Any) => format!("{} [{arg}]", self.name),
            _ => self.name.clone(),
        }
    }

    /// Validates arity, then runs the handler. A rejected argument list never
    /// reaches the handler.
    pub fn invoke(&self, args: &[String]) -> Result<()> {
        self.arity.check(&self.name, args.len())?;
        (self.handler)(args)
    }
}

impl Debug for CommandSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("arg", &self.arg)
            .field("about", &self.about)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Metadata for the top-level command of a binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSpec {
    pub name: String,
    pub about: String,
    pub long_about: Option<String>,
    pub version: Option<String>,
    banner: Option<String>,
}

impl RootSpec {
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
            long_about: None,
            version: None,
            banner: None,
        }
    }

    pub fn long_about(mut self, long_about: impl Into<String>) -> Self {
        self.long_about = Some(long_about.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// The line printed when no subcommand matches.
    pub fn usage_banner(&self) -> String {
        match &self.banner {
            Some(banner) => banner.clone(),
            None => format!(
                "{} - Use '{} --help' for more information.",
                self.about, self.name
            ),
        }
    }
}
