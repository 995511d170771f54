//! Shared SDK and command plumbing for the Azure Developer CLI.
//!
//! This crate defines the command model, the root dispatcher, the extension
//! contract, and the SDK client that the core CLI and every extension binary
//! link against.

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod extension;
pub mod logging;
pub mod sdk;
pub mod styles;

pub use command::{Arity, ArityError, CommandSpec, Handler, RootSpec, UnknownFlagError};
pub use config::{Configuration, ProfileError, Profiles};
pub use dispatcher::{Dispatcher, Outcome};
pub use extension::Extension;
pub use logging::Logger;
pub use sdk::{Client, SdkError};
