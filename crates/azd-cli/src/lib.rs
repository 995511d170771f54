//! The builtin `azd` command set, usable by the `azd` binary and by anything
//! that wants to compose it with other extensions.

pub mod commands;

pub use commands::{CoreCommands, DEFAULT_TEMPLATE};
