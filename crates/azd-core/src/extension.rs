use crate::command::{CommandSpec, RootSpec};

/// A contract for every command set linked into an azd binary.
///
/// The core CLI and each extension implement this trait; the binary turns it
/// into a [`crate::Dispatcher`] with [`crate::Dispatcher::from_extension`].
/// Extensions are composed at build time only, there is no runtime discovery.
pub trait Extension {
    /// Unique name of the extension.
    fn name(&self) -> &str;

    /// Metadata for the top-level command when this extension runs standalone.
    fn root(&self) -> RootSpec;

    /// Commands contributed by this extension, in help display order.
    fn commands(&self) -> Vec<CommandSpec>;
}
