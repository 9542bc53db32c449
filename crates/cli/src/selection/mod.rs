//! Turning the command line selection into a cargo invocation.
//!
//! - **Scope**: Whether targets, a package or the whole project were selected
//! - **Resolution**: Looking up the selected targets and building the invocation
//! - **Options**: Applying toolchain, environment and argument options on top

pub mod options;
pub mod resolution;
pub mod scope;

// Re-exports for convenience
pub use options::apply_options;
pub use resolution::{command_line_for_scope, resolve_targets};
pub use scope::{determine, Provider, Scope};
