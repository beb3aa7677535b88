//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `Filesystem`: tree walking and copying
//!   - `Prompter`: the interactive questions

pub mod output;

pub use output::{Filesystem, FsError, Prompter};

#[cfg(test)]
pub use output::{MockFilesystem, MockPrompter};
