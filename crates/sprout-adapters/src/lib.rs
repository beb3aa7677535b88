//! Infrastructure adapters for Sprout.
//!
//! Implements the filesystem port from `sprout_core::application::ports`,
//! including the read-only view of the templates compiled into the binary.
//! The terminal prompter is not here: it depends on the CLI's styling and
//! lives in `sprout-cli`.

pub mod filesystem;

pub use filesystem::{BundledFilesystem, LocalFilesystem, MemoryFilesystem};
