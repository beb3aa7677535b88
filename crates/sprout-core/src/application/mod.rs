//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: the selection flow and the materializer
//! - **Ports**: traits for the terminal and the filesystem
//!
//! Decisions about names, paths and templates live in `crate::domain`; this
//! layer sequences them and performs the side effects through the ports.

pub mod ports;
pub mod services;

pub use services::{
    DEFAULT_DESTINATION, DEFAULT_MAX_NAME_ATTEMPTS, Selection, SelectionController,
    SelectionState, WorkspaceMaterializer,
};

pub use ports::{Filesystem, FsError, Prompter};
