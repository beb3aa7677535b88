//! Core domain layer for Sprout.
//!
//! Pure logic with no I/O: template descriptors and their registry, the
//! destination path resolver, and the value types that flow between the
//! selection and materialization steps. Anything that touches the terminal or
//! the filesystem goes through the ports in `crate::application::ports`.

pub mod entities;
pub mod registry;
pub mod resolver;

pub use entities::{
    EntryKind, MaterializationResult, Outcome, ScaffoldRequest, TemplateDescriptor, TransferStats,
    TreeEntry,
};
pub use registry::{BUILTIN_TEMPLATES, BUNDLED_ROOT, BuiltinTemplate, TemplateRegistry};
