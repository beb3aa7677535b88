//! Sprout Core - scaffolding logic behind ports.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprout-cli (CLI)             │
//! │   dialoguer prompts, reporting, config  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  SelectionController, Materializer      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          Prompter, Filesystem           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprout-adapters (Infrastructure)    │
//! │   LocalFilesystem, MemoryFilesystem     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (registry, path resolver, request and result types) does
//! no I/O at all.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::prelude::*;
//!
//! let registry = TemplateRegistry::bundled();
//! let template = registry.resolve("content-creator")?.clone();
//! let request = ScaffoldRequest::resolve(template, "my-workspace", &cwd)?;
//!
//! let result = WorkspaceMaterializer::new(Box::new(filesystem)).materialize(&request);
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything a front end needs to drive a scaffold.
pub mod prelude {
    pub use crate::application::{
        DEFAULT_DESTINATION, DEFAULT_MAX_NAME_ATTEMPTS, Selection, SelectionController,
        WorkspaceMaterializer,
        ports::{Filesystem, FsError, Prompter},
    };
    pub use crate::domain::{
        EntryKind, MaterializationResult, Outcome, ScaffoldRequest, TemplateDescriptor,
        TemplateRegistry, TransferStats, TreeEntry,
    };
    pub use crate::error::{ErrorCategory, ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
