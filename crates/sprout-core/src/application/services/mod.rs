//! Application services - the two halves of a scaffold run.
//!
//! [`SelectionController`] turns user answers into a validated
//! [`ScaffoldRequest`](crate::domain::ScaffoldRequest); the
//! [`WorkspaceMaterializer`] turns that request into a directory tree.

pub mod materializer;
pub mod selection;

pub use materializer::WorkspaceMaterializer;
pub use selection::{
    DEFAULT_DESTINATION, DEFAULT_MAX_NAME_ATTEMPTS, Selection, SelectionController,
    SelectionState,
};
