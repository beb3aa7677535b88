pub mod materialization;
pub mod request;
pub mod template;
pub mod tree;

pub use materialization::{MaterializationResult, Outcome, TransferStats};
pub use request::ScaffoldRequest;
pub use template::TemplateDescriptor;
pub use tree::{EntryKind, TreeEntry};
