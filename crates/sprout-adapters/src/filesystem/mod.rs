//! Filesystem adapters.

mod bundled;
mod local;
mod memory;

pub use bundled::BundledFilesystem;
pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
