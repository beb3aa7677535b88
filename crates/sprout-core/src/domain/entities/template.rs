//! Template descriptors.
//!
//! A template is a read-only directory tree bundled with the tool. The core
//! never looks inside it: a [`TemplateDescriptor`] only says where the tree
//! lives and how to present it.

use std::fmt;
use std::path::{Path, PathBuf};

/// Immutable description of one bundled template.
///
/// Descriptors are created when the registry is built and never change
/// afterwards. Cloning is cheap enough for the single request per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    id: String,
    display_label: String,
    source_root: PathBuf,
    next_steps: Vec<String>,
}

impl TemplateDescriptor {
    /// Create a descriptor with no extra next steps.
    pub fn new(
        id: impl Into<String>,
        display_label: impl Into<String>,
        source_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            display_label: display_label.into(),
            source_root: source_root.into(),
            next_steps: Vec::new(),
        }
    }

    /// Commands suggested after `cd <destination>` once the scaffold exists.
    pub fn with_next_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Stable identifier, e.g. `content-creator`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-facing label shown in the selection menu.
    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    /// Root directory of the template tree.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_label, self.id)
    }
}
