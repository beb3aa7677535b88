//! Template registry.
//!
//! The set of templates is fixed at build time. [`BUILTIN_TEMPLATES`] is the
//! single source of truth: its order is the menu order, and new templates are
//! only ever appended so existing ids and positions stay stable for scripts.
//!
//! # Adding a template
//!
//! 1. Put the tree under `templates/<dir>/` at the workspace root.
//! 2. Append one [`BuiltinTemplate`] entry to [`BUILTIN_TEMPLATES`].
//!
//! The trees are compiled into the binary by `sprout-adapters`, which serves
//! them under the virtual [`BUNDLED_ROOT`]. Nothing here depends on the
//! build checkout still being on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::{
    domain::entities::TemplateDescriptor,
    error::{ScaffoldError, ScaffoldResult},
};

/// Mount point of the templates embedded in the binary.
///
/// Relative and never a real directory: destinations are always absolute, so
/// a target can never fall under it.
pub const BUNDLED_ROOT: &str = "<bundled>";

/// Compile-time description of one bundled template.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    pub id: &'static str,
    pub display_label: &'static str,
    /// Directory name below the templates root.
    pub dir: &'static str,
    pub next_steps: &'static [&'static str],
}

/// Bundled templates, in menu order. Append only.
pub static BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[BuiltinTemplate {
    id: "content-creator",
    display_label: "Content Creator (brand voice and SEO workspace)",
    dir: "content-creator",
    next_steps: &["opencode"],
}];

/// Read-only, ordered collection of [`TemplateDescriptor`]s.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Process-wide registry over the embedded templates.
    ///
    /// Built on first access and never mutated afterwards.
    pub fn bundled() -> &'static TemplateRegistry {
        static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::with_root(BUNDLED_ROOT))
    }

    /// The builtin templates, rooted at `templates_root` instead of the
    /// bundled directory.
    pub fn with_root(templates_root: impl AsRef<Path>) -> Self {
        let root = templates_root.as_ref();
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|t| {
                TemplateDescriptor::new(t.id, t.display_label, root.join(t.dir))
                    .with_next_steps(t.next_steps.iter().copied())
            })
            .collect();
        Self { templates }
    }

    /// Build a registry from arbitrary descriptors, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::DuplicateTemplate`] naming the first
    /// duplicated id.
    pub fn from_descriptors(templates: Vec<TemplateDescriptor>) -> ScaffoldResult<Self> {
        let mut seen = HashSet::new();
        for t in &templates {
            if !seen.insert(t.id()) {
                return Err(ScaffoldError::DuplicateTemplate {
                    id: t.id().to_owned(),
                });
            }
        }
        Ok(Self { templates })
    }

    /// All templates in their stable presentation order.
    pub fn list_templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    /// Look up a template by id.
    pub fn resolve(&self, id: &str) -> ScaffoldResult<&TemplateDescriptor> {
        self.templates
            .iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| ScaffoldError::TemplateNotFound {
                id: id.to_owned(),
                available: self.ids().map(str::to_owned).collect(),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(TemplateDescriptor::id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Root that [`Self::bundled`] reads from.
    pub fn bundled_root() -> PathBuf {
        PathBuf::from(BUNDLED_ROOT)
    }
}
