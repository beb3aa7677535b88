//! Handlers for the three things the binary can do.

use std::borrow::Cow;

use sprout_core::domain::TemplateRegistry;

use crate::config::AppConfig;

pub mod completions;
pub mod list;
pub mod scaffold;

/// The bundled registry, or one rooted at `[templates] root` when configured.
pub fn registry(config: &AppConfig) -> Cow<'static, TemplateRegistry> {
    match &config.templates.root {
        Some(root) => Cow::Owned(TemplateRegistry::with_root(root)),
        None => Cow::Borrowed(TemplateRegistry::bundled()),
    }
}
