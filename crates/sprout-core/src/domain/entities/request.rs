use std::path::{Path, PathBuf};

use crate::{domain::resolver, domain::entities::template::TemplateDescriptor, error::ScaffoldResult};

/// A validated request to materialize one template at one location.
///
/// The only constructor runs the path resolver, so holding a
/// `ScaffoldRequest` means the destination name was valid at creation time.
/// Existence of the target is *not* frozen here; the materializer checks it
/// again right before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    template: TemplateDescriptor,
    destination_name: String,
    resolved_target_path: PathBuf,
}

impl ScaffoldRequest {
    /// Resolve `destination_name` against `cwd` and bind it to `template`.
    pub fn resolve(
        template: TemplateDescriptor,
        destination_name: &str,
        cwd: &Path,
    ) -> ScaffoldResult<Self> {
        let resolved_target_path = resolver::resolve(destination_name, cwd)?;
        Ok(Self {
            template,
            destination_name: destination_name.trim().to_owned(),
            resolved_target_path,
        })
    }

    pub fn template(&self) -> &TemplateDescriptor {
        &self.template
    }

    /// The name as the user typed it, surrounding whitespace removed.
    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    /// Absolute path the template will be copied to.
    pub fn resolved_target_path(&self) -> &Path {
        &self.resolved_target_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;

    fn template() -> TemplateDescriptor {
        TemplateDescriptor::new("content-creator", "Content Creator", "/bundle/cc")
    }

    #[test]
    fn resolve_binds_template_and_absolute_target() {
        let req = ScaffoldRequest::resolve(template(), "my-workspace", Path::new("/home/u"))
            .unwrap();
        assert_eq!(req.template().id(), "content-creator");
        assert_eq!(req.destination_name(), "my-workspace");
        assert_eq!(req.resolved_target_path(), Path::new("/home/u/my-workspace"));
    }

    #[test]
    fn resolve_rejects_blank_name() {
        let err = ScaffoldRequest::resolve(template(), "   ", Path::new("/home/u")).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }));
    }
}
