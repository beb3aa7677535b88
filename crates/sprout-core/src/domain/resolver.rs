//! Destination path resolution.
//!
//! Turns the name the user typed into the absolute path the template will be
//! copied to. Pure: no filesystem access, no environment lookups, no shell
//! expansion (`~` and `$VAR` are ordinary characters).
//!
//! # Rules
//!
//! | input                   | result                                  |
//! |-------------------------|-----------------------------------------|
//! | `""`, `"   "`           | `InvalidName`                           |
//! | `"my-workspace"`        | `<cwd>/my-workspace`                    |
//! | `" my-workspace "`      | `<cwd>/my-workspace` (trimmed once)     |
//! | `"a/b"`                 | `<cwd>/a/b` (nested names are allowed)  |
//! | `"../sibling"`          | `<parent of cwd>/sibling`               |
//! | `"/abs/ws"`             | `/abs/ws`                               |
//! | `"."`, `".."`, `"a/.."` | `InvalidName` (names no new directory)  |

use std::path::{Component, Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Resolve `raw_name` against `cwd`.
///
/// `cwd` must be absolute. The returned path is absolute and lexically
/// normalised (no `.` or `..` components).
pub fn resolve(raw_name: &str, cwd: &Path) -> ScaffoldResult<PathBuf> {
    let name = raw_name.trim();

    if name.is_empty() {
        return Err(invalid(raw_name, "name cannot be empty"));
    }
    if name.contains('\0') {
        return Err(invalid(raw_name, "name cannot contain NUL bytes"));
    }
    if !cwd.is_absolute() {
        return Err(invalid(
            raw_name,
            format!("working directory '{}' is not absolute", cwd.display()),
        ));
    }

    let target = normalize(&cwd.join(name));

    // `.`, `..`, `/` and friends land on the working directory or one of its
    // ancestors, which always exist.
    if target.file_name().is_none() || normalize(cwd).starts_with(&target) {
        return Err(invalid(raw_name, "name must point to a new directory"));
    }

    Ok(target)
}

/// Lexical normalisation: drop `.`, let `..` pop one component.
///
/// `..` at the root is a no-op, matching how the OS treats `/..`.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

fn invalid(name: &str, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::InvalidName {
        name: name.to_owned(),
        reason: reason.into(),
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    const CWD: &str = "/home/user/projects";

    fn ok(name: &str) -> PathBuf {
        resolve(name, Path::new(CWD)).unwrap()
    }

    fn is_invalid(name: &str) -> bool {
        matches!(
            resolve(name, Path::new(CWD)),
            Err(ScaffoldError::InvalidName { .. })
        )
    }

    #[test]
    fn plain_name_joins_cwd() {
        assert_eq!(ok("my-workspace"), PathBuf::from("/home/user/projects/my-workspace"));
    }

    #[test]
    fn empty_and_whitespace_are_invalid() {
        assert!(is_invalid(""));
        assert!(is_invalid("   "));
        assert!(is_invalid("\t\n"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(ok("  my-workspace \n"), ok("my-workspace"));
    }

    #[test]
    fn nested_names_are_permitted() {
        assert_eq!(ok("a/b"), PathBuf::from("/home/user/projects/a/b"));
    }

    #[test]
    fn absolute_name_replaces_cwd() {
        assert_eq!(ok("/srv/ws"), PathBuf::from("/srv/ws"));
    }

    #[test]
    fn parent_relative_name_is_normalised() {
        assert_eq!(ok("../sibling"), PathBuf::from("/home/user/sibling"));
        assert_eq!(ok("./a/./b"), PathBuf::from("/home/user/projects/a/b"));
    }

    #[test]
    fn names_without_new_directory_are_invalid() {
        for name in [".", "..", "../..", "a/..", "/", "./"] {
            assert!(is_invalid(name), "expected invalid: {name:?}");
        }
    }

    #[test]
    fn no_shell_expansion() {
        assert_eq!(ok("~"), PathBuf::from("/home/user/projects/~"));
        assert_eq!(ok("$HOME"), PathBuf::from("/home/user/projects/$HOME"));
    }

    #[test]
    fn nul_byte_is_invalid() {
        assert!(is_invalid("bad\0name"));
    }

    #[test]
    fn relative_cwd_is_rejected() {
        assert!(resolve("ws", Path::new("relative/dir")).is_err());
    }

    #[test]
    fn resolution_is_idempotent() {
        for name in ["my-workspace", " x ", "a/b", "../s", "/abs/p", "~"] {
            let first = resolve(name, Path::new(CWD)).unwrap();
            let second = resolve(name, Path::new(CWD)).unwrap();
            assert_eq!(first, second, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn invalid_name_carries_raw_input() {
        match resolve("  ", Path::new(CWD)) {
            Err(ScaffoldError::InvalidName { name, .. }) => assert_eq!(name, "  "),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
