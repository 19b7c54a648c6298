//! Path alias table used by reference resolution.
//!
//! An alias maps a short symbolic prefix (`@`, `@core`) to an absolute
//! directory. The table is built once per resolution and never mutated.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// One alias as declared in the project layout.
///
/// `path` may be relative to the project root or absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRoot {
    pub name: String,
    pub path: PathBuf,
}

impl AliasRoot {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Resolved aliases, keyed by name, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: IndexMap<String, PathBuf>,
}

impl AliasTable {
    /// Absolute target of the alias `name`.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// Substitute the alias prefix of `specifier`, if any.
    ///
    /// An alias matches when the specifier equals its name or continues with
    /// `/` after it. When several match, the longest name wins, so `@core/x`
    /// goes to `@core` and not to `@`.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{resolve_aliases, AliasRoot};
    /// use std::path::{Path, PathBuf};
    ///
    /// let roots = [AliasRoot::new("@", "src"), AliasRoot::new("@core", "src/core")];
    /// let table = resolve_aliases("/app", &roots).unwrap();
    ///
    /// assert_eq!(table.resolve("@core/dom"), Some(PathBuf::from("/app/src/core/dom")));
    /// assert_eq!(table.resolve("@/index.js"), Some(PathBuf::from("/app/src/index.js")));
    /// assert_eq!(table.resolve("./local.js"), None);
    /// ```
    pub fn resolve(&self, specifier: &str) -> Option<PathBuf> {
        let (target, rest) = self
            .entries
            .iter()
            .filter_map(|(name, target)| {
                let rest = specifier.strip_prefix(name.as_str())?;
                if rest.is_empty() {
                    Some((name.len(), target, rest))
                } else {
                    rest.strip_prefix('/').map(|rest| (name.len(), target, rest))
                }
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, target, rest)| (target, rest))?;

        if rest.is_empty() {
            Some(target.clone())
        } else {
            Some(target.join(rest).clean())
        }
    }
}

/// Build an [`AliasTable`] from declared roots.
///
/// Relative alias paths are joined onto `project_root`. Every target must
/// stay inside the project root after normalisation. Existence of the target
/// is not checked here; see [`crate::FsValidator`].
///
/// # Errors
///
/// - [`ConfigError::EmptyAlias`] for a blank name
/// - [`ConfigError::DuplicateAlias`] when a name appears twice
/// - [`ConfigError::AliasOutsideRoot`] when a target escapes the project root
pub fn resolve_aliases<'a>(
    project_root: impl AsRef<Path>,
    roots: impl IntoIterator<Item = &'a AliasRoot>,
) -> Result<AliasTable> {
    let project_root = project_root.as_ref().clean();
    let mut entries = IndexMap::new();

    for root in roots {
        let name = root.name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyAlias {
                path: root.path.clone(),
            });
        }

        if entries.contains_key(name) {
            return Err(ConfigError::DuplicateAlias {
                name: name.to_string(),
            });
        }

        let target = project_root.join(&root.path).clean();
        if !is_within(&project_root, &target) {
            return Err(ConfigError::AliasOutsideRoot {
                name: name.to_string(),
                path: target,
            });
        }

        entries.insert(name.to_string(), target);
    }

    tracing::debug!(aliases = entries.len(), "resolved alias table");
    Ok(AliasTable { entries })
}

// `root` and `target` are both cleaned. A cleaned "." root has no prefix to
// compare against, so only upward escapes are rejected.
pub(crate) fn is_within(root: &Path, target: &Path) -> bool {
    if root == Path::new(".") {
        target.is_relative() && !target.starts_with("..")
    } else {
        target.starts_with(root)
    }
}
