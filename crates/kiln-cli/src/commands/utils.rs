//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use kiln_config::{ConfigDiscovery, Resolver};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result, ResultExt};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

/// Load the project layout named by `args` and wrap it in a [`Resolver`].
///
/// An explicit `--config` file must exist. Without one, the layout is
/// discovered under the project root, falling back to defaults.
pub fn load_resolver(args: &ProjectArgs) -> Result<Resolver> {
    let cwd = get_cwd()?;
    let root = resolve_path(&args.root, &cwd);

    if !root.exists() {
        return Err(CliError::FileNotFound(root));
    }
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    let discovery = ConfigDiscovery::new(&root);
    let config = match &args.config {
        Some(path) => {
            let path = resolve_path(path, &cwd);
            if !path.is_file() {
                return Err(CliError::FileNotFound(path));
            }
            discovery.load_from(&path).with_path(&path)?
        }
        None => discovery.load_or_default()?,
    };

    if config.settings.no_color {
        owo_colors::set_override(false);
    }

    tracing::debug!(root = %root.display(), "loaded project layout");
    Ok(Resolver::new(root, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_path_absolute() {
        let abs_path = if cfg!(windows) {
            Path::new("C:\\absolute\\path")
        } else {
            Path::new("/absolute/path")
        };
        let cwd = Path::new("/some/dir");
        assert_eq!(resolve_path(abs_path, cwd), abs_path);
    }

    #[test]
    fn test_resolve_path_relative() {
        let rel_path = Path::new("relative/path");
        let cwd = Path::new("/some/dir");
        assert_eq!(resolve_path(rel_path, cwd), PathBuf::from("/some/dir/relative/path"));
    }

    #[test]
    fn test_load_resolver_defaults_without_layout() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            root: dir.path().to_path_buf(),
            config: None,
        };

        let resolver = load_resolver(&args).unwrap();
        assert_eq!(resolver.config(), &kiln_config::KilnConfig::default());
    }

    #[test]
    fn test_load_resolver_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            root: dir.path().to_path_buf(),
            config: Some(dir.path().join("missing.toml")),
        };

        let err = load_resolver(&args).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p.ends_with("missing.toml")));
    }

    #[test]
    fn test_load_resolver_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("kiln.toml");
        std::fs::write(&file, "").unwrap();
        let args = ProjectArgs {
            root: file,
            config: None,
        };

        let err = load_resolver(&args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(ref msg) if msg.contains("not a directory")));
    }

    #[test]
    fn test_load_resolver_missing_root() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            root: dir.path().join("nope"),
            config: None,
        };

        assert!(matches!(load_resolver(&args).unwrap_err(), CliError::FileNotFound(_)));
    }
}
