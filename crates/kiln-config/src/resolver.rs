//! Top-level resolution: layout + mode → one immutable [`ResolvedConfig`].
//!
//! Resolution is all-or-nothing. Every check runs before any part of the
//! result is assembled, so a caller never holds a plan whose `ClearOutput`
//! step could run against an invalid layout.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

use crate::alias::{resolve_aliases, AliasTable};
use crate::chain::{build_chain_table, ChainTable};
use crate::config::KilnConfig;
use crate::dev::DevServer;
use crate::discovery::ConfigDiscovery;
use crate::error::Result;
use crate::mode::{resolve_mode, BuildMode, SourceMapOptions};
use crate::naming::{AssetKind, OutputNamingRule};
use crate::plan::{build_orchestration_plan, OrchestrationPlan, PlanPaths};
use crate::validation::{ConfigValidator, FsValidator, SchemaValidator};

/// One entry point after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryPoint {
    /// Local file, absolute
    File(PathBuf),
    /// Module request handed to the package resolver as-is
    Module(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Script bundle filename template
    pub filename: String,
    pub naming: OutputNamingRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    pub extensions: Vec<String>,
    pub aliases: AliasTable,
}

/// Complete build description handed to the build executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub mode: BuildMode,
    pub context: PathBuf,
    pub entries: Vec<EntryPoint>,
    pub output: OutputConfig,
    pub resolve: ResolveConfig,
    pub source_maps: SourceMapOptions,
    pub dev_server: DevServer,
    pub rules: ChainTable,
    pub plugins: OrchestrationPlan,
}

impl ResolvedConfig {
    /// Final filename of a bundle of `kind` with the given content.
    pub fn bundle_filename(&self, kind: AssetKind, content: &[u8]) -> String {
        self.output.naming.render(kind, content)
    }

    pub fn stylesheet_filename(&self) -> String {
        self.output.naming.template(AssetKind::Stylesheet)
    }
}

/// Resolves a [`KilnConfig`] rooted at a project directory.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{BuildMode, KilnConfig, Resolver};
///
/// let resolver = Resolver::new("/path/to/project", KilnConfig::default());
/// let resolved = resolver.resolve(BuildMode::Production).unwrap();
/// assert_eq!(resolved.plugins.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    config: KilnConfig,
}

impl Resolver {
    pub fn new(root: impl AsRef<Path>, config: KilnConfig) -> Self {
        Self {
            root: root.as_ref().clean(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &KilnConfig {
        &self.config
    }

    /// Resolve the full build description for `mode`.
    ///
    /// # Errors
    ///
    /// Any schema, alias or filesystem error aborts resolution.
    pub fn resolve(&self, mode: BuildMode) -> Result<ResolvedConfig> {
        let span = tracing::debug_span!("resolve", %mode, root = %self.root.display());
        let _guard = span.enter();

        SchemaValidator.validate(&self.config)?;
        let aliases = resolve_aliases(&self.root, &self.config.aliases)?;
        FsValidator::new(&self.root).check_paths(&self.config, &aliases)?;

        let context = self.root.join(&self.config.context).clean();
        let output_root = self.root.join(&self.config.output_dir).clean();
        let naming = mode.naming_rule();

        let paths = PlanPaths {
            template: context.join(&self.config.template).clean(),
            static_assets: self
                .config
                .static_assets
                .iter()
                .map(|asset| context.join(asset).clean())
                .collect(),
            output_root: output_root.clone(),
        };

        let entries = self
            .config
            .entries
            .iter()
            .map(|entry| resolve_entry(entry, &context, &aliases))
            .collect();

        let resolved = ResolvedConfig {
            mode,
            entries,
            output: OutputConfig {
                path: output_root,
                filename: naming.template(AssetKind::Script),
                naming,
            },
            resolve: ResolveConfig {
                extensions: self.config.extensions.clone(),
                aliases,
            },
            source_maps: mode.source_maps(),
            dev_server: self.config.dev.resolve(mode),
            rules: build_chain_table(mode),
            plugins: build_orchestration_plan(mode, &paths),
            context,
        };

        tracing::debug!(
            entries = resolved.entries.len(),
            aliases = resolved.resolve.aliases.len(),
            steps = resolved.plugins.len(),
            "resolved configuration"
        );
        Ok(resolved)
    }
}

/// Discover the layout under `root` and resolve it for the given mode signal.
///
/// The signal is whatever the caller read from its environment; see
/// [`resolve_mode`] for how it maps to a [`BuildMode`].
pub fn resolve_project(root: impl AsRef<Path>, signal: Option<&str>) -> Result<ResolvedConfig> {
    let root = root.as_ref();
    let config = ConfigDiscovery::new(root).load_or_default()?;
    Resolver::new(root, config).resolve(resolve_mode(signal))
}

fn resolve_entry(entry: &str, context: &Path, aliases: &AliasTable) -> EntryPoint {
    let is_path = entry.starts_with("./")
        || entry.starts_with("../")
        || Path::new(entry).is_absolute();

    if is_path {
        return EntryPoint::File(context.join(entry).clean());
    }

    match aliases.resolve(entry) {
        Some(path) => EntryPoint::File(path),
        None => EntryPoint::Module(entry.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_module_requests_verbatim() {
        let aliases = resolve_aliases("/app", &KilnConfig::default().aliases).unwrap();
        let context = Path::new("/app/src");

        assert_eq!(
            resolve_entry("@babel/polyfill", context, &aliases),
            EntryPoint::Module("@babel/polyfill".into())
        );
        assert_eq!(
            resolve_entry("./index.js", context, &aliases),
            EntryPoint::File("/app/src/index.js".into())
        );
        assert_eq!(
            resolve_entry("../shared/boot.js", context, &aliases),
            EntryPoint::File("/app/shared/boot.js".into())
        );
        assert_eq!(
            resolve_entry("@core/boot.js", context, &aliases),
            EntryPoint::File("/app/src/core/boot.js".into())
        );
    }

    #[test]
    fn entry_points_serialize_untagged() {
        let entries = vec![
            EntryPoint::Module("@babel/polyfill".into()),
            EntryPoint::File("/app/src/index.js".into()),
        ];
        assert_eq!(
            serde_json::to_value(entries).unwrap(),
            serde_json::json!(["@babel/polyfill", "/app/src/index.js"])
        );
    }
}
