//! Per-file-type transform chains.
//!
//! The table covers exactly two categories, scripts and stylesheets. Anything
//! else has no chain at all: lookups return `None` rather than a pass-through
//! so the transformation engine can reject the file.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::naming::AssetKind;

const SCRIPT_TEST: &str = r"\.m?js$";
const STYLESHEET_TEST: &str = r"(?i)\.s[ac]ss$";
const SCRIPT_EXCLUDE: &str = "node_modules";

const TRANSPILE_PRESETS: &[&str] = &["@babel/preset-env"];
const TRANSPILE_PLUGINS: &[&str] = &["@babel/plugin-proposal-class-properties"];

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCRIPT_TEST).expect("script pattern is valid"));
static STYLESHEET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STYLESHEET_TEST).expect("stylesheet pattern is valid"));

/// Recognised source file category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionPattern {
    /// `.js` and `.mjs`, outside `node_modules`
    Script,
    /// `.sass` and `.scss`, any case
    Stylesheet,
}

impl ExtensionPattern {
    /// Every category the chain table has an entry for.
    pub const ALL: [ExtensionPattern; 2] = [ExtensionPattern::Script, ExtensionPattern::Stylesheet];

    pub fn name(self) -> &'static str {
        match self {
            ExtensionPattern::Script => "script",
            ExtensionPattern::Stylesheet => "stylesheet",
        }
    }

    /// Regular expression tested against the file path.
    pub fn test(self) -> &'static str {
        match self {
            ExtensionPattern::Script => SCRIPT_TEST,
            ExtensionPattern::Stylesheet => STYLESHEET_TEST,
        }
    }

    /// Directory name whose contents never match this category.
    pub fn exclude(self) -> Option<&'static str> {
        match self {
            ExtensionPattern::Script => Some(SCRIPT_EXCLUDE),
            ExtensionPattern::Stylesheet => None,
        }
    }

    /// Bundle artifact files of this category end up in.
    pub fn asset_kind(self) -> AssetKind {
        match self {
            ExtensionPattern::Script => AssetKind::Script,
            ExtensionPattern::Stylesheet => AssetKind::Stylesheet,
        }
    }

    pub fn matches(self, path: &Path) -> bool {
        let re = match self {
            ExtensionPattern::Script => &*SCRIPT_RE,
            ExtensionPattern::Stylesheet => &*STYLESHEET_RE,
        };

        if !re.is_match(&path.to_string_lossy()) {
            return false;
        }

        match self.exclude() {
            Some(excluded) => !path
                .components()
                .any(|c| matches!(c, Component::Normal(name) if name == excluded)),
            None => true,
        }
    }

    /// Category of `path`, if it has one.
    pub fn classify(path: &Path) -> Option<ExtensionPattern> {
        Self::ALL.into_iter().find(|pattern| pattern.matches(path))
    }
}

/// A single named transform step.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum TransformStep {
    /// Down-level modern script syntax
    Transpile {
        presets: Vec<String>,
        plugins: Vec<String>,
    },
    /// Report lint errors during the build
    Lint,
    /// Compile the Sass dialect to plain CSS
    CompileSass,
    /// Resolve `@import` and `url()` references in CSS
    ResolveCss,
    /// Pull the CSS text out into the standalone stylesheet bundle
    ExtractCss { hot_reload: bool, reload_all: bool },
}

impl TransformStep {
    pub fn name(&self) -> &'static str {
        match self {
            TransformStep::Transpile { .. } => "transpile",
            TransformStep::Lint => "lint",
            TransformStep::CompileSass => "compile-sass",
            TransformStep::ResolveCss => "resolve-css",
            TransformStep::ExtractCss { .. } => "extract-css",
        }
    }
}

/// Ordered transform steps, source side first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct TransformChain {
    steps: Vec<TransformStep>,
}

impl TransformChain {
    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.steps.iter().any(|step| step.name() == name)
    }

    pub fn has_lint(&self) -> bool {
        self.steps.iter().any(|step| matches!(step, TransformStep::Lint))
    }

    pub fn last(&self) -> Option<&TransformStep> {
        self.steps.last()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(TransformStep::name).collect()
    }
}

/// Transform chains for every recognised category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTable {
    script: TransformChain,
    stylesheet: TransformChain,
}

impl ChainTable {
    /// Chain for a recognised category. Total over [`ExtensionPattern::ALL`].
    pub fn get(&self, pattern: ExtensionPattern) -> &TransformChain {
        match pattern {
            ExtensionPattern::Script => &self.script,
            ExtensionPattern::Stylesheet => &self.stylesheet,
        }
    }

    pub fn keys(&self) -> [ExtensionPattern; 2] {
        ExtensionPattern::ALL
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExtensionPattern, &TransformChain)> {
        ExtensionPattern::ALL
            .into_iter()
            .map(move |pattern| (pattern, self.get(pattern)))
    }

    /// Category and chain for `path`, or `None` for an unsupported file.
    pub fn chain_for_path(&self, path: &Path) -> Option<(ExtensionPattern, &TransformChain)> {
        ExtensionPattern::classify(path).map(|pattern| (pattern, self.get(pattern)))
    }

    /// Lookup by bare extension (`"js"`, `".scss"`).
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{build_chain_table, BuildMode, ExtensionPattern};
    ///
    /// let table = build_chain_table(BuildMode::Development);
    /// assert_eq!(table.chain_for_extension("mjs").map(|(p, _)| p), Some(ExtensionPattern::Script));
    /// assert!(table.chain_for_extension(".ts").is_none());
    /// ```
    pub fn chain_for_extension(&self, extension: &str) -> Option<(ExtensionPattern, &TransformChain)> {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            return None;
        }
        self.chain_for_path(Path::new(&format!("file.{extension}")))
    }

    /// Like [`ChainTable::chain_for_path`], but a miss is an error.
    pub fn require_chain(&self, path: &Path) -> Result<(ExtensionPattern, &TransformChain)> {
        self.chain_for_path(path)
            .ok_or_else(|| ConfigError::UnsupportedAssetType {
                path: path.to_path_buf(),
            })
    }
}

impl Serialize for ChainTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(pattern, chain)| Rule { pattern, chain }))
    }
}

struct Rule<'a> {
    pattern: ExtensionPattern,
    chain: &'a TransformChain,
}

impl Serialize for Rule<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut rule = serializer.serialize_struct("Rule", 4)?;
        rule.serialize_field("category", &self.pattern)?;
        rule.serialize_field("test", self.pattern.test())?;
        rule.serialize_field("exclude", &self.pattern.exclude())?;
        rule.serialize_field("use", self.chain)?;
        rule.end()
    }
}

/// Assemble the chain table for `mode`.
///
/// Scripts are transpiled, and in development also linted. Stylesheets are
/// compiled from Sass, resolved, then extracted; extraction is always last.
pub fn build_chain_table(mode: BuildMode) -> ChainTable {
    ChainTable {
        script: script_chain(mode),
        stylesheet: stylesheet_chain(mode),
    }
}

fn script_chain(mode: BuildMode) -> TransformChain {
    let transpile = TransformStep::Transpile {
        presets: TRANSPILE_PRESETS.iter().map(|s| s.to_string()).collect(),
        plugins: TRANSPILE_PLUGINS.iter().map(|s| s.to_string()).collect(),
    };

    let steps = if mode.lint_scripts() {
        vec![transpile, TransformStep::Lint]
    } else {
        vec![transpile]
    };
    TransformChain { steps }
}

fn stylesheet_chain(mode: BuildMode) -> TransformChain {
    TransformChain {
        steps: vec![
            TransformStep::CompileSass,
            TransformStep::ResolveCss,
            TransformStep::ExtractCss {
                hot_reload: mode.hot_reload(),
                reload_all: true,
            },
        ],
    }
}
