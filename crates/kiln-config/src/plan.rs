//! Whole-build orchestration steps.
//!
//! The plan only describes side effects; executing them belongs to the build
//! executor. Order is fixed: clearing the output directory always comes first
//! and stylesheet extraction always comes last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mode::{BuildMode, HtmlMinifyOptions};
use crate::naming::AssetKind;

/// Default filename of the generated HTML document.
pub const HTML_FILENAME: &str = "index.html";

/// Filesystem inputs the plan refers to. All paths should be absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPaths {
    pub template: PathBuf,
    pub static_assets: Vec<PathBuf>,
    pub output_root: PathBuf,
}

/// Verbatim copy of one file into the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum OrchestrationStep {
    /// Remove everything a previous build left in the output directory
    ClearOutput { output_root: PathBuf },
    /// Render the HTML entry document from a template
    EmitHtmlShell {
        template: PathBuf,
        filename: String,
        minify: HtmlMinifyOptions,
    },
    /// Copy fixed static assets into the output directory
    CopyStaticAssets { patterns: Vec<CopyPattern> },
    /// Write the extracted stylesheet bundle
    ExtractStylesheetBundle { filename: String },
}

impl OrchestrationStep {
    pub fn name(&self) -> &'static str {
        match self {
            OrchestrationStep::ClearOutput { .. } => "clear-output",
            OrchestrationStep::EmitHtmlShell { .. } => "emit-html-shell",
            OrchestrationStep::CopyStaticAssets { .. } => "copy-static-assets",
            OrchestrationStep::ExtractStylesheetBundle { .. } => "extract-stylesheet-bundle",
        }
    }
}

/// Ordered orchestration steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrchestrationPlan {
    steps: Vec<OrchestrationStep>,
}

impl OrchestrationPlan {
    pub fn steps(&self) -> &[OrchestrationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&OrchestrationStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&OrchestrationStep> {
        self.steps.last()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(OrchestrationStep::name).collect()
    }
}

impl<'a> IntoIterator for &'a OrchestrationPlan {
    type Item = &'a OrchestrationStep;
    type IntoIter = std::slice::Iter<'a, OrchestrationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Build the orchestration plan for `mode`.
///
/// # Example
///
/// ```
/// use kiln_config::{build_orchestration_plan, BuildMode, PlanPaths};
///
/// let paths = PlanPaths {
///     template: "/app/src/index.html".into(),
///     static_assets: vec!["/app/src/favicon.ico".into()],
///     output_root: "/app/dist".into(),
/// };
/// let plan = build_orchestration_plan(BuildMode::Production, &paths);
/// assert_eq!(
///     plan.names(),
///     vec!["clear-output", "emit-html-shell", "copy-static-assets", "extract-stylesheet-bundle"]
/// );
/// ```
pub fn build_orchestration_plan(mode: BuildMode, paths: &PlanPaths) -> OrchestrationPlan {
    let steps = vec![
        OrchestrationStep::ClearOutput {
            output_root: paths.output_root.clone(),
        },
        OrchestrationStep::EmitHtmlShell {
            template: paths.template.clone(),
            filename: HTML_FILENAME.to_string(),
            minify: mode.html_minify(),
        },
        OrchestrationStep::CopyStaticAssets {
            patterns: copy_patterns(&paths.static_assets, &paths.output_root),
        },
        OrchestrationStep::ExtractStylesheetBundle {
            filename: mode.naming_rule().template(AssetKind::Stylesheet),
        },
    ];

    tracing::debug!(%mode, steps = steps.len(), "built orchestration plan");
    OrchestrationPlan { steps }
}

fn copy_patterns(assets: &[PathBuf], output_root: &Path) -> Vec<CopyPattern> {
    assets
        .iter()
        .map(|asset| CopyPattern {
            from: asset.clone(),
            to: output_root.to_path_buf(),
        })
        .collect()
}
