//! Output filename templates and content-hash rendering.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the content hash in production templates.
pub const HASH_PLACEHOLDER: &str = "[hash]";

/// Number of hex digits of the BLAKE3 digest kept in a filename.
pub const HASH_LENGTH: usize = 20;

const BUNDLE_STEM: &str = "bundle";

/// Kind of bundle artifact a filename is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Script,
    Stylesheet,
}

impl AssetKind {
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Stylesheet => "css",
        }
    }
}

/// How bundle filenames are formed.
///
/// Exactly one rule is active per build; see [`crate::BuildMode::naming_rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputNamingRule {
    /// `bundle.js`: stable across rebuilds so incremental caches stay warm
    Stable,
    /// `bundle.[hash].js`: changes whenever the content changes
    ContentHashed,
}

impl OutputNamingRule {
    /// Filename template for `kind`, with the hash placeholder left in place.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{AssetKind, OutputNamingRule};
    ///
    /// assert_eq!(OutputNamingRule::Stable.template(AssetKind::Script), "bundle.js");
    /// assert_eq!(
    ///     OutputNamingRule::ContentHashed.template(AssetKind::Stylesheet),
    ///     "bundle.[hash].css"
    /// );
    /// ```
    pub fn template(self, kind: AssetKind) -> String {
        match self {
            OutputNamingRule::Stable => format!("{BUNDLE_STEM}.{}", kind.extension()),
            OutputNamingRule::ContentHashed => {
                format!("{BUNDLE_STEM}.{HASH_PLACEHOLDER}.{}", kind.extension())
            }
        }
    }

    /// Final filename for a bundle of `kind` whose emitted bytes are `content`.
    pub fn render(self, kind: AssetKind, content: &[u8]) -> String {
        let template = self.template(kind);
        match self {
            OutputNamingRule::Stable => template,
            OutputNamingRule::ContentHashed => {
                let filename = template.replace(HASH_PLACEHOLDER, &content_hash(content));
                tracing::trace!(kind = ?kind, %filename, "rendered content-hashed filename");
                filename
            }
        }
    }

    pub fn is_hashed(self) -> bool {
        self == OutputNamingRule::ContentHashed
    }
}

/// Truncated BLAKE3 digest of `content`, as lowercase hex.
pub fn content_hash(content: &[u8]) -> String {
    let digest = blake3::hash(content);
    digest.to_hex().as_str()[..HASH_LENGTH].to_string()
}
