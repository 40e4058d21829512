//! Load a palette from a design-token file.
//!
//! The file is YAML (or JSON, by extension) with a `colors.system` section
//! mapping family names to ordered lists of `{ utility, value }` entries:
//!
//! ```yaml
//! colors:
//!   system:
//!     gray:
//!       - utility: gray-10
//!         value: "#e6e6e6"
//!       - utility: gray-5v
//!         value: false
//! ```
//!
//! Family order in the file is kept. Entries whose value is missing,
//! `null`, or `false` are dropped.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::info;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::model::{Palette, PaletteBuilder};

/// Error type for token file loading.
#[derive(Debug)]
pub enum TokenError {
    /// IO error reading the file
    Io(std::io::Error),
    /// YAML parsing error
    Yaml(serde_yaml::Error),
    /// JSON parsing error
    Json(serde_json::Error),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Yaml(e) => write!(f, "YAML parse error: {}", e),
            Self::Json(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for TokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for TokenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for TokenError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Token file syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenFormat {
    #[default]
    Yaml,
    Json,
}

impl TokenFormat {
    /// JSON for a `.json` extension, YAML otherwise.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Self::Json } else { Self::Yaml }
    }
}

#[derive(Debug, Deserialize)]
struct TokenDocument {
    colors: ColorSection,
}

#[derive(Debug, Deserialize)]
struct ColorSection {
    #[serde(deserialize_with = "ordered_families")]
    system: Vec<(String, Vec<TokenEntry>)>,
}

/// One `{ utility, value }` entry.
#[derive(Debug, Deserialize)]
struct TokenEntry {
    utility: String,
    #[serde(default)]
    value: Option<TokenValue>,
}

/// Token files mark unset colors with `false`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenValue {
    Color(String),
    Unset(bool),
}

impl TokenEntry {
    fn value(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Color(value)) => Some(value.as_str()),
            Some(TokenValue::Unset(_)) | None => None,
        }
    }
}

/// Deserialize a map into a list, keeping document order.
fn ordered_families<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<TokenEntry>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FamiliesVisitor;

    impl<'de> Visitor<'de> for FamiliesVisitor {
        type Value = Vec<(String, Vec<TokenEntry>)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of family names to token lists")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut families = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                families.push(entry);
            }
            Ok(families)
        }
    }

    deserializer.deserialize_map(FamiliesVisitor)
}

/// Parse token file content into a palette.
pub fn parse_tokens(content: &str, format: TokenFormat) -> Result<Palette, TokenError> {
    let document: TokenDocument = match format {
        TokenFormat::Yaml => serde_yaml::from_str(content)?,
        TokenFormat::Json => serde_json::from_str(content)?,
    };

    let mut builder = PaletteBuilder::default();
    for (family, entries) in &document.colors.system {
        builder.family(family);
        for entry in entries {
            builder.add(family, &entry.utility, entry.value());
        }
    }
    Ok(builder.build())
}

/// Read and parse a token file.
#[cfg_attr(debug_assertions, instrument)]
pub fn load_palette(path: &Path) -> Result<Palette, TokenError> {
    let content = std::fs::read_to_string(path)?;
    let palette = parse_tokens(&content, TokenFormat::from_path(path))?;
    info!(
        families = palette.len(),
        colors = palette.color_count(),
        "palette loaded"
    );
    Ok(palette)
}
