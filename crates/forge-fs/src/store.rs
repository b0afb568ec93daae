//! Format-agnostic manifest decoding

use std::fmt;

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl ManifestFormat {
    /// Detect the format from a file extension.
    ///
    /// Returns `None` for extensions that do not name a known format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect the format of `path`, falling back to YAML.
    pub fn detect(path: &NormalizedPath) -> Self {
        path.extension()
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Loads manifest files into typed values.
///
/// The format is detected from the file extension; files without a known
/// extension are read as YAML.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestStore;

impl ManifestStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and decode a manifest, detecting its format from the extension.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        self.load_as(path, ManifestFormat::detect(path))
    }

    /// Load and decode a manifest with an explicit format.
    pub fn load_as<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        format: ManifestFormat,
    ) -> Result<T> {
        let content = io::read_text(path)?;
        tracing::trace!(path = %path, %format, "decoding manifest");
        Self::decode(path, &content, format)
    }

    fn decode<T: DeserializeOwned>(
        path: &NormalizedPath,
        content: &str,
        format: ManifestFormat,
    ) -> Result<T> {
        let parse_error = |message: String| Error::ManifestParse {
            path: path.to_native(),
            format: format.to_string(),
            message,
        };

        match format {
            ManifestFormat::Yaml => {
                // An empty YAML document is an empty mapping, not an error.
                if content.trim().is_empty() {
                    return serde_yaml::from_str("{}").map_err(|e| parse_error(e.to_string()));
                }
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            ManifestFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_falls_back_to_yaml() {
        let path = NormalizedPath::new("unit/.runnable.conf");
        assert_eq!(ManifestFormat::detect(&path), ManifestFormat::Yaml);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(ManifestFormat::from_extension("YML"), Some(ManifestFormat::Yaml));
        assert_eq!(ManifestFormat::from_extension("Json"), Some(ManifestFormat::Json));
        assert_eq!(ManifestFormat::from_extension("ini"), None);
    }
}
