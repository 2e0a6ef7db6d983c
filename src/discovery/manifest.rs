//! Project manifest (simpleyaml.yaml) parsing.
//!
//! The manifest configures the command-line tool: parser settings and
//! which files directory scans pick up.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, YamlError};
use crate::parser::{ParseOptions, DEFAULT_TAB_WIDTH};

/// Tool configuration loaded from simpleyaml.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Indentation units counted for a tab.
    pub tab_width: usize,

    /// File extensions (without the dot) picked up when scanning directories.
    pub extensions: Vec<String>,

    /// Patterns to exclude from scanning.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            extensions: vec!["yaml".to_string(), "yml".to_string()],
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| YamlError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check simpleyaml.yaml syntax".to_string()),
        })?;

        if manifest.tab_width == 0 {
            return Err(YamlError::Config {
                message: "tab_width must be at least 1".to_string(),
                help: Some("Remove tab_width to use the default of 8".to_string()),
            });
        }

        Ok(manifest)
    }

    /// Parser options derived from this manifest.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            tab_width: self.tab_width,
        }
    }

    /// Whether a scanned file has one of the configured extensions.
    pub fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or substring.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.tab_width, 8);
        assert_eq!(manifest.extensions, vec!["yaml", "yml"]);
        assert!(manifest.excludes.is_empty());
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
tab_width: 4
extensions:
  - yaml
  - conf
excludes:
  - "*.bak"
  - "**/target/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.tab_width, 4);
        assert_eq!(manifest.extensions, vec!["yaml", "conf"]);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/target/*"]);
        assert_eq!(manifest.parse_options(), ParseOptions { tab_width: 4 });
    }

    #[test]
    fn test_parse_partial_manifest_uses_defaults() {
        let manifest = Manifest::parse("tab_width: 2").unwrap();

        assert_eq!(manifest.tab_width, 2);
        assert_eq!(manifest.extensions, vec!["yaml", "yml"]);
    }

    #[test]
    fn test_parse_invalid_manifest() {
        assert!(matches!(
            Manifest::parse("tab_width: [oops"),
            Err(YamlError::Config { .. })
        ));
        assert!(matches!(
            Manifest::parse("tab_width: 0"),
            Err(YamlError::Config { .. })
        ));
    }

    #[test]
    fn test_has_extension() {
        let manifest = Manifest::default();

        assert!(manifest.has_extension(Path::new("a/b.yaml")));
        assert!(manifest.has_extension(Path::new("b.YML")));
        assert!(!manifest.has_extension(Path::new("b.json")));
        assert!(!manifest.has_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak.yaml".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("path/to/file.bak.yaml")));
        assert!(!manifest.is_excluded(Path::new("file.yaml")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/target/*".to_string(), "vendor/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("target/out.yaml")));
        assert!(manifest.is_excluded(Path::new("crate/target/out.yaml")));
        assert!(manifest.is_excluded(Path::new("vendor/lib.yaml")));
        assert!(!manifest.is_excluded(Path::new("src/config.yaml")));
    }

    #[test]
    fn test_is_excluded_substring() {
        let manifest = Manifest {
            excludes: vec!["fixtures".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("tests/fixtures/a.yaml")));
    }
}
