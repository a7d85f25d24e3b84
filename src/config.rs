use crate::error::{DocsError, Result};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where resources are read from and where pages are written to.
///
/// Relative `input_dirs`, `docs_dir` and `templates_dir` are resolved
/// against `base_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocsConfig {
    pub base_dir: PathBuf,
    pub input_dirs: Vec<PathBuf>,
    pub docs_dir: PathBuf,
    /// Directory with `<label>.hbs` files replacing the built-in page templates
    pub templates_dir: Option<PathBuf>,
    /// Record failing files and continue instead of aborting the run
    pub keep_going: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input_dirs: vec![PathBuf::from("input"), PathBuf::from("terminology")],
            docs_dir: PathBuf::from("docs"),
            templates_dir: None,
            keep_going: false,
        }
    }
}

impl DocsConfig {
    pub fn for_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Default::default()
        }
    }

    /// Load a JSON configuration file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| DocsError::parse(path, e))
    }

    pub fn with_input_dirs(mut self, input_dirs: Vec<PathBuf>) -> Self {
        self.input_dirs = input_dirs;
        self
    }

    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }

    pub fn with_templates_dir(mut self, templates_dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(templates_dir.into());
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn input_roots(&self) -> Vec<PathBuf> {
        self.input_dirs.iter().map(|dir| self.resolve(dir)).collect()
    }

    pub fn docs_root(&self) -> PathBuf {
        self.resolve(&self.docs_dir)
    }

    pub fn output_dir(&self, kind: ResourceKind) -> PathBuf {
        self.docs_root().join(kind.subdir())
    }

    pub fn templates_root(&self) -> Option<PathBuf> {
        self.templates_dir.as_deref().map(|dir| self.resolve(dir))
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_dirs.is_empty() {
            return Err(DocsError::config("at least one input directory is required"));
        }
        if self.docs_dir.as_os_str().is_empty() {
            return Err(DocsError::config("docs directory must not be empty"));
        }
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = DocsConfig::for_base_dir("/repo");
        assert_eq!(
            config.input_roots(),
            vec![PathBuf::from("/repo/input"), PathBuf::from("/repo/terminology")]
        );
        assert_eq!(config.docs_root(), PathBuf::from("/repo/docs"));
        assert_eq!(
            config.output_dir(ResourceKind::Profile),
            PathBuf::from("/repo/docs/profiles")
        );
        assert_eq!(
            config.output_dir(ResourceKind::ValueSet),
            PathBuf::from("/repo/docs/valuesets")
        );
        assert_eq!(config.templates_root(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_absolute_paths_are_not_rebased() {
        let config = DocsConfig::for_base_dir("/repo")
            .with_input_dirs(vec![PathBuf::from("/elsewhere/fsh-generated")])
            .with_docs_dir("site")
            .with_templates_dir("/templates");
        assert_eq!(
            config.input_roots(),
            vec![PathBuf::from("/elsewhere/fsh-generated")]
        );
        assert_eq!(config.docs_root(), PathBuf::from("/repo/site"));
        assert_eq!(config.templates_root(), Some(PathBuf::from("/templates")));
    }

    #[test]
    fn test_validation() {
        let config = DocsConfig::default().with_input_dirs(Vec::new());
        assert!(matches!(config.validate(), Err(DocsError::Config { .. })));

        let config = DocsConfig::default().with_docs_dir("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DocsConfig =
            serde_json::from_str(r#"{"baseDir": "/repo", "keepGoing": true}"#).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/repo"));
        assert!(config.keep_going);
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.input_dirs.len(), 2);
    }
}
