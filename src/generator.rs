//! Page generation: parse each resource file, pick its kind, render and write.

use crate::config::DocsConfig;
use crate::error::{DocsError, Result};
use crate::resource::{ResourceDescriptor, ResourceKind};
use crate::scanner::ResourceScanner;
use crate::template::{BuiltinTemplates, TemplateEngine};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A documentation page written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub kind: ResourceKind,
    pub id: String,
    pub path: PathBuf,
}

/// A resource file that could not be documented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub pages: Vec<GeneratedPage>,
    /// JSON files that are not a documented resource kind, or lack a usable id
    pub skipped: usize,
    pub failures: Vec<FailedFile>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.pages.len()
    }

    pub fn count_for(&self, kind: ResourceKind) -> usize {
        self.pages.iter().filter(|page| page.kind == kind).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct DocsGenerator {
    config: DocsConfig,
    engine: TemplateEngine,
}

impl DocsGenerator {
    /// Builds the template engine: built-ins first, then any overrides from
    /// the configured templates directory.
    pub fn new(config: DocsConfig) -> Result<Self> {
        config.validate()?;

        let mut engine = TemplateEngine::new();
        BuiltinTemplates::register_all(&mut engine)?;
        if let Some(dir) = config.templates_root() {
            let overridden = BuiltinTemplates::register_overrides(&mut engine, &dir)?;
            tracing::info!(
                "Loaded {} custom template(s) from {}",
                overridden.len(),
                dir.display()
            );
        }

        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub async fn prepare_output_dirs(&self) -> Result<()> {
        for kind in ResourceKind::all() {
            fs::create_dir_all(self.config.output_dir(kind)).await?;
        }
        Ok(())
    }

    /// Render the page for a resource of a documented kind.
    pub fn render(&self, descriptor: &ResourceDescriptor) -> Result<String> {
        let kind = descriptor
            .kind()
            .ok_or_else(|| DocsError::UnsupportedResource {
                resource_type: descriptor.resource_type.clone().unwrap_or_default(),
            })?;

        self.engine.render(kind.label(), &descriptor.template_data())
    }

    /// Document a single file.
    ///
    /// Returns `Ok(None)` for JSON that is not an object or not a documented
    /// resource kind, and for resources whose id cannot name a page.
    pub async fn process_file(&self, path: &Path) -> Result<Option<GeneratedPage>> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DocsError::read(path, e))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| DocsError::parse(path, e))?;

        let kind = match value
            .get("resourceType")
            .and_then(Value::as_str)
            .and_then(ResourceKind::from_resource_type)
        {
            Some(kind) => kind,
            None => {
                tracing::debug!("Skipping {}: not a documented resource", path.display());
                return Ok(None);
            }
        };

        let descriptor = ResourceDescriptor::from_value(value)
            .map_err(|e| DocsError::invalid_resource(path, e.to_string()))?;
        let Some(file_name) = descriptor.file_name() else {
            tracing::warn!(
                "Skipping {}: {} has no usable id ({:?})",
                path.display(),
                kind.resource_type(),
                descriptor.id()
            );
            return Ok(None);
        };

        let markdown = self.render(&descriptor)?;
        let out_path = self.config.output_dir(kind).join(file_name);
        fs::write(&out_path, markdown).await?;
        tracing::info!("Created: {}", out_path.display());

        Ok(Some(GeneratedPage {
            kind,
            id: descriptor.id().to_string(),
            path: out_path,
        }))
    }

    /// Scan the input directories and document every resource found.
    ///
    /// Files are processed one after another. Unless `keep_going` is set, the
    /// first failure ends the run.
    pub async fn run(&self) -> Result<GenerationReport> {
        self.prepare_output_dirs().await?;

        let files = ResourceScanner::new(self.config.input_roots()).scan();
        tracing::debug!("Processing {} JSON files", files.len());

        let mut report = GenerationReport::default();
        for path in files {
            match self.process_file(&path).await {
                Ok(Some(page)) => report.pages.push(page),
                Ok(None) => report.skipped += 1,
                Err(e) if self.config.keep_going => {
                    tracing::warn!("Failed to document {}: {}", path.display(), e);
                    report.failures.push(FailedFile {
                        path,
                        message: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            "Generated {} pages ({} profiles, {} code systems, {} value sets), skipped {}",
            report.total(),
            report.count_for(ResourceKind::Profile),
            report.count_for(ResourceKind::CodeSystem),
            report.count_for(ResourceKind::ValueSet),
            report.skipped
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_render_picks_kind_template() {
        let generator = DocsGenerator::new(DocsConfig::default()).unwrap();
        let descriptor = ResourceDescriptor::from_value(json!({
            "resourceType": "ValueSet",
            "id": "zarish-gender-vs",
            "name": "ZarishGenderVS",
            "compose": {"include": []}
        }))
        .unwrap();

        let page = generator.render(&descriptor).unwrap();
        assert!(page.starts_with("# ZarishGenderVS\n"));
        assert!(page.contains("- **Status**: draft\n"));
        assert!(page.contains(r#""reference": "ValueSet/zarish-gender-vs""#));
    }

    #[test]
    fn test_render_rejects_other_kinds() {
        let generator = DocsGenerator::new(DocsConfig::default()).unwrap();
        let descriptor =
            ResourceDescriptor::from_value(json!({"resourceType": "Patient", "id": "p1"})).unwrap();
        assert!(matches!(
            generator.render(&descriptor),
            Err(DocsError::UnsupportedResource { .. })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DocsConfig::default().with_input_dirs(Vec::new());
        assert!(DocsGenerator::new(config).is_err());
    }

    #[tokio::test]
    async fn test_prepare_output_dirs() {
        let temp = TempDir::new().unwrap();
        let generator = DocsGenerator::new(DocsConfig::for_base_dir(temp.path())).unwrap();
        generator.prepare_output_dirs().await.unwrap();

        for subdir in ["profiles", "codesystems", "valuesets"] {
            assert!(temp.path().join("docs").join(subdir).is_dir());
        }
    }

    #[test]
    fn test_report_counts() {
        let page = |kind, id: &str| GeneratedPage {
            kind,
            id: id.to_string(),
            path: PathBuf::from(format!("{id}.md")),
        };
        let report = GenerationReport {
            pages: vec![
                page(ResourceKind::Profile, "a"),
                page(ResourceKind::Profile, "b"),
                page(ResourceKind::ValueSet, "c"),
            ],
            skipped: 1,
            failures: Vec::new(),
        };

        assert_eq!(report.total(), 3);
        assert_eq!(report.count_for(ResourceKind::Profile), 2);
        assert_eq!(report.count_for(ResourceKind::CodeSystem), 0);
        assert!(!report.has_failures());
    }
}
