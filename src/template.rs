//! Template system for documentation pages

use crate::error::{DocsError, Result};
use crate::resource::ResourceKind;
use handlebars::Handlebars;
use serde_json::Value;
use std::path::Path;

/// File extension of page templates in a templates directory.
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Handlebars registry configured for markdown output.
///
/// HTML escaping is off, and strict mode turns references to unknown
/// variables into render errors.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self { handlebars }
    }

    /// Register a template from string
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(DocsError::from)
    }

    /// Register a template from file
    pub fn register_template_file(&mut self, name: &str, path: &Path) -> Result<()> {
        self.handlebars
            .register_template_file(name, path)
            .map_err(DocsError::from)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    pub fn render(&self, template_name: &str, data: &Value) -> Result<String> {
        if !self.has_template(template_name) {
            return Err(DocsError::MissingTemplate {
                name: template_name.to_string(),
            });
        }

        self.handlebars
            .render(template_name, data)
            .map_err(DocsError::from)
    }

    /// Names of all registered templates, sorted.
    pub fn get_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlebars.get_templates().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in page templates, one per documented resource kind.
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    /// Overview page shared by every kind.
    pub fn overview() -> &'static str {
        r##"# {{title}}

{{description}}

## Overview

- **ID**: `{{id}}`
- **Name**: {{name}}
- **URL**: `{{url}}`
- **Status**: {{status}}
- **Version**: {{version}}{{#if has_concept_count}}
- **Concept Count**: {{concept_count}}{{/if}}

## Example Usage

```json
{
  "resourceType": "Reference",
  "reference": "{{resource_type}}/{{id}}"
}
```

---

*Generated automatically by `fhir-profile-docs`*
"##
    }

    pub fn for_kind(kind: ResourceKind) -> &'static str {
        match kind {
            ResourceKind::Profile | ResourceKind::CodeSystem | ResourceKind::ValueSet => {
                Self::overview()
            }
        }
    }

    pub fn register_all(engine: &mut TemplateEngine) -> Result<()> {
        for kind in ResourceKind::all() {
            engine.register_template(kind.label(), Self::for_kind(kind))?;
        }
        Ok(())
    }

    /// Replace built-ins with `<label>.hbs` files found in `dir`.
    ///
    /// Returns the kinds that were overridden.
    pub fn register_overrides(engine: &mut TemplateEngine, dir: &Path) -> Result<Vec<ResourceKind>> {
        if !dir.is_dir() {
            return Err(DocsError::config(format!(
                "templates directory {} does not exist",
                dir.display()
            )));
        }

        let mut overridden = Vec::new();
        for kind in ResourceKind::all() {
            let path = dir.join(format!("{}.{}", kind.label(), TEMPLATE_EXTENSION));
            if path.is_file() {
                engine.register_template_file(kind.label(), &path)?;
                tracing::debug!("Using custom {} template {}", kind, path.display());
                overridden.push(kind);
            }
        }
        Ok(overridden)
    }
}
