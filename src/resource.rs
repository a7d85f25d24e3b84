//! Loosely typed view of the FHIR resources that get a documentation page.
//!
//! Only the handful of metadata elements shown on a page are read. Everything
//! else in the resource is ignored, and absent elements render as empty text.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Status shown when a resource does not declare one.
pub const DEFAULT_STATUS: &str = "draft";

/// The resource kinds that are documented, one output folder each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// `StructureDefinition` resources
    Profile,
    /// `CodeSystem` resources
    CodeSystem,
    /// `ValueSet` resources
    ValueSet,
}

impl ResourceKind {
    pub fn all() -> [ResourceKind; 3] {
        [
            ResourceKind::Profile,
            ResourceKind::CodeSystem,
            ResourceKind::ValueSet,
        ]
    }

    /// Map a FHIR `resourceType` to its documentation kind.
    pub fn from_resource_type(resource_type: &str) -> Option<Self> {
        match resource_type {
            "StructureDefinition" => Some(ResourceKind::Profile),
            "CodeSystem" => Some(ResourceKind::CodeSystem),
            "ValueSet" => Some(ResourceKind::ValueSet),
            _ => None,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "StructureDefinition",
            ResourceKind::CodeSystem => "CodeSystem",
            ResourceKind::ValueSet => "ValueSet",
        }
    }

    /// Template name and short label.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "profile",
            ResourceKind::CodeSystem => "codesystem",
            ResourceKind::ValueSet => "valueset",
        }
    }

    /// Folder under the docs directory that holds pages of this kind.
    pub fn subdir(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "profiles",
            ResourceKind::CodeSystem => "codesystems",
            ResourceKind::ValueSet => "valuesets",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata of a single FHIR resource as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    #[serde(default, deserialize_with = "lenient_text")]
    pub resource_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,

    /// Canonical URL
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub version: Option<String>,

    /// Concept entries of terminology resources. `None` when the element is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<Value>>,
}

/// Accepts any scalar where FHIR expects a string. `null` counts as absent,
/// numbers and booleans keep their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl ResourceDescriptor {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        self.resource_type
            .as_deref()
            .and_then(ResourceKind::from_resource_type)
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The page heading: `title`, or `name` when the title is missing or empty.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => self.name(),
        }
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }

    pub fn concept_count(&self) -> Option<usize> {
        self.concept.as_ref().map(Vec::len)
    }

    /// Output file name, `<id>.md`.
    ///
    /// Returns `None` when the id is missing, has surrounding whitespace, or
    /// could escape the output folder (empty, `.`/`..`, or containing a path
    /// separator).
    pub fn file_name(&self) -> Option<String> {
        let id = self.id.as_deref()?;
        if id.is_empty()
            || id != id.trim()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\'])
        {
            return None;
        }
        Some(format!("{id}.md"))
    }

    /// Values exposed to the page templates.
    pub fn template_data(&self) -> Value {
        let resource_type = match self.kind() {
            Some(kind) => kind.resource_type(),
            None => self.resource_type.as_deref().unwrap_or_default(),
        };

        json!({
            "resource_type": resource_type,
            "kind": self.kind().map(|kind| kind.label()).unwrap_or_default(),
            "id": self.id(),
            "name": self.name(),
            "title": self.display_title(),
            "url": self.url.as_deref().unwrap_or_default(),
            "status": self.status(),
            "description": self.description.as_deref().unwrap_or_default(),
            "version": self.version.as_deref().unwrap_or_default(),
            "has_concept_count": self.concept.is_some(),
            "concept_count": self.concept_count().unwrap_or(0),
        })
    }
}
