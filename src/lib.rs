//! # FHIR Profile Docs
//!
//! Generates markdown documentation pages for the conformance and terminology
//! resources of a FHIR implementation guide repository.
//!
//! ## Features
//!
//! - **Scanning**: Recursively discovers `.json` resources under the input directories
//! - **Profiles & Terminology**: One page per StructureDefinition, CodeSystem and ValueSet
//! - **Templates**: Handlebars page templates with per-kind overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fhir_profile_docs::*;
//!
//! # async fn example() -> Result<()> {
//! let config = DocsConfig::for_base_dir("./zarish-fhir-profiles");
//! let generator = DocsGenerator::new(config)?;
//! let report = generator.run().await?;
//! println!("Generated {} documentation pages", report.total());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod resource;
pub mod scanner;
pub mod template;

pub use config::DocsConfig;
pub use error::{DocsError, Result};
pub use generator::{DocsGenerator, FailedFile, GeneratedPage, GenerationReport};
pub use resource::{ResourceDescriptor, ResourceKind};
pub use scanner::ResourceScanner;
pub use template::{BuiltinTemplates, TemplateEngine};
