//! README generation for betterproto client packages
//!
//! This crate transforms an extracted `ServiceStub` into the package
//! README: an intro, install instructions, an async usage example built
//! from the first method, and the full method list.

mod templates;

use grpc_readme_generator_common::{GeneratorError, Result, ServiceStub};
use std::fs;
use std::path::Path;
use tera::Tera;

/// Package name substituted into the README when none is given
pub const DEFAULT_PACKAGE_NAME: &str = "your_grpc_client";

/// README generator
///
/// Renders the extracted service metadata through the README template.
/// Rendering is total for a well-formed `ServiceStub` and deterministic:
/// the same stub and package name always produce the same bytes.
pub struct ReadmeGenerator {
    stub: ServiceStub,
    package_name: String,
    tera: Tera,
}

impl ReadmeGenerator {
    /// Create a new generator for one extracted service stub
    pub fn new(stub: ServiceStub, package_name: &str) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            stub,
            package_name: package_name.to_string(),
            tera,
        })
    }

    /// Render the README to a string
    pub fn render(&self) -> Result<String> {
        let context = self.create_context();
        self.tera
            .render("README.md", &context)
            .map_err(|e| GeneratorError::Generation(format!("Template error: {}", e)))
    }

    /// Render the README and write it to `output`, overwriting any
    /// existing file
    pub fn generate_to_file(&self, output: &Path) -> Result<()> {
        let rendered = self.render()?;
        fs::write(output, rendered).map_err(|e| {
            GeneratorError::Generation(format!("Failed to write {}: {}", output.display(), e))
        })?;

        Ok(())
    }

    /// Create template context from the service stub
    fn create_context(&self) -> tera::Context {
        let first = self.stub.first_method();

        let mut context = tera::Context::new();
        context.insert("package_name", &self.package_name);
        context.insert("service_name", &self.stub.service_name);
        context.insert("module_name", &self.stub.module_name);
        context.insert("first_method", &first.name);
        context.insert("first_request", &first.request_type);
        context.insert("methods", &self.stub.methods);
        context
    }
}

/// Generate a README file (convenience function)
pub fn generate_readme(stub: ServiceStub, package_name: &str, output: &Path) -> Result<()> {
    let generator = ReadmeGenerator::new(stub, package_name)?;
    generator.generate_to_file(output)
}
