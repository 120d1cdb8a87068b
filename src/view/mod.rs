//! View layer
//!
//! Template rendering with Tera plus the small display helpers shared by
//! the page shells (page header block, gravatar URLs).

use anyhow::{Context as AnyhowContext, Result};
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

/// Template renderer over a fixed templates directory
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load every `*.html` template under the given directory.
    ///
    /// Template names are paths relative to the directory, e.g.
    /// `admin/suppliers.html`.
    pub fn new(templates_dir: &Path) -> Result<Self> {
        let glob = format!("{}/**/*.html", templates_dir.display());
        let tera = Tera::new(&glob)
            .with_context(|| format!("Failed to load templates from {:?}", templates_dir))?;
        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(template, context)
    }
}

/// Page header block rendered by the shared partial
#[derive(Debug, Clone, Serialize)]
pub struct PageHeader {
    /// Heading text
    pub title: String,
    /// Optional lead paragraph under the heading
    pub lead: Option<String>,
}

impl PageHeader {
    /// Create a header with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lead: None,
        }
    }

    /// Add a lead paragraph
    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }
}

/// Build a Gravatar URL for an email address
pub fn gravatar_url(email: &str, size: u32) -> String {
    let digest = md5::compute(email.trim().to_lowercase().as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{:x}?s={}&d=identicon",
        digest, size
    )
}
