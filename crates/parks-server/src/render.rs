//! Page rendering over Tera.
//!
//! [`Templates`] owns the template set and renders a named page from any
//! serializable context. Template names are given without extension
//! ("index", "show", "create", "delete"); the `.html` suffix keeps Tera's
//! autoescaping on.
//!
//! [`HtmlPage`] turns rendered markup into a response and carries the
//! reload flag, which marks the page as uncacheable.

use std::error::Error;
use std::path::Path;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tera::{Context, Tera};

/// Page templates every template set must provide.
pub const PAGES: [&str; 4] = ["index", "show", "create", "delete"];

/// Templates compiled into the binary, as `(name, source)` pairs.
const EMBEDDED: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("show.html", include_str!("../templates/show.html")),
    ("create.html", include_str!("../templates/create.html")),
    ("delete.html", include_str!("../templates/delete.html")),
];

/// Errors from loading or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Parsing the template set failed.
    #[error("failed to load templates: {0}")]
    Load(#[source] tera::Error),

    /// A required page template is absent from the set.
    #[error("template set has no '{0}' page")]
    MissingPage(String),

    /// The context could not be converted into a Tera context.
    #[error("context for '{template}' is not an object: {source}")]
    Context {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// The template is missing or does not accept the context.
    #[error("failed to render '{template}': {}", describe(.source))]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}

/// Flattens a Tera error chain; the top-level message alone rarely names
/// the offending variable.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// A loaded set of page templates.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Loads the templates bundled with the binary.
    pub fn embedded() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(EMBEDDED)
            .map_err(RenderError::Load)?;
        Ok(Templates { tera })
    }

    /// Loads every `*.html` file under `dir` at runtime.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let glob = dir.as_ref().join("**").join("*.html");
        let tera = Tera::new(&glob.to_string_lossy()).map_err(RenderError::Load)?;
        tracing::debug!(
            templates = tera.get_template_names().count(),
            "loaded templates from {}",
            dir.as_ref().display()
        );
        Ok(Templates { tera })
    }

    /// Returns whether a page template with this name is loaded.
    pub fn contains(&self, name: &str) -> bool {
        let file = format!("{}.html", name);
        self.tera.get_template_names().any(|t| t == file)
    }

    /// Fails with [`RenderError::MissingPage`] unless every page in
    /// [`PAGES`] is loaded.
    pub fn ensure_pages(&self) -> Result<(), RenderError> {
        match PAGES.iter().find(|page| !self.contains(page)) {
            Some(page) => Err(RenderError::MissingPage(page.to_string())),
            None => Ok(()),
        }
    }

    /// Renders the page template `name` with `context`.
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String, RenderError> {
        let template = format!("{}.html", name);
        let context = Context::from_serialize(context).map_err(|source| RenderError::Context {
            template: template.clone(),
            source,
        })?;
        self.tera
            .render(&template, &context)
            .map_err(|source| RenderError::Render { template, source })
    }
}

/// A rendered HTML page.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    pub html: String,
    /// Ask the client to treat the response as fresh rather than cached.
    pub reload: bool,
}

impl HtmlPage {
    pub fn new(html: String) -> Self {
        HtmlPage {
            html,
            reload: false,
        }
    }

    pub fn with_reload(html: String) -> Self {
        HtmlPage { html, reload: true }
    }
}

impl IntoResponse for HtmlPage {
    fn into_response(self) -> Response {
        let mut response = axum::response::Html(self.html).into_response();
        if self.reload {
            response.headers_mut().insert(
                header::CACHE_CONTROL,
                header::HeaderValue::from_static("no-store, must-revalidate"),
            );
        }
        response
    }
}
