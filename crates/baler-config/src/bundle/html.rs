use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::helpers::{default_html_filename, default_html_template};

/// HTML entry-point templating options.
///
/// Whitespace stripping is a mode decision made by the plugin list builder,
/// not stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Path to the HTML template, relative to the context directory
    #[serde(default = "default_html_template")]
    pub template: PathBuf,

    /// Output filename for the generated HTML (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Page title override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            template: default_html_template(),
            filename: default_html_filename(),
            title: None,
        }
    }
}
