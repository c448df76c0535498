//! Ordered plugin list assembly.
//!
//! Each plugin is an independently configured setup action the external
//! bundler invokes in sequence. The cleaner always precedes the static-file
//! copier so a build never copies into a stale output tree.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::BundleOptions;
use crate::mode::Mode;

/// One setup action in the plugin sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Plugin {
    /// Emit a populated HTML file from the entry-point template
    Html {
        template: PathBuf,
        filename: String,
        /// Strip redundant whitespace from the generated markup
        minify_whitespace: bool,
    },

    /// Delete previous build output before each build
    CleanOutputDir { path: PathBuf },

    /// Copy the static assets directory verbatim into the output tree
    CopyStatic { from: PathBuf, to: PathBuf },

    /// Filename pattern for extracted stylesheet bundles
    StyleExtract { filename: String },

    /// Bundle-size analyzer, off unless explicitly requested
    BundleAnalyzer,
}

/// The ordered plugin sequence for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginList {
    pub plugins: Vec<Plugin>,
}

impl PluginList {
    /// Assemble the plugin sequence for a mode.
    ///
    /// The analyzer is appended only when `analyze` is set on a production
    /// build.
    pub fn for_mode(mode: Mode, options: &BundleOptions, analyze: bool) -> Self {
        let mut plugins = vec![
            Plugin::Html {
                template: options.html.template.clone(),
                filename: options.html.filename.clone(),
                minify_whitespace: mode.is_production(),
            },
            Plugin::CleanOutputDir {
                path: options.output_dir.clone(),
            },
        ];

        if let Some(static_dir) = &options.static_dir {
            plugins.push(Plugin::CopyStatic {
                from: static_dir.clone(),
                to: options.output_dir.join(&options.static_subdir),
            });
        }

        plugins.push(Plugin::StyleExtract {
            filename: "[name].[contenthash].css".to_string(),
        });

        if mode.is_production() && analyze {
            plugins.push(Plugin::BundleAnalyzer);
        }

        Self { plugins }
    }

    #[cfg(test)]
    fn position_of(&self, predicate: impl Fn(&Plugin) -> bool) -> Option<usize> {
        self.plugins.iter().position(predicate)
    }
}
