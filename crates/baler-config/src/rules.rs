//! The loader rule table: a static, ordered mapping from file-extension
//! patterns to transform chains.
//!
//! Rules are evaluated top-to-bottom with first-match-wins semantics, so
//! exactly one rule fires per asset. The table is pure data; the external
//! bundler interprets the chains.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bundle::{BundleOptions, EsTarget};

/// Script transform settings: lower modern syntax to a compatible target and
/// enable the declarative class-field extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTransform {
    pub target: EsTarget,

    #[serde(default = "default_class_properties")]
    pub class_properties: bool,
}

fn default_class_properties() -> bool {
    true
}

impl Default for ScriptTransform {
    fn default() -> Self {
        Self {
            target: EsTarget::default(),
            class_properties: true,
        }
    }
}

/// One stage of a transform chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Loader {
    /// Writes interpreted styles to a separate output file
    StyleExtract { public_path: String },
    /// Interprets stylesheet syntax and resolves imports
    Style,
    /// Compiles the CSS-superset syntax down to plain CSS
    SassPreprocessor,
    /// Copies the file into the output tree and rewrites references
    AssetFile,
    /// Parses XML documents into importable data structures
    Xml,
    /// Parses CSV files into importable data structures
    Csv,
    /// Script transform chain
    Script(ScriptTransform),
}

/// A single rule: a file-extension pattern and the chain applied on match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Pattern matched against the asset path
    #[serde(with = "serde_pattern")]
    pub test: Regex,

    /// Paths matching this pattern never fire the rule
    #[serde(default)]
    #[serde(with = "serde_pattern::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Regex>,

    /// Ordered transform chain applied to matched assets
    pub chain: Vec<Loader>,
}

impl Rule {
    fn new(test: &str, chain: Vec<Loader>) -> Self {
        Self {
            // Patterns are compile-time constants
            test: Regex::new(test).expect("rule pattern must be valid"),
            exclude: None,
            chain,
        }
    }

    fn exclude(mut self, pattern: &str) -> Self {
        self.exclude = Some(Regex::new(pattern).expect("exclude pattern must be valid"));
        self
    }

    /// Whether this rule fires for the given path.
    pub fn matches(&self, path: &Path) -> bool {
        let normalized = path.to_string_lossy().replace('\\', "/");
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(&normalized) {
                return false;
            }
        }
        self.test.is_match(&normalized)
    }
}

/// The ordered rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
}

/// The stylesheet chain shared by the plain-CSS and preprocessor rules,
/// optionally extended with a final preprocessor stage.
pub fn style_chain(public_path: &str, extra: Option<Loader>) -> Vec<Loader> {
    let mut chain = vec![
        Loader::StyleExtract {
            public_path: public_path.to_string(),
        },
        Loader::Style,
    ];

    if let Some(extra) = extra {
        chain.push(extra);
    }

    chain
}

impl RuleTable {
    /// Build the standard rule table. Static and mode-independent.
    pub fn standard(options: &BundleOptions) -> Self {
        let rules = vec![
            Rule::new(r"\.css$", style_chain(&options.public_path, None)),
            Rule::new(r"\.(png|jpg|svg|gif)$", vec![Loader::AssetFile]),
            Rule::new(r"\.(ttf|woff|woff2|eot)$", vec![Loader::AssetFile]),
            Rule::new(r"\.xml$", vec![Loader::Xml]),
            Rule::new(r"\.csv$", vec![Loader::Csv]),
            Rule::new(
                r"\.s[ac]ss$",
                style_chain(&options.public_path, Some(Loader::SassPreprocessor)),
            ),
            Rule::new(
                r"\.m?js$",
                vec![Loader::Script(ScriptTransform {
                    target: options.target,
                    class_properties: true,
                })],
            )
            .exclude(r"node_modules"),
        ];

        Self { rules }
    }

    /// First rule that fires for the path, top-to-bottom.
    pub fn first_match(&self, path: impl AsRef<Path>) -> Option<&Rule> {
        let path = path.as_ref();
        self.rules.iter().find(|rule| rule.matches(path))
    }
}

mod serde_pattern {
    //! Serialize rule patterns as their source strings.

    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Regex, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        Regex::new(&pattern).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<Regex>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(regex) => serializer.serialize_some(regex.as_str()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Regex>, D::Error> {
            let pattern = Option::<String>::deserialize(deserializer)?;
            pattern
                .map(|p| Regex::new(&p).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
