//! Mode-gated output optimization policy.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Chunk-splitting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSplit {
    /// Split everything sharable across entry points
    #[default]
    All,
    /// No shared chunks
    None,
}

/// A minimization pass applied to the final output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Minimizer {
    /// Stylesheet minimizer
    CssOptimizer,
    /// Script minifier
    ScriptMinifier,
}

/// Output optimization settings derived from the build mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    pub split_chunks: ChunkSplit,

    /// Ordered minimization passes; empty in development for faster
    /// iteration and debuggable output
    pub minimizers: Vec<Minimizer>,
}

impl Optimization {
    /// Pure function of the mode: chunks are always split, minimizers run
    /// only in production (stylesheets first, then scripts).
    pub fn for_mode(mode: Mode) -> Self {
        let minimizers = if mode.is_production() {
            vec![Minimizer::CssOptimizer, Minimizer::ScriptMinifier]
        } else {
            Vec::new()
        };

        Self {
            split_chunks: ChunkSplit::All,
            minimizers,
        }
    }
}
