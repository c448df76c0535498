use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Target syntax level for the script transform chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 5 (broadest compatibility, default)
    #[default]
    ES5,
    /// ECMAScript 2015 (ES6)
    ES2015,
    /// ECMAScript 2017
    ES2017,
    /// ECMAScript 2020
    ES2020,
    /// Latest ECMAScript
    ESNext,
}

/// Source map generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapOptions {
    /// No source maps
    #[default]
    None,
    /// External .map files
    External,
}

impl SourceMapOptions {
    /// Mode policy: external maps in development for debuggability, none in
    /// production.
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_development() {
            SourceMapOptions::External
        } else {
            SourceMapOptions::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_maps_follow_mode() {
        assert_eq!(
            SourceMapOptions::for_mode(Mode::Development),
            SourceMapOptions::External
        );
        assert_eq!(
            SourceMapOptions::for_mode(Mode::Production),
            SourceMapOptions::None
        );
    }
}
