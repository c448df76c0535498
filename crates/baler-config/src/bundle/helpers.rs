use std::path::PathBuf;

use indexmap::IndexMap;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_context() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_entries() -> IndexMap<String, Vec<String>> {
    let mut entries = IndexMap::new();
    entries.insert("main".to_string(), vec!["./index.js".to_string()]);
    entries
}

pub(crate) fn default_filename_template() -> String {
    "[name].[contenthash].js".to_string()
}

pub(crate) fn default_static_dir() -> Option<PathBuf> {
    Some(PathBuf::from("public"))
}

pub(crate) fn default_static_subdir() -> String {
    "static".to_string()
}

pub(crate) fn default_public_path() -> String {
    String::new()
}

pub(crate) fn default_resolve_extensions() -> Vec<String> {
    vec![".js".to_string(), ".json".to_string(), ".png".to_string()]
}

pub(crate) fn default_html_template() -> PathBuf {
    PathBuf::from("index.html")
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}
