//! Development server settings.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Hot reload; defaults from the mode via [`DevServerOptions::for_mode`]
    #[serde(default)]
    pub hot: bool,

    /// Open the browser on server start
    #[serde(default)]
    pub open: bool,
}

impl DevServerOptions {
    /// Settings derived from the mode: hot reload is a development feature
    /// and stays off in production, where a dev server should not run.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            hot: mode.is_development(),
            open: false,
        }
    }

    /// Re-derive the hot flag from the mode, keeping explicit host/port.
    pub fn resolve(mut self, mode: Mode) -> Self {
        self.hot = mode.is_development();
        self
    }
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            hot: false,
            open: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    4200
}
