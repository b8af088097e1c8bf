// Configuration read from the environment at start-up.

use crate::router::{Route, RouteError};
use crate::style::Palette;
use std::path::PathBuf;
use thiserror::Error;

pub const START_DIR_VAR: &str = "PDF_TOC_START_DIR";
pub const ROUTE_VAR: &str = "PDF_TOC_ROUTE";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PDF_TOC_ROUTE: {0}")]
    Route(#[from] RouteError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the browse dialog opens in.
    pub start_dir: PathBuf,
    /// Screen shown first.
    pub initial_route: Route,
    pub palette: Palette,
}

impl Config {
    /// Build the configuration from `PDF_TOC_START_DIR`, `PDF_TOC_ROUTE`
    /// and `NO_COLOR`. The start directory falls back to the home
    /// directory, then to `.`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let start_dir = lookup(START_DIR_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let initial_route = match lookup(ROUTE_VAR).filter(|v| !v.is_empty()) {
            Some(path) => Route::from_path(&path)?,
            None => Route::Upload,
        };
        let palette = match lookup(NO_COLOR_VAR) {
            Some(v) if !v.is_empty() => Palette::Plain,
            _ => Palette::Color,
        };
        Ok(Config {
            start_dir,
            initial_route,
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.initial_route, Route::Upload);
        assert_eq!(cfg.palette, Palette::Color);
        let expected = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        assert_eq!(cfg.start_dir, expected);
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            (START_DIR_VAR, "/srv/books"),
            (ROUTE_VAR, "/toc"),
            (NO_COLOR_VAR, "1"),
        ])
        .unwrap();
        assert_eq!(cfg.start_dir, PathBuf::from("/srv/books"));
        assert_eq!(cfg.initial_route, Route::Contents);
        assert_eq!(cfg.palette, Palette::Plain);
    }

    #[test]
    fn empty_no_color_keeps_colour() {
        assert_eq!(config(&[(NO_COLOR_VAR, "")]).unwrap().palette, Palette::Color);
    }

    #[test]
    fn unknown_route_is_an_error() {
        let err = config(&[(ROUTE_VAR, "/chapters")]).unwrap_err();
        assert!(matches!(err, ConfigError::Route(RouteError::Unknown(p)) if p == "/chapters"));
    }
}
