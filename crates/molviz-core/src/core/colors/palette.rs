use super::registry::ColorRegistry;
use crate::core::models::color::Color;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    element: Vec<PaletteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteEntry {
    symbol: String,
    rgb: [f64; 3],
}

#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Color for element '{symbol}' has channels outside [0, 1]: {rgb:?}")]
    InvalidColor { symbol: String, rgb: [f64; 3] },
    #[error("Element '{0}' is listed more than once in the palette")]
    DuplicateSymbol(String),
}

impl ColorRegistry {
    /// Loads a registry from a TOML palette file.
    ///
    /// The file lists `[[element]]` tables with a `symbol` and an `rgb` triple.
    /// Entry order in the file becomes the registry order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid palette,
    /// repeats a symbol, or holds a channel outside `[0, 1]`.
    pub fn load(path: &Path) -> Result<Self, PaletteLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PaletteLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_palette_str(&content, &path.to_string_lossy())
    }

    pub fn from_palette_str(content: &str, origin: &str) -> Result<Self, PaletteLoadError> {
        let file: PaletteFile = toml::from_str(content).map_err(|e| PaletteLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut registry = ColorRegistry::new();
        for entry in file.element {
            let [r, g, b] = entry.rgb;
            let color = Color::rgb(r, g, b);
            if !color.is_valid() {
                return Err(PaletteLoadError::InvalidColor {
                    symbol: entry.symbol,
                    rgb: entry.rgb,
                });
            }
            if !registry.insert(&entry.symbol, color) {
                return Err(PaletteLoadError::DuplicateSymbol(entry.symbol));
            }
        }
        debug!(
            "Loaded palette '{}' with {} element color(s).",
            origin,
            registry.len()
        );
        Ok(registry)
    }
}
