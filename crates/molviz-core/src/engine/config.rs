use crate::core::models::molecule::DEFAULT_MOLECULE_NAME;
use thiserror::Error;

pub const DEFAULT_ATOM_RADIUS: f64 = 0.2;
pub const DEFAULT_BOND_RADIUS: f64 = 0.08;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Seed each molecule's color registry from the molecules built before it.
    pub share_colors: bool,
    pub atom_radius: f64,
    pub bond_radius: f64,
    pub molecule_name: Option<String>,
}

impl BuildConfig {
    /// The name given to built molecules; falls back to the generic name when
    /// none (or an empty one) was configured.
    pub fn name(&self) -> &str {
        self.molecule_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_MOLECULE_NAME)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            share_colors: true,
            atom_radius: DEFAULT_ATOM_RADIUS,
            bond_radius: DEFAULT_BOND_RADIUS,
            molecule_name: None,
        }
    }
}

#[derive(Default)]
pub struct BuildConfigBuilder {
    share_colors: Option<bool>,
    atom_radius: Option<f64>,
    bond_radius: Option<f64>,
    molecule_name: Option<String>,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn share_colors(mut self, share: bool) -> Self {
        self.share_colors = Some(share);
        self
    }
    pub fn atom_radius(mut self, radius: f64) -> Self {
        self.atom_radius = Some(radius);
        self
    }
    pub fn bond_radius(mut self, radius: f64) -> Self {
        self.bond_radius = Some(radius);
        self
    }
    pub fn molecule_name(mut self, name: Option<String>) -> Self {
        self.molecule_name = name;
        self
    }

    pub fn build(self) -> Result<BuildConfig, ConfigError> {
        let atom_radius = validate_radius(
            "atom_radius",
            self.atom_radius
                .ok_or(ConfigError::MissingParameter("atom_radius"))?,
        )?;
        let bond_radius = validate_radius(
            "bond_radius",
            self.bond_radius
                .ok_or(ConfigError::MissingParameter("bond_radius"))?,
        )?;
        Ok(BuildConfig {
            share_colors: self
                .share_colors
                .ok_or(ConfigError::MissingParameter("share_colors"))?,
            atom_radius,
            bond_radius,
            molecule_name: self.molecule_name,
        })
    }
}

fn validate_radius(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("expected a positive finite radius, got {}", value),
        })
    }
}
