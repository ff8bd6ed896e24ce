use molviz::core::models::molecule::DEFAULT_MOLECULE_NAME;
use molviz::engine::config::{DEFAULT_ATOM_RADIUS, DEFAULT_BOND_RADIUS};

/// Values used when neither the command line nor the config file sets them.
pub struct DefaultsConfig {
    pub name: String,
    pub share_colors: bool,
    pub atom_radius: f64,
    pub bond_radius: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MOLECULE_NAME.to_string(),
            share_colors: true,
            atom_radius: DEFAULT_ATOM_RADIUS,
            bond_radius: DEFAULT_BOND_RADIUS,
        }
    }
}
