mod defaults;
mod models;

pub use defaults::DefaultsConfig;
pub use models::AppConfig;

use crate::cli::{ImportArgs, ShareColors};
use crate::error::{CliError, Result};
use molviz::engine::config::BuildConfigBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialImportSection {
    name: Option<String>,
    #[serde(rename = "share-colors")]
    share_colors: Option<bool>,
    seed: Option<u64>,
    palette: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGeometrySection {
    #[serde(rename = "atom-radius")]
    atom_radius: Option<f64>,
    #[serde(rename = "bond-radius")]
    bond_radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialImportConfig {
    import: Option<PartialImportSection>,
    geometry: Option<PartialGeometrySection>,
}

impl PartialImportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the config file when one was given, or starts from an empty one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &ImportArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let import = self.import.take().unwrap_or_default();
        let geometry = self.geometry.take().unwrap_or_default();

        let name = args
            .name
            .clone()
            .or(import.name)
            .unwrap_or(defaults.name);

        let build_config = BuildConfigBuilder::new()
            .molecule_name(Some(name))
            .share_colors(Self::merge_share_colors(
                args.share_colors,
                import.share_colors,
                defaults.share_colors,
            ))
            .atom_radius(
                args.atom_radius
                    .or(geometry.atom_radius)
                    .unwrap_or(defaults.atom_radius),
            )
            .bond_radius(
                args.bond_radius
                    .or(geometry.bond_radius)
                    .unwrap_or(defaults.bond_radius),
            )
            .build()?;

        Ok(AppConfig {
            input_path: args.input.clone(),
            build_config,
            seed: args.seed.or(import.seed),
            palette_path: args.palette.clone().or(import.palette),
        })
    }

    fn merge_share_colors(cli_flags: ShareColors, file_val: Option<bool>, default: bool) -> bool {
        if cli_flags.share_colors {
            true
        } else if cli_flags.no_share_colors {
            false
        } else {
            file_val.unwrap_or(default)
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "import.name" => {
                    self.import.get_or_insert_with(Default::default).name =
                        Some(value_str.to_string());
                }
                "import.share-colors" => {
                    self.import.get_or_insert_with(Default::default).share_colors =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid boolean value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "import.seed" => {
                    self.import.get_or_insert_with(Default::default).seed =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "geometry.atom-radius" => {
                    self.geometry.get_or_insert_with(Default::default).atom_radius =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid float value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "geometry.bond-radius" => {
                    self.geometry.get_or_insert_with(Default::default).bond_radius =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid float value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("molviz.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn import_args(extra: &[&str]) -> ImportArgs {
        let mut args = vec!["molviz", "import", "-i", "in.mol2"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Import(args) => args,
        }
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let config = PartialImportConfig::load(None)
            .unwrap()
            .merge_with_cli(&import_args(&[]))
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.mol2"));
        assert_eq!(config.build_config.name(), "Molecule");
        assert!(config.build_config.share_colors);
        assert_eq!(config.build_config.atom_radius, 0.2);
        assert_eq!(config.build_config.bond_radius, 0.08);
        assert_eq!(config.seed, None);
        assert_eq!(config.palette_path, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
        [import]
        name = "Caffeine"
        share-colors = false
        seed = 42
        palette = "palette.toml"

        [geometry]
        atom-radius = 0.3
        "#,
        );

        let config = PartialImportConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&import_args(&[]))
            .unwrap();

        assert_eq!(config.build_config.name(), "Caffeine");
        assert!(!config.build_config.share_colors);
        assert_eq!(config.build_config.atom_radius, 0.3);
        assert_eq!(config.build_config.bond_radius, 0.08);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.palette_path, Some(PathBuf::from("palette.toml")));
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
        [import]
        name = "Caffeine"
        share-colors = false

        [geometry]
        bond-radius = 0.1
        "#,
        );

        let args = import_args(&["--name", "Water", "--share-colors", "--bond-radius", "0.05"]);
        let config = PartialImportConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.build_config.name(), "Water");
        assert!(config.build_config.share_colors);
        assert_eq!(config.build_config.bond_radius, 0.05);
    }

    #[test]
    fn set_values_override_file_but_not_cli() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
        [import]
        seed = 1

        [geometry]
        atom-radius = 0.3
        "#,
        );

        let args = import_args(&[
            "-S",
            "geometry.atom-radius=0.4",
            "-S",
            "import.seed=9",
            "-S",
            "import.share-colors=false",
            "--seed",
            "5",
        ]);
        let config = PartialImportConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.build_config.atom_radius, 0.4);
        assert!(!config.build_config.share_colors);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let result =
            PartialImportConfig::default().merge_with_cli(&import_args(&["-S", "render.quality=3"]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("render.quality")));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let result =
            PartialImportConfig::default().merge_with_cli(&import_args(&["-S", "import.seed"]));
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = PartialImportConfig::default()
            .merge_with_cli(&import_args(&["-S", "geometry.bond-radius=thin"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let result =
            PartialImportConfig::default().merge_with_cli(&import_args(&["--atom-radius", "0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[import]\ncolour = true\n");
        let result = PartialImportConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
