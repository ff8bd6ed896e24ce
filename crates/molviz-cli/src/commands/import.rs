use crate::cli::ImportArgs;
use crate::config::{AppConfig, PartialImportConfig};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use molviz::{
    core::colors::registry::ColorRegistry,
    engine::progress::ProgressReporter,
    workflows::{self, import::ImportReport},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::{self, Write};
use tracing::{info, warn};

pub fn run(args: ImportArgs) -> Result<()> {
    let partial_config = PartialImportConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    match import(&config)? {
        Some(report) => print!("{}", render_summary(&report)?),
        None => println!(
            "Warning: no MOL2 compatible molecule found in {}",
            config.input_path.display()
        ),
    }
    Ok(())
}

/// Runs the import described by `config`. `Ok(None)` means the file holds no
/// molecule, which is reported but not treated as a failure.
fn import(config: &AppConfig) -> Result<Option<ImportReport>> {
    let palette = config
        .palette_path
        .as_deref()
        .map(|path| {
            info!("Loading color palette from {:?}", path);
            ColorRegistry::load(path)
        })
        .transpose()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the import workflow...");
    match workflows::import::run_path(
        &config.input_path,
        &config.build_config,
        palette.as_ref(),
        &mut rng,
        &reporter,
    ) {
        Ok(report) => Ok(Some(report)),
        Err(e) if !e.is_fatal() => {
            warn!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn render_summary(report: &ImportReport) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    for imported in &report.molecules {
        let molecule = &imported.molecule;
        let stats = molecule.statistics();
        write!(out, "Molecule {}: {}", imported.index + 1, molecule.name)?;
        if let Some(title) = &molecule.title {
            write!(out, " ({})", title)?;
        }
        writeln!(
            out,
            " - {} atom(s), {} bond(s)",
            stats.atom_count, stats.bond_count
        )?;
        for (symbol, count) in &stats.element_counts {
            write!(out, "  {:<3} x{:<5}", symbol, count)?;
            if let Some(color) = molecule.element_colors.get(symbol) {
                write!(out, " color {}", color)?;
            }
            writeln!(out)?;
        }
    }
    for failure in &report.failures {
        writeln!(
            out,
            "Molecule {} was not created: {}",
            failure.index + 1,
            failure.error
        )?;
    }
    writeln!(
        out,
        "✓ {} molecule(s) imported, {} failed.",
        report.molecules.len(),
        report.failures.len()
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use molviz::engine::config::BuildConfig;
    use molviz::engine::error::ImportError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    const WATER: &str = "\
@<TRIPOS>MOLECULE
water
@<TRIPOS>ATOM
1 O1 0.0 0.0 0.0
2 H1 0.0 0.0 1.0
@<TRIPOS>BOND
1 1 2 1
";

    fn app_config(input: &Path) -> AppConfig {
        AppConfig {
            input_path: input.to_path_buf(),
            build_config: BuildConfig::default(),
            seed: Some(7),
            palette_path: None,
        }
    }

    #[test]
    fn import_builds_report_for_valid_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("water.mol2");
        fs::write(&input, WATER).unwrap();

        let report = import(&app_config(&input)).unwrap().unwrap();
        assert_eq!(report.molecules.len(), 1);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn file_without_molecules_is_not_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.mol2");
        fs::write(&input, "# nothing here\n").unwrap();

        assert!(import(&app_config(&input)).unwrap().is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = import(&app_config(&PathBuf::from("/nonexistent/in.mol2")));
        assert!(matches!(
            result,
            Err(CliError::Import(ImportError::FileUnreadable { .. }))
        ));
    }

    #[test]
    fn palette_colors_reach_the_summary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("water.mol2");
        let palette = dir.path().join("palette.toml");
        fs::write(&input, WATER).unwrap();
        fs::write(
            &palette,
            "[[element]]\nsymbol = \"O\"\nrgb = [1.0, 0.0, 0.0]\n",
        )
        .unwrap();

        let config = AppConfig {
            palette_path: Some(palette),
            ..app_config(&input)
        };
        let summary = render_summary(&import(&config).unwrap().unwrap()).unwrap();
        assert!(summary.contains("O   x1     color (1.000, 0.000, 0.000)"));
    }

    #[test]
    fn summary_lists_molecules_and_failures() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("mixed.mol2");
        let broken = "@<TRIPOS>MOLECULE\nbroken\n@<TRIPOS>ATOM\n1 C 0 0 0\n@<TRIPOS>BOND\n1 1 4 1\n";
        fs::write(&input, format!("{}{}", broken, WATER)).unwrap();

        let summary = render_summary(&import(&app_config(&input)).unwrap().unwrap()).unwrap();
        assert!(summary.contains("Molecule 1 was not created"));
        assert!(summary.contains("Molecule 2: Molecule (water) - 2 atom(s), 1 bond(s)"));
        assert!(!summary.contains("Molecule 1: "));
        assert!(summary.contains("1 molecule(s) imported, 1 failed."));
    }
}
