use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Alessandro Casalino",
    version,
    about = "MolViz CLI - Import Tripos MOL2 files into colored atom and bond models.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import every molecule of a MOL2 file and print a summary of each.
    Import(ImportArgs),
}

/// Arguments for the `import` subcommand.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the input MOL2 file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name given to every imported molecule.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Override `import.share-colors` from the config file.
    #[command(flatten)]
    pub share_colors: ShareColors,

    /// Display radius of atom spheres.
    #[arg(long, value_name = "FLOAT")]
    pub atom_radius: Option<f64>,

    /// Display radius of bond cylinders.
    #[arg(long, value_name = "FLOAT")]
    pub bond_radius: Option<f64>,

    /// Seed for element colors, for reproducible output.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// TOML palette whose colors take precedence for matching elements.
    #[arg(short, long, value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S geometry.atom-radius=0.3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// A group to handle mutually exclusive boolean flags for color sharing.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct ShareColors {
    /// Reuse element colors of molecules imported earlier in the same file.
    #[arg(long)]
    pub share_colors: bool,
    /// Give every molecule its own element colors.
    #[arg(long)]
    pub no_share_colors: bool,
}
