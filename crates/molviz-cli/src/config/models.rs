use molviz::engine::config::BuildConfig;
use std::path::PathBuf;

/// Fully merged settings of one `import` invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub build_config: BuildConfig,
    /// `None` draws colors from OS entropy.
    pub seed: Option<u64>,
    pub palette_path: Option<PathBuf>,
}
