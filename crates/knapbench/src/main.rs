//! knapbench: time exhaustive, backtracking, dynamic programming and greedy
//! knapsack solvers on generated items.

mod menu;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use knapbench_benchmark::Harness;
use knapbench_config::HarnessConfig;

use crate::menu::Menu;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "knapbench.toml";

#[derive(Parser, Debug)]
#[command(name = "knapbench", version, about)]
struct Cli {
    /// Harness config file (TOML, or YAML by .yaml/.yml extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible item sets
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory receiving the CSV files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl Cli {
    fn harness_config(&self) -> Result<HarnessConfig, knapbench_config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.harness_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("knapbench: {e}");
            return ExitCode::from(2);
        }
    };

    knapbench_console::init();

    let harness = Harness::from_config(config);
    let mut menu = Menu::new(harness, io::stdin().lock(), io::stdout());
    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("knapbench: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["knapbench", "--seed", "5", "--output-dir", "out"]);
        let config = cli.harness_config().unwrap();
        assert_eq!(config.random_seed, Some(5));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let cli = Cli::parse_from(["knapbench", "--config", "missing/knapbench.toml"]);
        assert!(cli.harness_config().is_err());
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.yaml");
        std::fs::write(&path, "preview_limit: 4\nrandom_seed: 1\n").unwrap();

        let args: Vec<std::ffi::OsString> = vec![
            "knapbench".into(),
            "--config".into(),
            path.into_os_string(),
            "--seed".into(),
            "2".into(),
        ];
        let cli = Cli::parse_from(args);
        let config = cli.harness_config().unwrap();
        assert_eq!(config.preview_limit, 4);
        assert_eq!(config.random_seed, Some(2));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
