use crate::cli::Cli;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileInputConfig {
    pub fasta: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileOutputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRuntimeConfig {
    pub threads: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<FileInputConfig>,
    pub output: Option<FileOutputConfig>,
    pub runtime: Option<FileRuntimeConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Where the sequence text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Direct(String),
    Fasta(PathBuf),
}

/// Effective settings after merging command line, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means ask interactively
    pub input: Option<InputSource>,
    /// `None` means print to the console (or ask, in interactive mode)
    pub output: Option<PathBuf>,
    pub threads: Option<usize>,
}

impl AppConfig {
    pub fn build(cli: &Cli) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file_config)
    }

    fn merge(cli: &Cli, file_config: FileConfig) -> Result<Self> {
        let file_input = file_config.input.unwrap_or_default();
        let file_output = file_config.output.unwrap_or_default();
        let file_runtime = file_config.runtime.unwrap_or_default();

        let input = match (&cli.sequence, &cli.fasta) {
            (Some(seq), _) => Some(InputSource::Direct(seq.clone())),
            (None, Some(path)) => Some(InputSource::Fasta(path.clone())),
            (None, None) => file_input.fasta.map(InputSource::Fasta),
        };

        let threads = cli.threads.or(file_runtime.threads);
        if threads == Some(0) {
            return Err(CliError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }

        let config = Self {
            input,
            output: cli.output.clone().or(file_output.path),
            threads,
        };
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }
}
