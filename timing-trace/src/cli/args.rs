//! CLI argument definitions

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::domain::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "timing-trace",
    version,
    about = "Convert the user timing entries of a results file into a Chrome trace",
    after_help = "\
EXAMPLES:
    timing-trace results.json        Writes results.json.run-timing.trace.json"
)]
pub struct Args {
    /// Results JSON file containing `timing.entries`
    #[arg(value_name = "RESULTS")]
    pub results: Option<PathBuf>,
}

impl Args {
    /// Absolute path of the results file, resolved against `cwd`
    ///
    /// # Errors
    /// Returns [`CliError::MissingArgument`] when no path was given and
    /// [`CliError::ResultsNotFound`] when it does not exist
    pub fn results_path_in(&self, cwd: &Path) -> Result<PathBuf, CliError> {
        let results = self.results.as_ref().ok_or(CliError::MissingArgument)?;
        let path = cwd.join(results);
        if !path.exists() {
            return Err(CliError::ResultsNotFound(path));
        }
        Ok(path)
    }

    /// Same as [`Args::results_path_in`] using the process's current directory
    ///
    /// # Errors
    /// See [`Args::results_path_in`]; also fails if the current directory is unavailable
    pub fn results_path(&self) -> Result<PathBuf, CliError> {
        let cwd = std::env::current_dir()?;
        self.results_path_in(&cwd)
    }
}
