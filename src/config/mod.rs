//! Configuration for a study run.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, StudyError};

/// Default member table file name
pub const DEFAULT_MEMBER_FILE: &str = "DE1_0_2009_Beneficiary_Summary_File_Sample_20.csv";
/// Default outpatient claims file name
pub const DEFAULT_CLAIMS_FILE: &str = "DE1_0_2008_to_2010_Outpatient_Claims_Sample_20.csv";

/// Configuration for the study pipeline
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Directory holding the input tables
    pub data_dir: PathBuf,
    /// Directory the reports are written to
    pub output_dir: PathBuf,
    /// File name of the member table inside `data_dir`
    pub member_file: String,
    /// File name of the claims table inside `data_dir`
    pub claims_file: String,
    /// Year ages are computed against
    pub reference_year: i32,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("results"),
            member_file: DEFAULT_MEMBER_FILE.to_string(),
            claims_file: DEFAULT_CLAIMS_FILE.to_string(),
            reference_year: 2008,
        }
    }
}

impl fmt::Display for StudyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Study Configuration:")?;
        writeln!(f, "  Data Directory: {}", self.data_dir.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Member File: {}", self.member_file)?;
        writeln!(f, "  Claims File: {}", self.claims_file)?;
        writeln!(f, "  Reference Year: {}", self.reference_year)?;
        Ok(())
    }
}

impl StudyConfig {
    /// Build a configuration from positional command line arguments:
    /// optional data directory followed by optional output directory.
    #[must_use]
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(data_dir) = args.next() {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Some(output_dir) = args.next() {
            config.output_dir = PathBuf::from(output_dir);
        }
        config
    }

    /// Full path of the member table
    #[must_use]
    pub fn member_path(&self) -> PathBuf {
        self.data_dir.join(&self.member_file)
    }

    /// Full path of the claims table
    #[must_use]
    pub fn claims_path(&self) -> PathBuf {
        self.data_dir.join(&self.claims_file)
    }

    /// Fail fast when an input file is missing or not a regular file.
    /// Runs before any computation so a bad setup never produces a
    /// partial run.
    pub fn validate(&self) -> Result<()> {
        for path in [self.member_path(), self.claims_path()] {
            validate_input_file(&path)?;
        }
        Ok(())
    }
}

/// Validate that a path exists and is a regular file
fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() || !path.is_file() {
        log::error!("Input file not found: {}", path.display());
        return Err(StudyError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}
