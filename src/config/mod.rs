pub mod cli;
pub mod site;

use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use site::SiteConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "leadpages")]
#[command(about = "A small generator for static landing pages")]
pub struct CliConfig {
    #[arg(long, default_value = "data/leads.csv")]
    pub input: String,

    #[arg(long, default_value = "data/generated.json")]
    pub ledger: String,

    #[arg(long, default_value = "pages")]
    pub output_dir: String,

    #[arg(long, default_value = "40")]
    pub batch_size: usize,

    #[arg(long, help = "Optional TOML file with site-wide settings")]
    pub site_config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable resource monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Folds the optional site config file into the flat settings the
    /// pipeline runs on. Without `--site-config` the defaults apply.
    pub fn resolve(&self) -> Result<RunConfig> {
        let site = match &self.site_config {
            Some(path) => {
                let site = SiteConfig::from_file(path)?;
                site.validate()?;
                site
            }
            None => SiteConfig::default(),
        };

        Ok(RunConfig {
            input: self.input.clone(),
            ledger: self.ledger.clone(),
            output_dir: self.output_dir.clone(),
            batch_size: self.batch_size,
            contact_email: site.contact_email,
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("ledger", &self.ledger)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_positive_number("batch_size", self.batch_size, 1)?;
        Ok(())
    }
}

/// Fully resolved settings handed to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub input: String,
    pub ledger: String,
    pub output_dir: String,
    pub batch_size: usize,
    pub contact_email: String,
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn ledger_path(&self) -> &str {
        &self.ledger
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn contact_email(&self) -> &str {
        &self.contact_email
    }
}
