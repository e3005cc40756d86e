use crate::core::payroll::PayPolicy;
use crate::core::view::SortKey;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Sort applied to list views when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortKey,
    /// Divisor turning a monthly salary into an hourly rate.
    #[serde(default = "default_monthly_hours")]
    pub standard_monthly_hours: f64,
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// How many tasks the dashboard lists under "Upcoming deadlines".
    #[serde(default = "default_upcoming_deadlines")]
    pub upcoming_deadlines: usize,
    /// Print the running timer every second inside `shell`.
    #[serde(default)]
    pub live_timer: bool,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_monthly_hours() -> f64 {
    PayPolicy::STANDARD_MONTHLY_HOURS
}
fn default_overtime_multiplier() -> f64 {
    PayPolicy::OVERTIME_MULTIPLIER
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_upcoming_deadlines() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator_char: default_separator_char(),
            default_sort: SortKey::default(),
            standard_monthly_hours: default_monthly_hours(),
            overtime_multiplier: default_overtime_multiplier(),
            currency_symbol: default_currency_symbol(),
            upcoming_deadlines: default_upcoming_deadlines(),
            live_timer: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.pmdash`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pmdash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pmdash.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.standard_monthly_hours.is_finite() && self.standard_monthly_hours > 0.0) {
            return Err(AppError::Config(format!(
                "standard_monthly_hours must be a positive number (got {})",
                self.standard_monthly_hours
            )));
        }
        if !(self.overtime_multiplier.is_finite() && self.overtime_multiplier >= 0.0) {
            return Err(AppError::Config(format!(
                "overtime_multiplier must be a non-negative number (got {})",
                self.overtime_multiplier
            )));
        }
        Ok(())
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn pay_policy(&self) -> PayPolicy {
        PayPolicy {
            monthly_hours: self.standard_monthly_hours,
            overtime_multiplier: self.overtime_multiplier,
        }
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}
