use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        services::DEFAULT_THRESHOLD_DAYS,
        utils::{ensure_dir, write_atomic, PathResolver},
    },
    domain::category::{default_category_templates, BudgetCategory, CategoryTemplate},
    errors::{PocketError, Result},
    utils::format_amount,
};

const DEFAULT_SCAN_INTERVAL_SECS: u64 = 3600;

/// Caller-side settings. The core never reads these itself; they are passed in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub currency_symbol: String,
    /// Days-before-due window handed to the reminder scan.
    pub reminder_threshold_days: i64,
    /// How often the caller's scheduler runs the reminder scan.
    pub reminder_scan_interval_secs: u64,
    #[serde(default = "Config::default_categories")]
    pub default_categories: Vec<CategoryTemplate>,
}

impl Config {
    fn default_categories() -> Vec<CategoryTemplate> {
        default_category_templates().to_vec()
    }

    /// Allocates every default category with a zero limit, ready for the caller to fill in.
    pub fn category_skeleton(&self) -> Vec<BudgetCategory> {
        self.default_categories
            .iter()
            .map(|template| template.allocate(Decimal::ZERO))
            .collect()
    }

    pub fn format_amount(&self, amount: Decimal) -> String {
        format_amount(&self.currency_symbol, amount)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "৳".into(),
            reminder_threshold_days: DEFAULT_THRESHOLD_DAYS,
            reminder_scan_interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
            default_categories: Self::default_categories(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Reads the config file, falling back to defaults when it does not exist yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            PocketError::ConfigError(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
