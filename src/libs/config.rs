//! Configuration management for the attendance tracker.
//!
//! Settings live in a JSON file in the platform data directory: the
//! timezone report triggers are evaluated in, the trigger points
//! themselves, and optional export preferences. Every section is optional
//! in the file; missing sections fall back to defaults so a fresh install
//! runs without any setup.
//!
//! ## Configuration Structure
//!
//! - **timezone**: IANA zone name the scheduler's wall clock runs in
//! - **triggers**: daily report / daily reset times and the monthly report
//!   day and time
//! - **export**: output format and directory for report files
//!
//! An interactive wizard ([`Config::init`]) guides first-time setup.

use crate::libs::data_storage::DataStorage;
use crate::libs::export::ExportFormat;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveTime;
use chrono_tz::Tz;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name within the platform data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default timezone for trigger evaluation.
pub const DEFAULT_TIMEZONE: &str = "Asia/Yangon";

/// Wall-clock trigger points for the scheduled reporting loop.
///
/// Times are `"HH:MM"` strings in the configured timezone. The monthly
/// report day is configuration rather than a fixed rule.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TriggerConfig {
    /// Time of the daily summary report.
    pub daily_report: String,
    /// Time of the daily reset sweep (summary is sent first, then the
    /// store is cleared).
    pub daily_reset: String,
    /// Time of the monthly summary report.
    pub monthly_report: String,
    /// Day of month (1-31) the monthly report fires on.
    pub monthly_report_day: u32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            daily_report: "18:00".to_string(),
            daily_reset: "00:00".to_string(),
            monthly_report: "18:00".to_string(),
            monthly_report_day: 15,
        }
    }
}

/// Export preferences for scheduled and on-demand reports.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Output directory; the platform data directory when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// IANA timezone name, e.g. "Asia/Yangon".
    pub timezone: String,

    /// Scheduled report trigger points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<TriggerConfig>,

    /// Export format and destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            triggers: None,
            export: None,
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the file
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path)?;
        let config = serde_json::from_reader(file).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Persists the configuration to the platform data directory.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let timezone: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTimezone.to_string())
            .default(current.timezone.clone())
            .validate_with(|input: &String| input.parse::<Tz>().map(|_| ()).map_err(|_| Message::InvalidTimezone(input.clone()).to_string()))
            .interact_text()?;

        let triggers = current.triggers.unwrap_or_default();
        let daily_report = prompt_trigger_time(&theme, Message::PromptDailyReportTime, &triggers.daily_report)?;
        let daily_reset = prompt_trigger_time(&theme, Message::PromptDailyResetTime, &triggers.daily_reset)?;
        let monthly_report = prompt_trigger_time(&theme, Message::PromptMonthlyReportTime, &triggers.monthly_report)?;
        let monthly_report_day: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptMonthlyReportDay.to_string())
            .default(triggers.monthly_report_day)
            .validate_with(|input: &u32| {
                if (1..=31).contains(input) {
                    Ok(())
                } else {
                    Err(Message::InvalidDayOfMonth.to_string())
                }
            })
            .interact_text()?;

        let formats = ["csv", "json", "excel"];
        let format_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptExportFormat.to_string())
            .items(&formats)
            .default(0)
            .interact()?;
        let format = match format_index {
            1 => ExportFormat::Json,
            2 => ExportFormat::Excel,
            _ => ExportFormat::Csv,
        };

        Ok(Self {
            timezone,
            triggers: Some(TriggerConfig {
                daily_report,
                daily_reset,
                monthly_report,
                monthly_report_day,
            }),
            export: Some(ExportConfig { format, output_dir: None }),
        })
    }

    /// Parses the configured timezone name.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| msg_error_anyhow!(Message::InvalidTimezone(self.timezone.clone())))
    }
}

/// Parses a `"HH:MM"` trigger time.
pub fn parse_trigger_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTriggerTime(value.to_string())))
}

fn prompt_trigger_time(theme: &ColorfulTheme, prompt: Message, current: &str) -> Result<String> {
    Ok(Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .default(current.to_string())
        .validate_with(|input: &String| parse_trigger_time(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?)
}
