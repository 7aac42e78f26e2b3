//! Display implementation for application messages.
//!
//! The single source of user-facing text: every `Message` variant is
//! rendered here, so the wording of action confirmations, rejections and
//! scheduler output lives in one place. Formatting of the data that
//! populates the text (durations, timestamps) happens before the message
//! is constructed.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ACTION OUTCOME MESSAGES ===
            Message::ClockedIn(at) => format!("Work In success at {}", at),
            Message::AlreadyClockedIn(name) => format!("{}, you are already clocked in!", name),
            Message::MustClockInFirst => "You must clock-in with Work In first.".to_string(),
            Message::ClockedOut {
                at,
                total_work_time,
                break_count,
                break_time,
                smoking_count,
                smoking_time,
            } => {
                format!(
                    "Work Out success at {}\nTotal Work Today: {}\nBreaks: {} → {}\nSmoking: {} → {}",
                    at, total_work_time, break_count, break_time, smoking_count, smoking_time
                )
            }
            Message::PauseStarted { activity, at, count } => {
                format!("{} started at {} (#{} today)\nRemember to press Back when you return.", activity, at, count)
            }
            Message::MustBeWorkingFirst(activity) => format!("You must be working before starting a {}.", activity),
            Message::BackToWork {
                at,
                activity,
                elapsed,
                total,
                count,
            } => {
                format!(
                    "Back to work at {}\nThis {} took {}\nTotal {} time today: {} ({} today)",
                    at, activity, elapsed, activity, total, count
                )
            }
            Message::NotWorkingYet => "You have not started working yet. Clock in with Work In first.".to_string(),
            Message::NoOngoingActivity => "No ongoing break or smoking activity.".to_string(),
            Message::WorkLimitReached { name, user_id } => {
                format!(
                    "User: {}\nUser ID: {}\nYou already worked 24 hours today!\nPlease take a break and rest. Your work time is reset for tomorrow.",
                    name, user_id
                )
            }

            // === REPORT MESSAGES ===
            Message::DailySummaryHeader(date) => format!("Attendance summary for {}", date),
            Message::MonthlySummaryHeader(month) => format!("Monthly attendance summary for {}", month),
            Message::ReportEmpty => "No attendance records yet.".to_string(),
            Message::ExportCompleted(path) => format!("Attendance report exported: {}", path),
            Message::DeliveryFailed(error) => format!("Failed to deliver report: {}", error),

            // === SCHEDULER MESSAGES ===
            Message::SchedulerStarted(timezone) => format!("Report scheduler is running ({})", timezone),
            Message::StoreCleared(count) => format!("Attendance store cleared ({} records dropped)", count),

            // === SERVE MESSAGES ===
            Message::ServeStarted => "Attendance console ready. Type 'help' for commands.".to_string(),
            Message::ServeHelp => concat!(
                "Commands:\n",
                "  <user_id> <action> [name]  apply an action (work-in, work-out, break, smoking, back)\n",
                "  report                     print and export the current snapshot\n",
                "  reset                      clear the attendance store\n",
                "  quit                       exit"
            )
            .to_string(),
            Message::UnknownCommand(line) => format!("Unknown command: {}", line),
            Message::InvalidUserId(value) => format!("Invalid user id: {}", value),
            Message::UnknownAction(value) => {
                format!("Unknown action: {} (expected work-in, work-out, break, smoking or back)", value)
            }
            Message::ServeReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::ServeReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::ServeReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::ServeCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::ServeSignalHandlingNotSupported => "Warning: Signal handling not supported on this platform".to_string(),
            Message::ServeShuttingDown => "Shutting down attendance host...".to_string(),
            Message::HostError(error) => format!("Attendance host error: {}", error),
            Message::HostTaskPanicked(error) => format!("Attendance host task panicked: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigDeleted => "Configuration removed.".to_string(),
            Message::InvalidTimezone(timezone) => format!("Unknown timezone: {}", timezone),
            Message::InvalidTriggerTime(value) => format!("Invalid trigger time '{}', expected HH:MM", value),
            Message::InvalidDayOfMonth => "Day of month must be between 1 and 31".to_string(),

            // === PROMPTS ===
            Message::PromptTimezone => "Timezone for scheduled reports".to_string(),
            Message::PromptDailyReportTime => "Daily report time (HH:MM)".to_string(),
            Message::PromptDailyResetTime => "Daily reset time (HH:MM)".to_string(),
            Message::PromptMonthlyReportTime => "Monthly report time (HH:MM)".to_string(),
            Message::PromptMonthlyReportDay => "Monthly report day (1-31)".to_string(),
            Message::PromptExportFormat => "Export format".to_string(),
        };

        write!(f, "{}", text)
    }
}
