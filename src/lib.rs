//! # Punch - Chat Attendance Tracker Core
//!
//! The attendance state machine and time-accounting engine behind a
//! clock-in/clock-out chat bot.
//!
//! ## Features
//!
//! - **Activity Tracking**: Clock in/out, breaks and smoking breaks with
//!   per-user running totals
//! - **Ordering Rules**: Every action is validated against the user's
//!   current status
//! - **24-Hour Cap**: Accumulated work time is force-reset at 24 hours
//! - **Report Generation**: On-demand and scheduled attendance snapshots
//! - **Data Export**: CSV, JSON and Excel report files keyed by date
//! - **Scheduling**: Zone-local daily and monthly report triggers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
