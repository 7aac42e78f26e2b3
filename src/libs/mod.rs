//! Core library modules for the punch application.
//!
//! Serves as the main entry point for all punch library components.
//!
//! ## Features
//!
//! - **Core Engine**: attendance state machine, in-memory store, report
//!   aggregation
//! - **Scheduling**: zone-local daily and monthly report triggers
//! - **User Interface**: console rendering, data export, formatting
//! - **Infrastructure**: configuration, data paths, messaging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::libs::store::AttendanceStore;
//! use punch::libs::tracker::{handle_action, Action};
//! use chrono::Local;
//!
//! let store = AttendanceStore::shared();
//! let reply = handle_action(&store, 42, "Aye Chan", Action::WorkIn, Local::now().naive_local());
//! println!("{}", reply);
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod record;
pub mod report;
pub mod scheduler;
pub mod store;
pub mod tracker;
pub mod view;
