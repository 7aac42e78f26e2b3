//! The scheduled daily and monthly reporting loop.
//!
//! A single cooperative task wakes once per minute, computes the zone-local
//! wall-clock time and fires any trigger whose hour and minute (and, for
//! the monthly report, day of month) match the configuration. A per-trigger
//! "last fired minute" guard keeps every trigger idempotent within its
//! minute even if the loop wakes twice before the minute rolls over.
//!
//! Trigger effects commit against the store first; report delivery (console
//! table and file export) happens after and a failed delivery is logged for
//! the operator without being retried or rolled back. Nothing is persisted
//! across restarts; the loop lives and dies with the host process.

use crate::libs::config::{parse_trigger_time, TriggerConfig};
use crate::libs::export::Exporter;
use crate::libs::messages::Message;
use crate::libs::report::{self, FormatRows, ReportRow};
use crate::libs::store::SharedStore;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::time::Duration as StdDuration;
use tokio::time::{interval, MissedTickBehavior};

/// Trigger points evaluated on every wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    DailyReport,
    DailyReset,
    MonthlyReport,
}

/// Matches wall-clock minutes against the configured trigger times.
///
/// Separated from the I/O side of the scheduler so trigger matching can be
/// driven with arbitrary timestamps in tests.
#[derive(Debug)]
pub struct TriggerClock {
    daily_report: NaiveTime,
    daily_reset: NaiveTime,
    monthly_report: NaiveTime,
    monthly_report_day: u32,
    last_fired: HashMap<Trigger, NaiveDateTime>,
}

impl TriggerClock {
    pub fn new(config: &TriggerConfig) -> Result<Self> {
        Ok(Self {
            daily_report: parse_trigger_time(&config.daily_report)?,
            daily_reset: parse_trigger_time(&config.daily_reset)?,
            monthly_report: parse_trigger_time(&config.monthly_report)?,
            monthly_report_day: config.monthly_report_day,
            last_fired: HashMap::new(),
        })
    }

    /// Returns the triggers due at `now`, marking each as fired for this
    /// minute so a second wake within the same minute fires nothing.
    pub fn due(&mut self, now: NaiveDateTime) -> Vec<Trigger> {
        let minute = minute_of(now);
        let candidates = [
            (Trigger::DailyReport, self.daily_report, true),
            (Trigger::DailyReset, self.daily_reset, true),
            (Trigger::MonthlyReport, self.monthly_report, now.day() == self.monthly_report_day),
        ];

        let mut due = Vec::new();
        for (trigger, at, day_matches) in candidates {
            if !day_matches || now.hour() != at.hour() || now.minute() != at.minute() {
                continue;
            }
            if self.last_fired.get(&trigger) == Some(&minute) {
                continue;
            }
            self.last_fired.insert(trigger, minute);
            due.push(trigger);
        }
        due
    }
}

/// Truncates a timestamp to its wall-clock minute.
fn minute_of(now: NaiveDateTime) -> NaiveDateTime {
    now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now)
}

/// The recurring reporting task.
pub struct Scheduler {
    store: SharedStore,
    exporter: Exporter,
    tz: Tz,
    clock: TriggerClock,
}

impl Scheduler {
    pub fn new(store: SharedStore, exporter: Exporter, tz: Tz, triggers: &TriggerConfig) -> Result<Self> {
        Ok(Self {
            store,
            exporter,
            tz,
            clock: TriggerClock::new(triggers)?,
        })
    }

    /// Runs the loop until the host process exits.
    pub async fn run(mut self) {
        msg_info!(Message::SchedulerStarted(self.tz.to_string()));

        let mut ticker = interval(StdDuration::from_secs(60));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let now = Utc::now().with_timezone(&self.tz).naive_local();
            for trigger in self.clock.due(now) {
                self.fire(trigger, now);
            }
        }
    }

    /// Fires one trigger: summary delivery first, then any reset.
    fn fire(&self, trigger: Trigger, now: NaiveDateTime) {
        let rows = report::snapshot(&self.store.lock(), now);
        match trigger {
            Trigger::DailyReport => {
                msg_info!(Message::DailySummaryHeader(now.format("%B %-d, %Y").to_string()), true);
                self.deliver(&rows, now.date());
            }
            Trigger::DailyReset => {
                msg_info!(Message::DailySummaryHeader(now.format("%B %-d, %Y").to_string()), true);
                self.deliver(&rows, now.date());
                let dropped = self.store.lock().reset_all();
                msg_info!(Message::StoreCleared(dropped));
            }
            Trigger::MonthlyReport => {
                msg_info!(Message::MonthlySummaryHeader(now.format("%B %Y").to_string()), true);
                self.deliver(&rows, now.date());
            }
        }
    }

    /// Prints and exports a snapshot. Delivery failures are logged and never
    /// roll back the store mutation that produced the snapshot.
    fn deliver(&self, rows: &[ReportRow], date: NaiveDate) {
        if rows.is_empty() {
            msg_info!(Message::ReportEmpty);
        } else {
            View::attendance(&rows.to_vec().format());
        }

        match self.exporter.export(rows, date) {
            Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
            Err(e) => msg_error!(Message::DeliveryFailed(e.to_string())),
        }
    }
}
