//! Report aggregation over the attendance store.

use crate::libs::formatter::format_duration;
use crate::libs::record::{elapsed_since, Status, UserId};
use crate::libs::store::AttendanceStore;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the attendance snapshot, in raw form.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub name: String,
    pub user_id: UserId,
    /// Accumulated work time plus the live open work segment, if any.
    pub work_time: Duration,
    pub break_count: u32,
    pub break_time: Duration,
    pub smoking_count: u32,
    pub smoking_time: Duration,
}

/// A snapshot row with durations pre-formatted for display and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedRow {
    pub name: String,
    pub user_id: UserId,
    pub work_time: String,
    pub break_count: u32,
    pub break_time: String,
    pub smoking_count: u32,
    pub smoking_time: String,
}

/// Computes one row per known user, in first-seen order.
///
/// Effective work time counts an open WORK segment live; open break or
/// smoking segments are not added to work time (their elapsed time is
/// settled when the segment closes).
pub fn snapshot(store: &AttendanceStore, now: NaiveDateTime) -> Vec<ReportRow> {
    store
        .iter()
        .map(|(user_id, record)| {
            let mut work_time = record.total_work_time;
            if record.status == Status::Working {
                if let Some(start) = record.last_segment_start {
                    work_time = work_time + elapsed_since(start, now);
                }
            }
            ReportRow {
                name: record.name.clone(),
                user_id,
                work_time,
                break_count: record.break_count,
                break_time: record.break_time,
                smoking_count: record.smoking_count,
                smoking_time: record.smoking_time,
            }
        })
        .collect()
}

/// A trait for formatting a collection of snapshot rows.
pub trait FormatRows {
    /// Renders all durations through the duration formatter.
    fn format(&self) -> Vec<FormattedRow>;
}

impl FormatRows for Vec<ReportRow> {
    fn format(&self) -> Vec<FormattedRow> {
        self.iter()
            .map(|row| FormattedRow {
                name: row.name.clone(),
                user_id: row.user_id,
                work_time: format_duration(&row.work_time),
                break_count: row.break_count,
                break_time: format_duration(&row.break_time),
                smoking_count: row.smoking_count,
                smoking_time: format_duration(&row.smoking_time),
            })
            .collect()
    }
}
