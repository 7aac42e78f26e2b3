//! The attendance state machine and time-accounting engine.
//!
//! [`apply`] is the single mutation path for user actions. Given a user's
//! record, an action and "now", it validates the action against the current
//! status, folds the elapsed time of the closing segment into the matching
//! bucket, appends audit entries and reports a structured [`Outcome`].
//!
//! ## Transition rules
//!
//! - `work_in` opens a work segment; rejected while already clocked in.
//! - `work_out` closes whatever segment is open and moves the user off
//!   shift. If the open segment is a break or smoking segment the elapsed
//!   time folds into that activity's bucket, never into work time.
//! - `break` / `smoking` are only valid while working: they close the work
//!   segment into `total_work_time` and open the pause segment.
//! - `back` ends the open break/smoking segment and reopens a work segment.
//!
//! ## 24-hour cap
//!
//! Before any action is evaluated, a record whose `total_work_time` has
//! reached 24 hours is force-reset: counters zeroed together, status forced
//! to off shift, open segment discarded. The caller receives the cap
//! notification instead of the requested action's outcome. The cap is a
//! compliance rule, not a user action, and takes precedence over whatever
//! the user asked for.

use crate::libs::formatter::{format_duration, format_timestamp};
use crate::libs::messages::{self, Message};
use crate::libs::record::{elapsed_since, Segment, SegmentKind, Status, UserId, UserRecord};
use crate::libs::store::SharedStore;
use chrono::{Duration, NaiveDateTime};
use clap::ValueEnum;
use std::fmt;

/// Accumulated work time ceiling per accounting period, in hours.
pub const WORK_TIME_CAP_HOURS: i64 = 24;

/// A discrete attendance action issued by a user.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    WorkIn,
    WorkOut,
    Break,
    Smoking,
    Back,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Why an action was refused from the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `work_in` while a segment is already open.
    AlreadyClockedIn,
    /// `work_out` without an open shift.
    MustClockInFirst,
    /// `break`/`smoking` while not working.
    MustBeWorkingFirst(SegmentKind),
    /// `back` before ever clocking in.
    NotWorking,
    /// `back` with no open break/smoking segment.
    NoOngoingActivity,
}

/// Summary data carried by an accepted transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Ack {
    ClockedIn {
        at: NaiveDateTime,
    },
    ClockedOut {
        at: NaiveDateTime,
        total_work_time: Duration,
        break_count: u32,
        break_time: Duration,
        smoking_count: u32,
        smoking_time: Duration,
    },
    PauseStarted {
        kind: SegmentKind,
        at: NaiveDateTime,
        count: u32,
    },
    BackToWork {
        at: NaiveDateTime,
        ended: SegmentKind,
        elapsed: Duration,
        total: Duration,
        count: u32,
    },
}

/// Result of applying one action to one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(Ack),
    Rejected(Rejection),
    /// The 24-hour cap fired before the action was evaluated; the record
    /// was reset and the action itself was not processed.
    CapReset,
}

/// Applies `action` to `record` at time `now`, mutating it in place when
/// the action is accepted (and when a forced cap reset fires).
pub fn apply(record: &mut UserRecord, action: Action, now: NaiveDateTime) -> Outcome {
    if record.total_work_time >= Duration::hours(WORK_TIME_CAP_HOURS) {
        force_reset(record);
        return Outcome::CapReset;
    }

    match action {
        Action::WorkIn => work_in(record, now),
        Action::WorkOut => work_out(record, now),
        Action::Break => start_pause(record, SegmentKind::Break, now),
        Action::Smoking => start_pause(record, SegmentKind::Smoking, now),
        Action::Back => back(record, now),
    }
}

/// Forced reset on reaching the work-time cap: all counters zero atomically
/// with the status transition, the open segment (if any) is discarded.
/// The audit log is retained.
fn force_reset(record: &mut UserRecord) {
    record.status = Status::OffShift;
    record.last_segment_start = None;
    record.total_work_time = Duration::zero();
    record.break_count = 0;
    record.break_time = Duration::zero();
    record.smoking_count = 0;
    record.smoking_time = Duration::zero();
    tracing::info!(user = %record.name, "work time cap reached, record reset");
}

fn work_in(record: &mut UserRecord, now: NaiveDateTime) -> Outcome {
    match record.status {
        Status::Working | Status::OnBreak | Status::Smoking => Outcome::Rejected(Rejection::AlreadyClockedIn),
        Status::Idle | Status::OffShift => {
            record.status = Status::Working;
            record.last_segment_start = Some(now);
            record.activity_log.push(Segment::opened(SegmentKind::Work, now));
            Outcome::Accepted(Ack::ClockedIn { at: now })
        }
    }
}

fn work_out(record: &mut UserRecord, now: NaiveDateTime) -> Outcome {
    let open_kind = match record.status {
        Status::Idle | Status::OffShift => return Outcome::Rejected(Rejection::MustClockInFirst),
        Status::Working => SegmentKind::Work,
        Status::OnBreak => SegmentKind::Break,
        Status::Smoking => SegmentKind::Smoking,
    };

    // The open segment folds into the bucket matching its true kind; a
    // work_out issued mid-break never counts the break as work time.
    if let Some(start) = record.last_segment_start.take() {
        let elapsed = elapsed_since(start, now);
        add_to_bucket(record, open_kind, elapsed);
        record.activity_log.push(Segment::closed(open_kind, start, start + elapsed, elapsed));
    }

    record.status = Status::OffShift;
    Outcome::Accepted(Ack::ClockedOut {
        at: now,
        total_work_time: record.total_work_time,
        break_count: record.break_count,
        break_time: record.break_time,
        smoking_count: record.smoking_count,
        smoking_time: record.smoking_time,
    })
}

fn start_pause(record: &mut UserRecord, kind: SegmentKind, now: NaiveDateTime) -> Outcome {
    if record.status != Status::Working {
        return Outcome::Rejected(Rejection::MustBeWorkingFirst(kind));
    }

    // Close the running work segment before the pause opens.
    if let Some(start) = record.last_segment_start.take() {
        let elapsed = elapsed_since(start, now);
        record.total_work_time = record.total_work_time + elapsed;
        record.activity_log.push(Segment::closed(SegmentKind::Work, start, start + elapsed, elapsed));
    }

    let count = match kind {
        SegmentKind::Break => {
            record.break_count += 1;
            record.status = Status::OnBreak;
            record.break_count
        }
        SegmentKind::Smoking => {
            record.smoking_count += 1;
            record.status = Status::Smoking;
            record.smoking_count
        }
        SegmentKind::Work => unreachable!("work segments are opened by work_in"),
    };

    record.last_segment_start = Some(now);
    record.activity_log.push(Segment::opened(kind, now));
    Outcome::Accepted(Ack::PauseStarted { kind, at: now, count })
}

fn back(record: &mut UserRecord, now: NaiveDateTime) -> Outcome {
    let kind = match record.status {
        Status::Idle => return Outcome::Rejected(Rejection::NotWorking),
        Status::Working | Status::OffShift => return Outcome::Rejected(Rejection::NoOngoingActivity),
        Status::OnBreak => SegmentKind::Break,
        Status::Smoking => SegmentKind::Smoking,
    };

    let elapsed = match record.last_segment_start.take() {
        Some(start) => {
            let elapsed = elapsed_since(start, now);
            add_to_bucket(record, kind, elapsed);
            record.activity_log.push(Segment::closed(kind, start, start + elapsed, elapsed));
            elapsed
        }
        None => Duration::zero(),
    };

    record.status = Status::Working;
    record.last_segment_start = Some(now);
    record.activity_log.push(Segment::opened(SegmentKind::Work, now));

    let (total, count) = match kind {
        SegmentKind::Break => (record.break_time, record.break_count),
        SegmentKind::Smoking => (record.smoking_time, record.smoking_count),
        SegmentKind::Work => unreachable!("back never closes a work segment"),
    };
    Outcome::Accepted(Ack::BackToWork {
        at: now,
        ended: kind,
        elapsed,
        total,
        count,
    })
}

fn add_to_bucket(record: &mut UserRecord, kind: SegmentKind, elapsed: Duration) {
    match kind {
        SegmentKind::Work => record.total_work_time = record.total_work_time + elapsed,
        SegmentKind::Break => record.break_time = record.break_time + elapsed,
        SegmentKind::Smoking => record.smoking_time = record.smoking_time + elapsed,
    }
}

/// Transport-facing entry point: applies an action for a user and renders
/// the outcome as a deliverable message string.
///
/// The store lock is held for the whole read-modify-write sequence, so two
/// rapid actions from the same user cannot race on the open segment.
pub fn handle_action(store: &SharedStore, user_id: UserId, user_name: &str, action: Action, now: NaiveDateTime) -> String {
    let mut store = store.lock();
    let record = store.entry(user_id, user_name);
    let outcome = apply(record, action, now);
    render_outcome(record, user_id, &outcome)
}

/// Renders an [`Outcome`] through the message catalog.
pub fn render_outcome(record: &UserRecord, user_id: UserId, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Accepted(ack) => messages::success(ack_message(ack)),
        Outcome::Rejected(rejection) => messages::warning(rejection_message(record, rejection)),
        Outcome::CapReset => messages::warning(Message::WorkLimitReached {
            name: record.name.clone(),
            user_id,
        }),
    }
}

fn ack_message(ack: &Ack) -> Message {
    match ack {
        Ack::ClockedIn { at } => Message::ClockedIn(format_timestamp(at)),
        Ack::ClockedOut {
            at,
            total_work_time,
            break_count,
            break_time,
            smoking_count,
            smoking_time,
        } => Message::ClockedOut {
            at: format_timestamp(at),
            total_work_time: format_duration(total_work_time),
            break_count: *break_count,
            break_time: format_duration(break_time),
            smoking_count: *smoking_count,
            smoking_time: format_duration(smoking_time),
        },
        Ack::PauseStarted { kind, at, count } => Message::PauseStarted {
            activity: kind.title().to_string(),
            at: format_timestamp(at),
            count: *count,
        },
        Ack::BackToWork {
            at,
            ended,
            elapsed,
            total,
            count,
        } => Message::BackToWork {
            at: format_timestamp(at),
            activity: ended.label().to_string(),
            elapsed: format_duration(elapsed),
            total: format_duration(total),
            count: *count,
        },
    }
}

fn rejection_message(record: &UserRecord, rejection: &Rejection) -> Message {
    match rejection {
        Rejection::AlreadyClockedIn => Message::AlreadyClockedIn(record.name.clone()),
        Rejection::MustClockInFirst => Message::MustClockInFirst,
        Rejection::MustBeWorkingFirst(kind) => Message::MustBeWorkingFirst(kind.label().to_string()),
        Rejection::NotWorking => Message::NotWorkingYet,
        Rejection::NoOngoingActivity => Message::NoOngoingActivity,
    }
}
