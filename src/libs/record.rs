//! Per-user attendance state and the append-only activity log.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Opaque user identifier supplied by the transport layer.
pub type UserId = i64;

/// Activity status of a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Never clocked in during the current accounting period.
    #[default]
    Idle,
    /// Clocked in with an open work segment.
    Working,
    /// On a break with an open break segment.
    OnBreak,
    /// On a smoking break with an open smoking segment.
    Smoking,
    /// Clocked out; no open segment.
    OffShift,
}

/// Kind of a logged time segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Work,
    Break,
    Smoking,
}

impl SegmentKind {
    /// Lower-case label used inside user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Work => "work",
            SegmentKind::Break => "break",
            SegmentKind::Smoking => "smoking break",
        }
    }

    /// Capitalized label used at the start of user-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            SegmentKind::Work => "Work",
            SegmentKind::Break => "Break",
            SegmentKind::Smoking => "Smoking break",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry in the activity audit log.
///
/// Segments are appended twice over their lifetime: once when opened
/// (no end, no duration) and once when closed. Closed entries always
/// satisfy `end >= start`.
#[derive(Debug, Clone)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub duration: Option<Duration>,
}

impl Segment {
    pub fn opened(kind: SegmentKind, start: NaiveDateTime) -> Self {
        Self {
            kind,
            start,
            end: None,
            duration: None,
        }
    }

    pub fn closed(kind: SegmentKind, start: NaiveDateTime, end: NaiveDateTime, duration: Duration) -> Self {
        Self {
            kind,
            start,
            end: Some(end),
            duration: Some(duration),
        }
    }
}

/// Attendance state for one user over the current accounting period.
///
/// Mutated only by the activity state machine (user actions) and by the
/// store-wide reset sweep. The audit log is append-only and survives
/// counter resets for the life of the record.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Display name, refreshed to the last-seen value on every action.
    pub name: String,
    pub status: Status,
    /// Accumulated work time since the last reset event.
    pub total_work_time: Duration,
    /// Start of the currently open segment, present iff a segment is open.
    pub last_segment_start: Option<NaiveDateTime>,
    pub break_count: u32,
    pub break_time: Duration,
    pub smoking_count: u32,
    pub smoking_time: Duration,
    pub activity_log: Vec<Segment>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Idle,
            total_work_time: Duration::zero(),
            last_segment_start: None,
            break_count: 0,
            break_time: Duration::zero(),
            smoking_count: 0,
            smoking_time: Duration::zero(),
            activity_log: Vec::new(),
        }
    }
}

/// Elapsed time between a segment start and "now", clamped to zero.
///
/// A negative elapsed time means the caller fed a timestamp earlier than the
/// open segment's start. That is a programming defect, not a user error: it
/// is logged as an anomaly and clamped so accumulated totals are never
/// corrupted.
pub fn elapsed_since(start: NaiveDateTime, now: NaiveDateTime) -> Duration {
    let elapsed = now.signed_duration_since(start);
    if elapsed < Duration::zero() {
        tracing::warn!(%start, %now, "clock anomaly: negative elapsed time clamped to zero");
        return Duration::zero();
    }
    elapsed
}
