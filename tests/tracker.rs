#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use punch::libs::record::{SegmentKind, Status, UserRecord};
    use punch::libs::store::AttendanceStore;
    use punch::libs::tracker::{apply, handle_action, Ack, Action, Outcome, Rejection};

    /// Fixed-date timestamp helper for deterministic transitions.
    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn working_record(since: NaiveDateTime) -> UserRecord {
        let mut record = UserRecord::new("Aye Chan");
        assert!(matches!(apply(&mut record, Action::WorkIn, since), Outcome::Accepted(_)));
        record
    }

    #[test]
    fn test_work_in_from_idle() {
        let mut record = UserRecord::new("Aye Chan");
        let outcome = apply(&mut record, Action::WorkIn, at(9, 0));

        assert_eq!(outcome, Outcome::Accepted(Ack::ClockedIn { at: at(9, 0) }));
        assert_eq!(record.status, Status::Working);
        assert_eq!(record.last_segment_start, Some(at(9, 0)));
        assert_eq!(record.total_work_time, Duration::zero());
    }

    #[test]
    fn test_work_in_rejected_while_clocked_in() {
        let mut record = working_record(at(9, 0));
        assert_eq!(apply(&mut record, Action::WorkIn, at(10, 0)), Outcome::Rejected(Rejection::AlreadyClockedIn));

        // The same applies while on break or smoking.
        assert!(matches!(apply(&mut record, Action::Break, at(10, 30)), Outcome::Accepted(_)));
        assert_eq!(apply(&mut record, Action::WorkIn, at(10, 40)), Outcome::Rejected(Rejection::AlreadyClockedIn));
        assert!(matches!(apply(&mut record, Action::Back, at(10, 45)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::Smoking, at(11, 0)), Outcome::Accepted(_)));
        assert_eq!(apply(&mut record, Action::WorkIn, at(11, 5)), Outcome::Rejected(Rejection::AlreadyClockedIn));

        // Rejections leave the record untouched.
        assert_eq!(record.status, Status::Smoking);
        assert_eq!(record.last_segment_start, Some(at(11, 0)));
    }

    #[test]
    fn test_work_in_accepted_again_after_clock_out() {
        let mut record = working_record(at(9, 0));
        assert!(matches!(apply(&mut record, Action::WorkOut, at(12, 0)), Outcome::Accepted(_)));
        assert_eq!(record.status, Status::OffShift);

        assert!(matches!(apply(&mut record, Action::WorkIn, at(13, 0)), Outcome::Accepted(_)));
        assert_eq!(record.status, Status::Working);
        // The morning total survives a second shift on the same day.
        assert_eq!(record.total_work_time, Duration::hours(3));
    }

    #[test]
    fn test_work_out_requires_clock_in() {
        let mut record = UserRecord::new("Aye Chan");
        assert_eq!(apply(&mut record, Action::WorkOut, at(9, 0)), Outcome::Rejected(Rejection::MustClockInFirst));
        assert_eq!(record.status, Status::Idle);

        let mut record = working_record(at(9, 0));
        assert!(matches!(apply(&mut record, Action::WorkOut, at(10, 0)), Outcome::Accepted(_)));
        assert_eq!(apply(&mut record, Action::WorkOut, at(11, 0)), Outcome::Rejected(Rejection::MustClockInFirst));
    }

    #[test]
    fn test_scenario_plain_shift() {
        // work_in at T0, work_out at T0+2h: two accepted outcomes, 2h total.
        let mut record = UserRecord::new("Aye Chan");
        assert!(matches!(apply(&mut record, Action::WorkIn, at(9, 0)), Outcome::Accepted(_)));
        let outcome = apply(&mut record, Action::WorkOut, at(11, 0));

        match outcome {
            Outcome::Accepted(Ack::ClockedOut {
                total_work_time,
                break_count,
                smoking_count,
                ..
            }) => {
                assert_eq!(total_work_time, Duration::hours(2));
                assert_eq!(break_count, 0);
                assert_eq!(smoking_count, 0);
            }
            other => panic!("expected clock-out ack, got {:?}", other),
        }
        assert_eq!(record.total_work_time, Duration::hours(2));
        assert_eq!(record.status, Status::OffShift);
        assert_eq!(record.last_segment_start, None);
    }

    #[test]
    fn test_scenario_smoking_round_trip() {
        // work_in at 9:00, smoking at 10:00 folds 1h of work, back at 10:10
        // folds 10m of smoking, work_out at 12:00 folds the rest.
        let mut record = UserRecord::new("Aye Chan");
        assert!(matches!(apply(&mut record, Action::WorkIn, at(9, 0)), Outcome::Accepted(_)));

        let outcome = apply(&mut record, Action::Smoking, at(10, 0));
        assert_eq!(
            outcome,
            Outcome::Accepted(Ack::PauseStarted {
                kind: SegmentKind::Smoking,
                at: at(10, 0),
                count: 1
            })
        );
        assert_eq!(record.total_work_time, Duration::hours(1));
        assert_eq!(record.status, Status::Smoking);

        let outcome = apply(&mut record, Action::Back, at(10, 10));
        assert_eq!(
            outcome,
            Outcome::Accepted(Ack::BackToWork {
                at: at(10, 10),
                ended: SegmentKind::Smoking,
                elapsed: Duration::minutes(10),
                total: Duration::minutes(10),
                count: 1
            })
        );
        assert_eq!(record.status, Status::Working);
        assert_eq!(record.last_segment_start, Some(at(10, 10)));

        assert!(matches!(apply(&mut record, Action::WorkOut, at(12, 0)), Outcome::Accepted(_)));
        assert_eq!(record.total_work_time, Duration::hours(2) + Duration::minutes(50));
        assert_eq!(record.smoking_time, Duration::minutes(10));
        assert_eq!(record.smoking_count, 1);
        assert_eq!(record.break_count, 0);
    }

    #[test]
    fn test_pause_requires_working_status() {
        let mut record = UserRecord::new("Aye Chan");
        assert_eq!(
            apply(&mut record, Action::Break, at(9, 0)),
            Outcome::Rejected(Rejection::MustBeWorkingFirst(SegmentKind::Break))
        );
        assert_eq!(
            apply(&mut record, Action::Smoking, at(9, 0)),
            Outcome::Rejected(Rejection::MustBeWorkingFirst(SegmentKind::Smoking))
        );

        // Not from off shift either.
        let mut record = working_record(at(9, 0));
        assert!(matches!(apply(&mut record, Action::WorkOut, at(10, 0)), Outcome::Accepted(_)));
        assert_eq!(
            apply(&mut record, Action::Break, at(10, 5)),
            Outcome::Rejected(Rejection::MustBeWorkingFirst(SegmentKind::Break))
        );

        // A pause cannot be stacked on an open pause.
        let mut record = working_record(at(9, 0));
        assert!(matches!(apply(&mut record, Action::Break, at(10, 0)), Outcome::Accepted(_)));
        assert_eq!(
            apply(&mut record, Action::Smoking, at(10, 5)),
            Outcome::Rejected(Rejection::MustBeWorkingFirst(SegmentKind::Smoking))
        );
        assert_eq!(record.smoking_count, 0);
    }

    #[test]
    fn test_back_transitions() {
        let mut record = UserRecord::new("Aye Chan");
        assert_eq!(apply(&mut record, Action::Back, at(9, 0)), Outcome::Rejected(Rejection::NotWorking));

        let mut record = working_record(at(9, 0));
        assert_eq!(apply(&mut record, Action::Back, at(9, 30)), Outcome::Rejected(Rejection::NoOngoingActivity));

        assert!(matches!(apply(&mut record, Action::WorkOut, at(10, 0)), Outcome::Accepted(_)));
        assert_eq!(apply(&mut record, Action::Back, at(10, 5)), Outcome::Rejected(Rejection::NoOngoingActivity));

        let mut record = working_record(at(11, 0));
        assert!(matches!(apply(&mut record, Action::Break, at(11, 30)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::Back, at(11, 45)), Outcome::Accepted(_)));
        assert_eq!(record.status, Status::Working);
        assert_eq!(record.break_time, Duration::minutes(15));
    }

    #[test]
    fn test_work_out_while_smoking_folds_into_smoking_bucket() {
        // Clocking out without pressing Back first settles the open pause
        // into its own bucket, never into work time.
        let mut record = working_record(at(9, 0));
        assert!(matches!(apply(&mut record, Action::Smoking, at(10, 0)), Outcome::Accepted(_)));

        assert!(matches!(apply(&mut record, Action::WorkOut, at(10, 20)), Outcome::Accepted(_)));
        assert_eq!(record.total_work_time, Duration::hours(1));
        assert_eq!(record.smoking_time, Duration::minutes(20));
        assert_eq!(record.status, Status::OffShift);
    }

    #[test]
    fn test_work_out_while_on_break_folds_into_break_bucket() {
        let mut record = working_record(at(9, 0));
        assert!(matches!(apply(&mut record, Action::Break, at(9, 30)), Outcome::Accepted(_)));

        assert!(matches!(apply(&mut record, Action::WorkOut, at(9, 45)), Outcome::Accepted(_)));
        assert_eq!(record.total_work_time, Duration::minutes(30));
        assert_eq!(record.break_time, Duration::minutes(15));
        assert_eq!(record.smoking_time, Duration::zero());
    }

    #[test]
    fn test_cap_reset_fires_before_any_action() {
        for action in [Action::WorkIn, Action::WorkOut, Action::Break, Action::Smoking, Action::Back] {
            let mut record = UserRecord::new("Aye Chan");
            record.total_work_time = Duration::hours(24);
            record.break_count = 3;
            record.break_time = Duration::minutes(30);

            assert_eq!(apply(&mut record, action, at(9, 0)), Outcome::CapReset);
            assert_eq!(record.status, Status::OffShift);
            assert_eq!(record.total_work_time, Duration::zero());
            assert_eq!(record.break_count, 0);
            assert_eq!(record.break_time, Duration::zero());
            assert_eq!(record.last_segment_start, None);
        }
    }

    #[test]
    fn test_cap_not_triggered_below_threshold() {
        let mut record = UserRecord::new("Aye Chan");
        record.total_work_time = Duration::hours(24) - Duration::seconds(1);

        assert!(matches!(apply(&mut record, Action::WorkIn, at(9, 0)), Outcome::Accepted(_)));
        assert_eq!(record.status, Status::Working);
    }

    #[test]
    fn test_accumulating_past_cap_resets_on_next_action() {
        // The fold that crosses the threshold reports normally; the NEXT
        // action triggers the reset before being evaluated.
        let mut record = working_record(at(0, 0));
        record.total_work_time = Duration::hours(23);

        assert!(matches!(apply(&mut record, Action::WorkOut, at(2, 0)), Outcome::Accepted(_)));
        assert_eq!(record.total_work_time, Duration::hours(25));

        assert_eq!(apply(&mut record, Action::WorkIn, at(3, 0)), Outcome::CapReset);
        assert_eq!(record.total_work_time, Duration::zero());
        assert_eq!(record.status, Status::OffShift);
    }

    #[test]
    fn test_clock_anomaly_clamped_to_zero() {
        // "now" earlier than the open segment start must never subtract
        // from accumulated totals.
        let mut record = working_record(at(10, 0));
        assert!(matches!(apply(&mut record, Action::WorkOut, at(9, 0)), Outcome::Accepted(_)));
        assert_eq!(record.total_work_time, Duration::zero());
        assert_eq!(record.status, Status::OffShift);
    }

    #[test]
    fn test_status_and_open_segment_coupling() {
        // An open segment start is present exactly while a segment is open.
        let mut record = UserRecord::new("Aye Chan");
        assert!(record.last_segment_start.is_none());

        assert!(matches!(apply(&mut record, Action::WorkIn, at(9, 0)), Outcome::Accepted(_)));
        assert!(record.last_segment_start.is_some());

        assert!(matches!(apply(&mut record, Action::Break, at(9, 30)), Outcome::Accepted(_)));
        assert!(record.last_segment_start.is_some());

        assert!(matches!(apply(&mut record, Action::Back, at(9, 40)), Outcome::Accepted(_)));
        assert!(record.last_segment_start.is_some());

        assert!(matches!(apply(&mut record, Action::WorkOut, at(10, 0)), Outcome::Accepted(_)));
        assert!(record.last_segment_start.is_none());
    }

    #[test]
    fn test_accounting_conservation_law() {
        // At any off-shift point, each bucket equals the sum of closed
        // segment durations of the matching kind in the audit log.
        let mut record = UserRecord::new("Aye Chan");
        assert!(matches!(apply(&mut record, Action::WorkIn, at(8, 0)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::Break, at(9, 0)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::Back, at(9, 20)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::Smoking, at(10, 0)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::Back, at(10, 5)), Outcome::Accepted(_)));
        assert!(matches!(apply(&mut record, Action::WorkOut, at(12, 0)), Outcome::Accepted(_)));

        let sum_of = |kind: SegmentKind| {
            record
                .activity_log
                .iter()
                .filter(|s| s.kind == kind && s.end.is_some())
                .filter_map(|s| s.duration)
                .fold(Duration::zero(), |acc, d| acc + d)
        };

        assert_eq!(sum_of(SegmentKind::Work), record.total_work_time);
        assert_eq!(sum_of(SegmentKind::Break), record.break_time);
        assert_eq!(sum_of(SegmentKind::Smoking), record.smoking_time);

        // Every closed entry is well-formed.
        for segment in record.activity_log.iter().filter(|s| s.end.is_some()) {
            assert!(segment.end.unwrap() >= segment.start);
        }
    }

    #[test]
    fn test_handle_action_renders_confirmation() {
        let store = AttendanceStore::shared();
        let reply = handle_action(&store, 7, "Aye Chan", Action::WorkIn, at(9, 0));
        assert!(reply.contains("Work In success at 06/02 09:00:00"), "unexpected reply: {}", reply);

        let reply = handle_action(&store, 7, "Aye Chan", Action::WorkIn, at(9, 5));
        assert!(reply.contains("already clocked in"), "unexpected reply: {}", reply);
    }

    #[test]
    fn test_handle_action_rejection_still_creates_record() {
        // A user whose first action is invalid is still registered as idle.
        let store = AttendanceStore::shared();
        let reply = handle_action(&store, 11, "Moe Moe", Action::WorkOut, at(9, 0));
        assert!(reply.contains("clock-in with Work In first"), "unexpected reply: {}", reply);

        let store = store.lock();
        let record = store.get(11).expect("record should exist after rejected action");
        assert_eq!(record.status, Status::Idle);
        assert_eq!(record.total_work_time, Duration::zero());
    }

    #[test]
    fn test_handle_action_clock_out_summary_fields() {
        let store = AttendanceStore::shared();
        handle_action(&store, 7, "Aye Chan", Action::WorkIn, at(9, 0));
        handle_action(&store, 7, "Aye Chan", Action::Break, at(10, 0));
        handle_action(&store, 7, "Aye Chan", Action::Back, at(10, 30));
        let reply = handle_action(&store, 7, "Aye Chan", Action::WorkOut, at(11, 0));

        assert!(reply.contains("Total Work Today: 1 hours 30 minutes 00 seconds"), "unexpected reply: {}", reply);
        assert!(reply.contains("Breaks: 1 → 0 hours 30 minutes 00 seconds"), "unexpected reply: {}", reply);
        assert!(reply.contains("Smoking: 0 → 0 hours 00 minutes 00 seconds"), "unexpected reply: {}", reply);
    }

    #[test]
    fn test_handle_action_cap_notification() {
        let store = AttendanceStore::shared();
        handle_action(&store, 7, "Aye Chan", Action::WorkIn, at(9, 0));
        store.lock().entry(7, "Aye Chan").total_work_time = Duration::hours(24);

        let reply = handle_action(&store, 7, "Aye Chan", Action::WorkOut, at(18, 0));
        assert!(reply.contains("You already worked 24 hours today!"), "unexpected reply: {}", reply);
        assert!(reply.contains("User ID: 7"), "unexpected reply: {}", reply);
        assert_eq!(store.lock().get(7).unwrap().total_work_time, Duration::zero());
    }
}
