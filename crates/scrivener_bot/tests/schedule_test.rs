use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use scrivener_bot::{Schedule, ScheduleType};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn nine() -> ScheduleType {
    ScheduleType::daily(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
}

#[test]
fn test_daily_runs_today_when_time_is_ahead() {
    let next = nine().next_execution(&utc(2026, 3, 10, 8, 15, 0));
    assert_eq!(next, Some(utc(2026, 3, 10, 9, 0, 0)));
}

#[test]
fn test_daily_runs_tomorrow_when_time_has_passed() {
    let next = nine().next_execution(&utc(2026, 3, 10, 9, 0, 1));
    assert_eq!(next, Some(utc(2026, 3, 11, 9, 0, 0)));
}

#[test]
fn test_daily_at_exact_time_moves_to_next_day() {
    let next = nine().next_execution(&utc(2026, 3, 10, 9, 0, 0));
    assert_eq!(next, Some(utc(2026, 3, 11, 9, 0, 0)));
}

#[test]
fn test_daily_crosses_month_and_year() {
    let next = nine().next_execution(&utc(2026, 12, 31, 23, 59, 0));
    assert_eq!(next, Some(utc(2027, 1, 1, 9, 0, 0)));
}

#[test]
fn test_daily_uses_local_wall_clock_of_reference() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let after = tz.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();

    let next = nine().next_execution(&after).unwrap();

    assert_eq!(next, tz.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap());
    assert_eq!(next.with_timezone(&Utc), utc(2026, 3, 10, 7, 0, 0));
}

#[test]
fn test_cron_schedule() {
    let schedule = ScheduleType::Cron {
        expression: "0 30 12 * * * *".to_string(),
    };

    let next = schedule.next_execution(&utc(2026, 3, 10, 13, 0, 0));
    assert_eq!(next, Some(utc(2026, 3, 11, 12, 30, 0)));
}

#[test]
fn test_invalid_cron_has_no_next_run() {
    let schedule = ScheduleType::Cron {
        expression: "invalid cron".to_string(),
    };

    assert!(schedule.validate().is_err());
    assert!(schedule.next_execution(&Utc::now()).is_none());
}

#[test]
fn test_parse_daily_time() {
    let schedule: ScheduleType = "09:00".parse().unwrap();
    assert_eq!(schedule, nine());
    assert_eq!(schedule.to_string(), "daily at 09:00");
}

#[test]
fn test_parse_cron_expression() {
    let schedule: ScheduleType = "0 0 9 * * Mon-Fri *".parse().unwrap();
    assert!(matches!(schedule, ScheduleType::Cron { .. }));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("25:00".parse::<ScheduleType>().is_err());
    assert!("noon".parse::<ScheduleType>().is_err());
    assert!("0 0 nine * * * *".parse::<ScheduleType>().is_err());
}

/// Zone at UTC+0 that jumps to UTC+1 at 02:00 local on 2026-03-08,
/// so 02:00..03:00 local does not exist that day.
#[derive(Debug, Clone, Copy)]
struct SpringForward;

impl SpringForward {
    fn switch() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap()
    }

    fn winter() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn summer() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }
}

impl TimeZone for SpringForward {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        SpringForward
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let switch = Self::switch();
        if *local < switch {
            LocalResult::Single(Self::winter())
        } else if *local < switch + chrono::Duration::hours(1) {
            LocalResult::None
        } else {
            LocalResult::Single(Self::summer())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        // Winter offset is zero, so the switch instant is the same in UTC.
        if *utc < Self::switch() {
            Self::winter()
        } else {
            Self::summer()
        }
    }
}

#[test]
fn test_daily_time_in_dst_gap_is_skipped_that_day() {
    let schedule = ScheduleType::daily(NaiveTime::from_hms_opt(2, 30, 0).unwrap());
    let after = SpringForward.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();

    let next = schedule.next_execution(&after).unwrap();

    assert_eq!(next, SpringForward.with_ymd_and_hms(2026, 3, 9, 2, 30, 0).unwrap());
    assert_eq!(next.with_timezone(&Utc), utc(2026, 3, 9, 1, 30, 0));
}

#[test]
fn test_daily_time_after_dst_switch_uses_new_offset() {
    let schedule = ScheduleType::daily(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    let after = SpringForward.with_ymd_and_hms(2026, 3, 8, 1, 0, 0).unwrap();

    let next = schedule.next_execution(&after).unwrap();

    assert_eq!(next.with_timezone(&Utc), utc(2026, 3, 8, 8, 0, 0));
}
