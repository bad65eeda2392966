//! Weekly wall-clock trigger, polled once a minute by the run loop.
//!
//! A job's first firing is the next strictly-future occurrence of its
//! weekday and time, so starting the process after Monday 11:00 waits for
//! next week instead of firing immediately. The scheduler is pure over
//! `NaiveDateTime`; the caller supplies the clock.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

struct Job {
    next_run: NaiveDateTime,
}

#[derive(Default)]
pub struct Scheduler {
    jobs: Vec<Job>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a weekly job at the given weekday and time of day.
    pub fn every(&mut self, weekday: Weekday, at: NaiveTime, now: NaiveDateTime) {
        self.jobs.push(Job {
            next_run: next_occurrence(weekday, at, now),
        });
    }

    /// True if any job came due; due jobs are re-armed one week out.
    pub fn pending(&mut self, now: NaiveDateTime) -> bool {
        let mut fired = false;
        for job in &mut self.jobs {
            if now >= job.next_run {
                job.next_run += Duration::days(7);
                fired = true;
            }
        }
        fired
    }
}

fn next_occurrence(weekday: Weekday, at: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let days_ahead = (weekday.num_days_from_monday() + 7
        - now.weekday().num_days_from_monday())
        % 7;
    let candidate = (now.date() + Duration::days(i64::from(days_ahead))).and_time(at);
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn monday_eleven(now: NaiveDateTime) -> Scheduler {
        let mut s = Scheduler::new();
        s.every(Weekday::Mon, NaiveTime::from_hms_opt(11, 0, 0).unwrap(), now);
        s
    }

    #[test]
    fn test_fires_at_trigger_time() {
        // 2026-06-01 is a Monday.
        let mut s = monday_eleven(at(2026, 5, 27, 9, 0));
        assert!(!s.pending(at(2026, 6, 1, 10, 59)));
        assert!(s.pending(at(2026, 6, 1, 11, 0)));
    }

    #[test]
    fn test_fires_once_then_rearms_a_week_out() {
        let mut s = monday_eleven(at(2026, 5, 27, 9, 0));
        // Coarse polling means the first check may land past 11:00.
        assert!(s.pending(at(2026, 6, 1, 11, 3)));
        assert!(!s.pending(at(2026, 6, 1, 11, 4)));
        assert!(!s.pending(at(2026, 6, 2, 11, 0)));
        assert!(s.pending(at(2026, 6, 8, 11, 0)));
    }

    #[test]
    fn test_same_day_registration_before_trigger_fires_today() {
        let mut s = monday_eleven(at(2026, 6, 1, 10, 0));
        assert!(s.pending(at(2026, 6, 1, 11, 0)));
    }

    #[test]
    fn test_registration_after_trigger_waits_for_next_week() {
        // Started Monday 15:00: no firing until the following Monday.
        let mut s = monday_eleven(at(2026, 6, 1, 15, 0));
        assert!(!s.pending(at(2026, 6, 1, 15, 1)));
        assert!(!s.pending(at(2026, 6, 7, 23, 59)));
        assert!(s.pending(at(2026, 6, 8, 11, 0)));
    }

    #[test]
    fn test_off_day_never_fires() {
        let mut s = monday_eleven(at(2026, 6, 1, 12, 0));
        for day in 2..=7 {
            assert!(!s.pending(at(2026, 6, day, 11, 30)), "june {day}");
        }
    }
}
