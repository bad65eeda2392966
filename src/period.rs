//! Calendar period numbers and the two-person rotation.
//!
//! All functions are pure; the assignment has no stored history, it falls
//! out of the parity of the period number alone.

use chrono::{Datelike, NaiveDate};

use crate::tasks::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    One,
    Two,
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Person::One => write!(f, "Person 1"),
            Person::Two => write!(f, "Person 2"),
        }
    }
}

/// ISO-8601 week of year (1-53).
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

pub fn month_number(date: NaiveDate) -> u32 {
    date.month()
}

/// Quarter of the year (1-4), `ceil(month / 3)`.
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() + 2) / 3
}

/// The period number that drives rotation for a task category.
pub fn period_number(category: Category, date: NaiveDate) -> u32 {
    match category {
        Category::Week => week_number(date),
        Category::Month => month_number(date),
        Category::Quarter => quarter(date),
    }
}

/// Odd periods go to Person 1, even periods to Person 2.
pub fn assignee(period: u32) -> Person {
    if period % 2 == 1 {
        Person::One
    } else {
        Person::Two
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_assignee_parity() {
        assert_eq!(assignee(1), Person::One);
        assert_eq!(assignee(2), Person::Two);
        assert_eq!(assignee(53), Person::One);
        assert_eq!(assignee(12), Person::Two);
    }

    #[test]
    fn test_assignee_labels() {
        assert_eq!(Person::One.to_string(), "Person 1");
        assert_eq!(Person::Two.to_string(), "Person 2");
    }

    #[test]
    fn test_quarter_covers_all_months() {
        let expected = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        for (month, want) in (1..=12).zip(expected) {
            assert_eq!(quarter(date(2026, month, 15)), want, "month {month}");
        }
    }

    #[test]
    fn test_iso_week_number() {
        // Week 1 of 2026 contains the year's first Thursday (Jan 1), so
        // Jan 4 (Sunday) closes week 1 and Jan 5 (Monday) opens week 2.
        assert_eq!(week_number(date(2026, 1, 4)), 1);
        assert_eq!(week_number(date(2026, 1, 5)), 2);
        // Jan 1 2027 is a Friday, still week 53 of 2026.
        assert_eq!(week_number(date(2027, 1, 1)), 53);
    }

    #[test]
    fn test_period_number_per_category() {
        let d = date(2026, 1, 5);
        assert_eq!(period_number(Category::Week, d), 2);
        assert_eq!(period_number(Category::Month, d), 1);
        assert_eq!(period_number(Category::Quarter, d), 1);
    }
}
