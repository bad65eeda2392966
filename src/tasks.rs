//! The fixed household task catalog.
//!
//! Lists are constants; nothing here is persisted or mutated at runtime.

pub const WEEKLY_TASKS: &[&str] = &[
    "Kuche: Schranke, Kuhlschrank abwischen, Mull runterbringen",
    "Bad: Waschbecken, Duschwanne, WC reinigen",
];

pub const MONTHLY_TASKS: &[&str] = &[
    "Kuche+Flur: Fussboden wischen",
    "Bad: Fussboden wischen",
];

pub const QUARTERLY_TASKS: &[&str] = &["Kuche: Fenster putzen, Kuhlschrank abtauen"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Week,
    Month,
    Quarter,
}

impl Category {
    pub fn tasks(self) -> &'static [&'static str] {
        match self {
            Category::Week => WEEKLY_TASKS,
            Category::Month => MONTHLY_TASKS,
            Category::Quarter => QUARTERLY_TASKS,
        }
    }
}
