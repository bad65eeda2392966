//! Selecting due task categories and running a print pass.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::period;
use crate::printer::{Emphasis, TicketSink};
use crate::tasks::Category;

/// Which categories are due today.
///
/// An explicit selector wins unconditionally. In automatic mode the weekly
/// list is always due; monthly and quarterly lists are due in the first
/// seven days of the month (and, for quarterly, only in a quarter-opening
/// month). The day <= 7 rule approximates "first Monday of the period" and
/// is kept as-is so it lines up with the Monday trigger.
pub fn due_categories(selector: Option<Category>, today: NaiveDate) -> Vec<Category> {
    if let Some(category) = selector {
        return vec![category];
    }
    let mut due = vec![Category::Week];
    if today.day() <= 7 {
        due.push(Category::Month);
        if matches!(today.month(), 1 | 4 | 7 | 10) {
            due.push(Category::Quarter);
        }
    }
    due
}

/// Result of one print pass. `printed` counts tickets fully emitted before
/// any failure; there is no rollback of tickets already cut.
pub struct PrintOutcome {
    pub printed: usize,
    pub error: Option<anyhow::Error>,
}

/// Print one ticket per due task: date header, assignee in large bold,
/// task text in medium bold, then a cut. Stops at the first sink error.
pub async fn print_plan(
    sink: &mut dyn TicketSink,
    selector: Option<Category>,
    today: NaiveDate,
) -> PrintOutcome {
    let date_line = today.format("%d.%m.%Y").to_string();
    let mut printed = 0;
    for category in due_categories(selector, today) {
        let person = period::assignee(period::period_number(category, today));
        for task in category.tasks() {
            if let Err(error) = print_ticket(sink, &date_line, &person.to_string(), task).await {
                return PrintOutcome {
                    printed,
                    error: Some(error),
                };
            }
            printed += 1;
        }
    }
    PrintOutcome {
        printed,
        error: None,
    }
}

async fn print_ticket(
    sink: &mut dyn TicketSink,
    date_line: &str,
    person: &str,
    task: &str,
) -> Result<()> {
    sink.begin_ticket().await?;
    sink.write_centered(date_line, Emphasis::Normal).await?;
    sink.write_centered(person, Emphasis::Large).await?;
    sink.write_centered("", Emphasis::Normal).await?;
    sink.write_centered(task, Emphasis::Medium).await?;
    sink.cut().await?;
    Ok(())
}
