#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Graders that run candidate implementations against the oracles and turn
//! the outcome into marks.

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

/// Stack and queue graders
pub mod linear;
/// Grades and per-requirement results
pub mod results;
/// Binary search tree grader
pub mod tree;

/// Weighted graph grader
pub mod graph;

pub use graph::GraphGrader;
pub use linear::{QueueGrader, StackGrader};
pub use results::{Grade, GradeResult, Tally};
pub use tree::TreeGrader;

/// Elements shown by [`describe`] before the rest is elided.
const DESCRIBE_LIMIT: usize = 8;

/// Short bracketed rendering of a sequence for failure reasons.
pub fn describe<T: Display>(items: &[T]) -> String {
    let shown = items.iter().take(DESCRIBE_LIMIT).join(", ");
    if items.len() > DESCRIBE_LIMIT {
        format!("[{shown}, … ({} total)]", items.len())
    } else {
        format!("[{shown}]")
    }
}

/// Prints a table of `results` to stderr followed by the total, and
/// returns that total.
pub fn show_results(results: &[GradeResult]) -> Grade {
    let (grade, out_of) = results.iter().fold((0f64, 0f64), |acc, r| {
        (acc.0 + r.grade_value(), acc.1 + r.out_of_value())
    });

    eprintln!(
        "{}",
        Table::new(results)
            .with(Panel::header("Grading Overview"))
            .with(Panel::footer(format!("Total: {grade:.2}/{out_of:.2}")))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );

    let total = Grade::new(grade, out_of);
    let line = format!("Total: {total}");
    if grade >= out_of {
        eprintln!("{}", line.green().bold());
    } else {
        eprintln!("{}", line.yellow().bold());
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_elides_long_sequences() {
        assert_eq!(describe::<i64>(&[]), "[]");
        assert_eq!(describe(&[1, 2, 3]), "[1, 2, 3]");
        let long: Vec<i64> = (0..20).collect();
        assert_eq!(describe(&long), "[0, 1, 2, 3, 4, 5, 6, 7, … (20 total)]");
    }

    #[test]
    fn totals_add_up() {
        let results = [
            GradeResult::builder()
                .requirement("a")
                .grade(Grade::new(1.5, 2.0))
                .build(),
            GradeResult::builder()
                .requirement("b")
                .grade(Grade::new(3.0, 3.0))
                .build(),
        ];
        assert_eq!(show_results(&results), Grade::new(4.5, 5.0));
    }
}
