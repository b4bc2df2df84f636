#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::panic::{AssertUnwindSafe, catch_unwind};

use bon::Builder;

use super::{
    describe,
    results::{GradeResult, Tally},
};
use crate::{
    candidate::BinarySearchTree,
    oracle::{balance, breadth_first, in_order, post_order, pre_order, unbalanced_depth},
    value::Key,
};

/// Checks made for every case; a panic inside a case fails all of them.
const CHECKS_PER_CASE: usize = 11;

#[derive(Clone, Debug, Builder)]
#[builder(on(String, into))]
/// Grades a binary search tree by inserting each case into a fresh instance
/// and comparing every observable property with the sequence oracles.
pub struct TreeGrader {
    /// Display name for requirement to use while displaying grade result
    req_name: String,
    /// Maximum possible grade.
    out_of:   f64,
    /// Insertion sequences, one fresh tree each.
    cases:    Vec<Vec<Key>>,
}

/// A value guaranteed to be absent from `case`, of the same kind.
fn absent_from(case: &[Key]) -> Key {
    match case.first() {
        Some(Key::Str(_)) => Key::from("superuniquestring"),
        _ => Key::Int(i64::MAX),
    }
}

impl TreeGrader {
    /// Grades a tree type that can be default-constructed.
    pub fn run<C>(&self) -> GradeResult
    where
        C: BinarySearchTree<Key> + Default,
    {
        self.grade_with(C::default)
    }

    /// Grades trees produced by `make`, one per case.
    pub fn grade_with<C, F>(&self, mut make: F) -> GradeResult
    where
        C: BinarySearchTree<Key>,
        F: FnMut() -> C,
    {
        let mut tally = Tally::new();

        for case in &self.cases {
            tracing::debug!("grading tree built from {}", describe(case));
            let before = tally.total();
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                let mut tree = make();
                for value in case {
                    tree.insert(value.clone());
                }
                check_tree(&mut tally, &mut tree, case);
            }));
            if outcome.is_err() {
                let remaining = CHECKS_PER_CASE.saturating_sub(tally.total() - before);
                tally.fail_many(remaining, format!("- {}: panicked", describe(case)));
            }
        }

        tally.into_result(&self.req_name, self.out_of)
    }
}

/// Compares `tree`, already filled with `case`, against the oracles.
fn check_tree<C>(tally: &mut Tally, tree: &mut C, case: &[Key])
where
    C: BinarySearchTree<Key>,
{
    let name = describe(case);
    let expected_in = in_order(case);

    let size = tree.size();
    tally.check(size == expected_in.len(), || {
        format!("- {name}: size was {size}, expected {}", expected_in.len())
    });

    let depth = tree.depth();
    let expected_depth = unbalanced_depth(case);
    tally.check(depth == expected_depth, || {
        format!("- {name}: depth was {depth}, expected {expected_depth}")
    });

    let bal = tree.balance();
    let expected_bal = balance(case);
    tally.check(bal == expected_bal, || {
        format!("- {name}: balance was {bal}, expected {expected_bal}")
    });

    let missing: Vec<&Key> = case.iter().filter(|v| !tree.contains(v)).collect();
    tally.check(missing.is_empty(), || {
        format!("- {name}: inserted values not found: {}", describe(&missing))
    });

    let absent = absent_from(case);
    tally.check(!tree.contains(&absent), || {
        format!("- {name}: claims to contain {absent}, which was never inserted")
    });

    let traversals: [(&str, Vec<Key>, Vec<Key>); 4] = [
        ("in-order", tree.in_order(), expected_in.clone()),
        ("pre-order", tree.pre_order(), pre_order(case)),
        ("post-order", tree.post_order(), post_order(case)),
        ("breadth-first", tree.breadth_first(), breadth_first(case)),
    ];
    for (label, actual, expected) in traversals {
        tally.check(actual == expected, || {
            format!(
                "- {name}: {label} gave {}, expected {}",
                describe(&actual),
                describe(&expected)
            )
        });
    }

    let repeat = case.first().cloned().unwrap_or_else(|| absent.clone());
    let grows = usize::from(case.is_empty());
    tree.insert(repeat.clone());
    tree.insert(repeat.clone());
    let after = tree.size();
    tally.check(after == expected_in.len() + grows, || {
        format!("- {name}: inserting {repeat} twice changed size from {size} to {after}")
    });
    tally.check(tree.contains(&repeat), || {
        format!("- {name}: {repeat} missing after re-insertion")
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_matches_case_kind() {
        assert_eq!(absent_from(&[Key::from("a")]), Key::from("superuniquestring"));
        assert_eq!(absent_from(&[Key::Int(3)]), Key::Int(i64::MAX));
        assert_eq!(absent_from(&[]), Key::Int(i64::MAX));
    }
}
