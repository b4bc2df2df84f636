#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::panic::{AssertUnwindSafe, catch_unwind};

use bon::Builder;

use super::{
    describe,
    results::{GradeResult, Tally},
};
use crate::{
    candidate::{Queue, Stack},
    value::Key,
};

/// Checks made per case by both graders here.
const CHECKS_PER_CASE: usize = 4;

#[derive(Clone, Debug, Builder)]
#[builder(on(String, into))]
/// Grades a stack: every case is pushed onto a fresh instance and must pop
/// back out in reverse.
pub struct StackGrader {
    /// Display name for requirement to use while displaying grade result
    req_name: String,
    /// Maximum possible grade.
    out_of:   f64,
    /// Sequences to push, one fresh instance each.
    cases:    Vec<Vec<Key>>,
}

impl StackGrader {
    /// Grades a stack type that can be default-constructed.
    pub fn run<C>(&self) -> GradeResult
    where
        C: Stack<Key> + Default,
    {
        let result = grade_cases(&self.cases, |tally, case| {
            let mut stack = C::default();
            for value in case {
                stack.push(value.clone());
            }
            let expected: Vec<Key> = case.iter().rev().cloned().collect();
            let peek = stack.peek().cloned();
            let size = stack.size();
            let drained: Vec<Key> = std::iter::from_fn(|| stack.pop())
                .take(case.len() + 1)
                .collect();
            check_drain(tally, case, size, peek, drained, &expected, stack.size());
        });
        result.into_result(&self.req_name, self.out_of)
    }
}

#[derive(Clone, Debug, Builder)]
#[builder(on(String, into))]
/// Grades a queue: every case is enqueued into a fresh instance and must
/// come back out in the same order.
pub struct QueueGrader {
    /// Display name for requirement to use while displaying grade result
    req_name: String,
    /// Maximum possible grade.
    out_of:   f64,
    /// Sequences to enqueue, one fresh instance each.
    cases:    Vec<Vec<Key>>,
}

impl QueueGrader {
    /// Grades a queue type that can be default-constructed.
    pub fn run<C>(&self) -> GradeResult
    where
        C: Queue<Key> + Default,
    {
        let result = grade_cases(&self.cases, |tally, case| {
            let mut queue = C::default();
            for value in case {
                queue.enqueue(value.clone());
            }
            let peek = queue.peek().cloned();
            let size = queue.size();
            let drained: Vec<Key> = std::iter::from_fn(|| queue.dequeue())
                .take(case.len() + 1)
                .collect();
            check_drain(tally, case, size, peek, drained, case, queue.size());
        });
        result.into_result(&self.req_name, self.out_of)
    }
}

/// Runs `grade_one` on every case, charging a panic as failed checks.
fn grade_cases<F>(cases: &[Vec<Key>], mut grade_one: F) -> Tally
where
    F: FnMut(&mut Tally, &[Key]),
{
    let mut tally = Tally::new();
    for case in cases {
        let before = tally.total();
        let outcome = catch_unwind(AssertUnwindSafe(|| grade_one(&mut tally, case)));
        if outcome.is_err() {
            let remaining = CHECKS_PER_CASE.saturating_sub(tally.total() - before);
            tally.fail_many(remaining, format!("- {}: panicked", describe(case)));
        }
    }
    tally
}

/// Size, peek, drain order, and emptiness after draining.
fn check_drain(
    tally: &mut Tally,
    case: &[Key],
    size: usize,
    peek: Option<Key>,
    drained: Vec<Key>,
    expected: &[Key],
    size_after: usize,
) {
    let name = describe(case);
    tally.check(size == case.len(), || {
        format!("- {name}: size was {size}, expected {}", case.len())
    });
    tally.check(peek.as_ref() == expected.first(), || {
        format!("- {name}: peek gave {peek:?}, expected {:?}", expected.first())
    });
    tally.check(drained == expected, || {
        format!(
            "- {name}: removal order was {}, expected {}",
            describe(&drained),
            describe(expected)
        )
    });
    tally.check(size_after == 0, || {
        format!("- {name}: size was {size_after} after removing everything")
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{RingQueue, VecStack};

    /// Hands values back in insertion order, which is wrong for a stack.
    #[derive(Default)]
    struct FifoStack(std::collections::VecDeque<Key>);

    impl Stack<Key> for FifoStack {
        fn push(&mut self, value: Key) {
            self.0.push_back(value);
        }

        fn pop(&mut self) -> Option<Key> {
            self.0.pop_front()
        }

        fn peek(&self) -> Option<&Key> {
            self.0.front()
        }

        fn size(&self) -> usize {
            self.0.len()
        }
    }

    fn cases() -> Vec<Vec<Key>> {
        vec![vec![], vec![Key::Int(1)], vec![Key::Int(1), Key::Int(2), Key::Int(3)]]
    }

    #[test]
    fn references_get_full_marks() {
        let stack = StackGrader::builder()
            .req_name("stack")
            .out_of(5.0)
            .cases(cases())
            .build()
            .run::<VecStack<Key>>();
        assert!(stack.is_full_marks(), "{}", stack.reason());

        let queue = QueueGrader::builder()
            .req_name("queue")
            .out_of(5.0)
            .cases(cases())
            .build()
            .run::<RingQueue<Key>>();
        assert!(queue.is_full_marks(), "{}", queue.reason());
    }

    #[test]
    fn fifo_stack_loses_marks() {
        let result = StackGrader::builder()
            .req_name("stack")
            .out_of(12.0)
            .cases(cases())
            .build()
            .run::<FifoStack>();
        // peek and drain order fail on the three-element case only
        assert_eq!(result.grade_value(), 10.0);
        assert!(result.reason().contains("removal order"));
    }
}
