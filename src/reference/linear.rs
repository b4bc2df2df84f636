#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::VecDeque;

use crate::candidate::{Queue, Stack};

/// A stack backed by a `Vec`, top at the end.
#[derive(Debug, Clone)]
pub struct VecStack<T>(Vec<T>);

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Stack<T> for VecStack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.0.last()
    }

    fn size(&self) -> usize {
        self.0.len()
    }
}

/// A queue backed by a ring buffer, front at index 0.
#[derive(Debug, Clone)]
pub struct RingQueue<T>(VecDeque<T>);

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Queue<T> for RingQueue<T> {
    fn enqueue(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.0.front()
    }

    fn size(&self) -> usize {
        self.0.len()
    }
}
