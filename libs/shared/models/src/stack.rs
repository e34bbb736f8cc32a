use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ClinicError;

/// Last-in-first-out container. The top of the stack is the end of the
/// backing vector, so push and pop are amortised O(1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the most recently pushed element. Returns `None` on an empty
    /// stack and leaves it untouched.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        if item.is_none() {
            trace!("pop on empty stack");
        }
        item
    }

    /// Like [`Stack::pop`], but reports the empty case as an error so callers
    /// can propagate it with `?`.
    pub fn try_pop(&mut self) -> Result<T, ClinicError> {
        self.items.pop().ok_or_else(|| ClinicError::empty("stack"))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the top of the stack down, i.e. in pop order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn iter_walks_top_down() {
        let stack: Stack<_> = ["a", "b", "c"].into_iter().collect();
        let order: Vec<_> = stack.iter().copied().collect();

        assert_eq!(order, vec!["c", "b", "a"]);
    }
}
