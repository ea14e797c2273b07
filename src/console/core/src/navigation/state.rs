//! Immutable navigation history.

use serde::Serialize;

use crate::rbac::ScreenName;

/// A history stack of screens. The top of the stack is the current screen.
///
/// Invariants:
/// - the stack is never empty
/// - no two consecutive entries are equal
/// - the stack never holds more than `max_depth` entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    stack: Vec<ScreenName>,
    #[serde(skip)]
    max_depth: usize,
}

impl NavigationState {
    /// A single-entry stack. A `max_depth` of 0 is treated as 1.
    pub fn new(initial: ScreenName, max_depth: usize) -> Self {
        Self {
            stack: vec![initial],
            max_depth: max_depth.max(1),
        }
    }

    pub fn current(&self) -> ScreenName {
        // Non-empty by construction.
        self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[ScreenName] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Push `screen` unless it is already current.
    ///
    /// When the push exceeds `max_depth`, the oldest entry is dropped.
    pub fn navigate(&self, screen: ScreenName) -> Self {
        if self.current() == screen {
            return self.clone();
        }

        let mut stack = self.stack.clone();
        stack.push(screen);
        if stack.len() > self.max_depth {
            let overflow = stack.len() - self.max_depth;
            stack.drain(..overflow);
        }

        Self {
            stack,
            max_depth: self.max_depth,
        }
    }

    /// Pop the current screen. `None` when only one entry is left.
    pub fn go_back(&self) -> Option<Self> {
        if self.stack.len() <= 1 {
            return None;
        }

        let mut stack = self.stack.clone();
        stack.pop();
        Some(Self {
            stack,
            max_depth: self.max_depth,
        })
    }

    /// Replace the whole history with `screen`.
    pub fn reset(&self, screen: ScreenName) -> Self {
        Self::new(screen, self.max_depth)
    }
}
