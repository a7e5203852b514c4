// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The timelines left behind when drilling down
//!

use serde::{Deserialize, Serialize};
use time_space_core::TimelineContext;

/// LIFO history of [`TimelineContext`]s.  Drilling down pushes the context
/// being left and going back pops it.  Only the navigation state can change it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NavigationStack(Vec<TimelineContext>);

impl NavigationStack {
    pub(crate) fn push(&mut self, context: TimelineContext) {
        self.0.push(context);
    }

    pub(crate) fn pop(&mut self) -> Option<TimelineContext> {
        self.0.pop()
    }

    /// Discard every context (a new top-level location has been loaded)
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// The context that going back would restore
    pub fn peek(&self) -> Option<&TimelineContext> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Oldest (the root) first
    pub fn iter(&self) -> impl Iterator<Item = &TimelineContext> {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time_space_core::{Event, Location};

    fn context(title: &str) -> TimelineContext {
        TimelineContext::drilldown(
            Location::new("Paris", 48.8566, 2.3522),
            Event::new("1889", title, ""),
            vec![],
        )
    }

    #[test]
    fn lifo() {
        let mut stack = NavigationStack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);

        stack.push(context("first"));
        stack.push(context("second"));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek().unwrap().title(), "second");
        assert_eq!(
            stack.iter().map(TimelineContext::title).collect::<Vec<_>>(),
            vec!["first", "second"]
        );

        assert_eq!(stack.pop().unwrap().title(), "second");
        assert_eq!(stack.pop().unwrap().title(), "first");
        assert!(stack.is_empty());
    }

    #[test]
    fn clear() {
        let mut stack = NavigationStack::default();
        stack.push(context("first"));
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }
}
