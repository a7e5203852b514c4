// SPDX-License-Identifier: MIT

//!
//! Limit on the number of events requested/returned
//!

use serde::{Deserialize, Serialize};

/// The number of events requested when no limit is given
pub const DEFAULT_EVENT_LIMIT: u32 = 5;

/// The largest number of events that may be requested at once
pub const MAX_EVENT_LIMIT: u32 = 20;

/// Used to limit the number of events fetched/returned.
///
/// Can easily be destructured, e.g.:
///
/// ```
/// use time_space_core::Limit;
///
/// fn my_func(Limit(limit): Limit) {
///     println!("Limit is {}", limit);
/// }
/// ```
#[derive(Serialize, Deserialize, Hash, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(transparent)]
pub struct Limit(pub u32);

impl Limit {
    /// Whether the limit is within `1..=MAX_EVENT_LIMIT`
    pub fn is_valid(&self) -> bool {
        (1..=MAX_EVENT_LIMIT).contains(&self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit(DEFAULT_EVENT_LIMIT)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validity() {
        assert!(Limit::default().is_valid());
        assert!(Limit(1).is_valid());
        assert!(Limit(MAX_EVENT_LIMIT).is_valid());
        assert!(!Limit(0).is_valid());
        assert!(!Limit(MAX_EVENT_LIMIT + 1).is_valid());
    }
}
