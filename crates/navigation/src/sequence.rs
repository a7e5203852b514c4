// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Request IDs used to drop stale responses
//!

use serde::{Deserialize, Serialize};

/// Identifies one request.  IDs are issued in increasing order.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

/// Issues [`RequestId`]s and remembers the latest one of each category.
///
/// There are two independent categories: primary fetches (a location's
/// timeline or a drill-down) and location searches.  A response is applied
/// only if its ID is the latest of its category.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    /// The last ID issued (of either category)
    last_issued: u64,

    latest_primary: Option<RequestId>,

    latest_search: Option<RequestId>,
}

impl RequestSequence {
    fn issue(&mut self) -> RequestId {
        self.last_issued += 1;
        RequestId(self.last_issued)
    }

    /// Issue an ID for a primary fetch, superseding any earlier one
    pub fn issue_primary(&mut self) -> RequestId {
        let id = self.issue();
        self.latest_primary = Some(id);
        id
    }

    /// Issue an ID for a search, superseding any earlier one
    pub fn issue_search(&mut self) -> RequestId {
        let id = self.issue();
        self.latest_search = Some(id);
        id
    }

    pub fn is_latest_primary(&self, id: RequestId) -> bool {
        self.latest_primary == Some(id)
    }

    pub fn is_latest_search(&self, id: RequestId) -> bool {
        self.latest_search == Some(id)
    }

    /// Make any in-flight primary fetch stale
    pub fn invalidate_primary(&mut self) {
        self.latest_primary = None;
    }

    /// Make any in-flight search stale
    pub fn invalidate_search(&mut self) {
        self.latest_search = None;
    }
}
