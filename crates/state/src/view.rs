// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::roster::Roster;
use plantel_domain::{RosterFilter, Student};

/// Rows per page in the roster list view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One derived page of the filtered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPage {
    /// The students on this page, in server order.
    pub items: Vec<Student>,
    /// The effective zero-based page index (clamped to the last page).
    pub page: usize,
    /// Total number of pages for the current filter.
    pub page_count: usize,
    /// Total number of students matching the current filter.
    pub total_matching: usize,
}

/// Derives a filtered, paginated view from the canonical roster.
///
/// The free-text query and activity filter are applied here, client-side;
/// the server-side filters already shaped the roster at fetch time. The
/// requested page is clamped so narrowing a filter never leaves the view
/// stranded past the last page.
#[must_use]
pub fn paginate(roster: &Roster, filter: &RosterFilter, page_size: usize) -> RosterPage {
    let matching: Vec<&Student> = roster
        .students()
        .iter()
        .filter(|s| filter.matches(s))
        .collect();

    let total_matching: usize = matching.len();
    let page_count: usize = total_matching.div_ceil(page_size.max(1));
    let page: usize = filter.page.min(page_count.saturating_sub(1));

    let items: Vec<Student> = matching
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect();

    RosterPage {
        items,
        page,
        page_count,
        total_matching,
    }
}
