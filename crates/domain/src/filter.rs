// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::search::name_matches_query;
use crate::types::{Jornada, Student};

/// Which activity states a roster view includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    /// Only active students (the default view).
    #[default]
    Active,
    /// Only deactivated students.
    Inactive,
    /// Everything.
    All,
}

impl ActivityFilter {
    /// Checks whether a student's active flag passes this filter.
    #[must_use]
    pub const fn includes(&self, is_active: bool) -> bool {
        match self {
            Self::Active => is_active,
            Self::Inactive => !is_active,
            Self::All => true,
        }
    }
}

/// Ephemeral roster view state: filters plus the current page.
///
/// Grade, course and jornada are sent to the server as query parameters;
/// the free-text query and activity filter are applied client-side after
/// fetch. This state is never persisted and resets on navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterFilter {
    /// Grade filter (server-side).
    pub grade: Option<String>,
    /// Course section filter (server-side).
    pub course: Option<String>,
    /// Jornada filter (server-side).
    pub jornada: Option<Jornada>,
    /// Free-text name query (client-side, prefix match, accent-insensitive).
    pub query: String,
    /// Activity filter (client-side).
    pub activity: ActivityFilter,
    /// Current zero-based page.
    pub page: usize,
}

impl RosterFilter {
    /// Returns the `(name, value)` pairs to send as server query parameters.
    ///
    /// Only the server-side filters appear here; the free-text query and the
    /// activity filter never leave the client.
    #[must_use]
    pub fn server_params(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = Vec::new();
        if let Some(grade) = &self.grade {
            params.push(("grado", grade.clone()));
        }
        if let Some(course) = &self.course {
            params.push(("curso", course.clone()));
        }
        if let Some(jornada) = self.jornada {
            params.push(("jornada", jornada.as_str().to_string()));
        }
        params
    }

    /// Applies the client-side part of the filter to one student.
    #[must_use]
    pub fn matches(&self, student: &Student) -> bool {
        self.activity.includes(student.is_active)
            && name_matches_query(&student.first_name, &student.last_name, &self.query)
    }

    /// Returns a copy with the page reset to zero.
    ///
    /// Used whenever a filter input changes, so a narrowed result set never
    /// starts on a page past its end.
    #[must_use]
    pub fn on_first_page(mut self) -> Self {
        self.page = 0;
        self
    }
}
