// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Case- and accent-insensitive text matching for roster search.

/// Folds a string for search comparison.
///
/// Lower-cases and strips the Spanish diacritics that appear in names
/// (`á` → `a`, `ñ` → `n`, `ü` → `u`). This mirrors an NFD
/// strip-combining-marks fold: `ñ` intentionally folds to `n` so a query of
/// "nun" matches "Núñez".
#[must_use]
pub fn fold_for_search(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Checks whether a first or last name matches a free-text query.
///
/// The match is a folded prefix match against either name, per the roster
/// search behavior: typing "gar" finds "García" by last name.
#[must_use]
pub fn name_matches_query(first_name: &str, last_name: &str, query: &str) -> bool {
    let folded_query: String = fold_for_search(query.trim());
    if folded_query.is_empty() {
        return true;
    }
    fold_for_search(first_name).starts_with(&folded_query)
        || fold_for_search(last_name).starts_with(&folded_query)
}
