// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the wire-contract crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod csv_tests;
mod dto_tests;
