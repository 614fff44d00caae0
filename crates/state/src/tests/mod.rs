// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the state crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod command_tests;
mod helpers;
