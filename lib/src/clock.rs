// Copyright 2026 The Minigit Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A seam for injecting a fixed clock in tests. `commit_id` depends on the
//! timestamp string, so scenario tests that assert on commit ids or exact
//! log contents need a clock that doesn't move between calls.

use std::fmt::Debug;

use chrono::Utc;

/// Format fixed by the external contract: `YYYY-MM-DD HH:MM:SS`, UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Clock: Debug {
    fn now(&self) -> String;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock that never advances, for scenario tests that assert on exact
/// commit ids or log contents.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedClock(pub String);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
