// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use minstant::Instant;
use std::time::Duration;

/// Monotonic timer around a single measured operation.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline(always)]
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }

    /// Runs `f` once, returning how long it took together with its result.
    #[inline(always)]
    pub fn time<R>(f: impl FnOnce() -> R) -> (Duration, R) {
        let watch = Self::start();
        let result = f();
        (watch.stop(), result)
    }
}
