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

//! The timed operations. Each wraps exactly one primitive, repeated `n` times where it makes
//! sense, in a monotonic clock measurement.

use crate::{Measurement, Stopwatch};
use contrast_probe::{Capabilities, LookupPath, Probe, Query, insert_fn};
use serde::Serialize;
use std::any::type_name;
use std::hint::black_box;
use std::ops::ControlFlow;
use tracing::{debug, warn};

/// Result of an iteration benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Iteration {
    pub measurement: Measurement,
    pub visited: usize,
}

/// Result of a lookup benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Lookup {
    pub measurement: Measurement,
    pub path: LookupPath,
    /// How many of the `n` lookups found something.
    pub hits: usize,
}

/// Calls `generator` `n` times, adding each value through the container's push, push_back or
/// insert member, in that order of preference.
///
/// A container with none of the three does not build:
///
/// ```compile_fail
/// use contrast_harness::{Probe, insert};
///
/// struct ReadOnly;
///
/// impl Probe for ReadOnly {
///     type Value = u8;
///     type Elem = u8;
///     type Key = u8;
/// }
///
/// insert(&mut ReadOnly, || 1u8, 10);
/// ```
pub fn insert<C, G>(container: &mut C, mut generator: G, n: usize) -> Measurement
where
    C: Probe,
    G: FnMut() -> C::Value,
{
    let add = const { insert_fn::<C>() };
    let path = const { Capabilities::of::<C>().insert_path() };

    let watch = Stopwatch::start();
    for _ in 0..n {
        add(container, generator());
    }
    let elapsed = watch.stop();

    debug!(
        container = type_name::<C>(),
        member = path.map(|p| p.member()),
        n,
        seconds = elapsed.as_secs_f64(),
        "insert"
    );
    Measurement::Measured(elapsed)
}

/// Walks every element once.
pub fn iterate<C: Probe>(container: &C) -> Iteration {
    let Some(visit) = C::BEGIN else {
        warn!(container = type_name::<C>(), "no begin() member, iteration not measured");
        return Iteration {
            measurement: Measurement::NotApplicable,
            visited: 0,
        };
    };

    let mut visited = 0usize;
    let watch = Stopwatch::start();
    visit(container, &mut |elem| {
        black_box(elem);
        visited += 1;
        ControlFlow::Continue(())
    });
    let elapsed = watch.stop();

    debug!(
        container = type_name::<C>(),
        visited,
        seconds = elapsed.as_secs_f64(),
        "iterate"
    );
    Iteration {
        measurement: Measurement::Measured(elapsed),
        visited,
    }
}

/// Times a full clone. The duplicate is dropped after the clock stops.
pub fn copy<C: Clone>(container: &C) -> Measurement {
    let (measurement, duplicate) = duplicate(container);
    drop(duplicate);
    measurement
}

pub(crate) fn duplicate<C: Clone>(container: &C) -> (Measurement, C) {
    let (elapsed, duplicate) = Stopwatch::time(|| black_box(container.clone()));
    debug!(
        container = type_name::<C>(),
        seconds = elapsed.as_secs_f64(),
        "copy"
    );
    (Measurement::Measured(elapsed), duplicate)
}

/// Times moving the container's storage into a new owner. The source is left empty and
/// should not be benchmarked again; the new owner is handed back to the caller.
pub fn move_out<C: Default>(container: &mut C) -> (Measurement, C) {
    let (elapsed, moved) = Stopwatch::time(|| black_box(std::mem::take(container)));
    debug!(
        container = type_name::<C>(),
        seconds = elapsed.as_secs_f64(),
        "move"
    );
    (Measurement::Measured(elapsed), moved)
}

/// Performs `n` lookups of generated values.
///
/// A native find is used when the container has one, by first field for pair-shaped values
/// and by value otherwise. Without one, an iterable container is scanned linearly, which is
/// reported as [`LookupPath::Scan`] and must not be compared against native lookup timings.
pub fn find<C, G, Q>(container: &C, mut generator: G, n: usize) -> Lookup
where
    C: Probe,
    G: FnMut() -> Q,
    Q: Query<C::Key, C::Elem>,
{
    let caps = const { Capabilities::of::<C>() };
    let path = caps.lookup_path(Q::KEYED);
    let mut hits = 0usize;

    let watch = match (C::FIND, C::BEGIN) {
        (Some(native), _) => {
            let watch = Stopwatch::start();
            for _ in 0..n {
                let key = generator().into_key();
                if native(container, black_box(&key)) {
                    hits += 1;
                }
            }
            watch
        }
        (None, Some(visit)) => {
            warn!(
                container = type_name::<C>(),
                "no find() member, falling back to a linear scan"
            );
            let watch = Stopwatch::start();
            for _ in 0..n {
                let query = generator();
                let mut found = false;
                visit(container, &mut |elem| {
                    if query.matches(elem) {
                        found = true;
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                });
                if found {
                    hits += 1;
                }
            }
            watch
        }
        (None, None) => {
            warn!(
                container = type_name::<C>(),
                "no find() or begin() member, lookup not measured"
            );
            return Lookup {
                measurement: Measurement::NotApplicable,
                path,
                hits: 0,
            };
        }
    };
    let elapsed = watch.stop();

    debug!(
        container = type_name::<C>(),
        ?path,
        n,
        hits,
        seconds = elapsed.as_secs_f64(),
        "find"
    );
    Lookup {
        measurement: Measurement::Measured(elapsed),
        path,
        hits,
    }
}
