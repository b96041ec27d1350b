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

use serde::Serialize;
use std::ops::ControlFlow;

/// Adds one generated value to a container.
pub type AddFn<C> = fn(&mut C, <C as Probe>::Value);

/// Walks every element of a container, stopping early when the visitor breaks.
pub type VisitFn<C> = fn(&C, &mut dyn FnMut(&<C as Probe>::Elem) -> ControlFlow<()>);

/// Native lookup: does the container hold this key.
pub type FindFn<C> = fn(&C, &<C as Probe>::Key) -> bool;

/// Declares which members a container exposes.
///
/// Each probed member is an optional function pointer, absent by default. Declaring a member
/// is all the detection there is: the harness never checks more than the calling shape.
///
/// ```
/// use contrast_probe::{Capabilities, InsertPath, Probe};
///
/// #[derive(Clone, Default)]
/// struct Ring(Vec<u8>);
///
/// impl Probe for Ring {
///     type Value = u8;
///     type Elem = u8;
///     type Key = u8;
///     const PUSH_BACK: Option<contrast_probe::AddFn<Self>> = Some(|r, v| r.0.push(v));
/// }
///
/// assert_eq!(
///     Capabilities::of::<Ring>().insert_path(),
///     Some(InsertPath::PushBack)
/// );
/// ```
pub trait Probe: Sized {
    /// What a generator produces and insertion consumes.
    type Value;
    /// What iteration visits.
    type Elem;
    /// What a native lookup searches for.
    type Key;

    const PUSH: Option<AddFn<Self>> = None;
    const PUSH_BACK: Option<AddFn<Self>> = None;
    const INSERT: Option<AddFn<Self>> = None;
    const BEGIN: Option<VisitFn<Self>> = None;
    const FIND: Option<FindFn<Self>> = None;
}

/// Which probed members a container type exposes. Computed once per type, at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Capabilities {
    pub insert: bool,
    pub push_back: bool,
    pub push: bool,
    pub begin: bool,
    pub find: bool,
}

/// The add-operation selected for insertion benchmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPath {
    /// Limited-access adapters (stacks, queues, heaps).
    Push,
    /// Sequences.
    PushBack,
    /// Associative containers.
    Insert,
}

/// Container family, as seen by the harness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    PushOnlyLike,
    SequenceLike,
    AssociativeLike,
    /// Can be walked but not filled.
    IterableOnly,
    Unsupported,
}

/// How a lookup benchmark is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPath {
    /// Native find using the first field of a pair-shaped value.
    NativeByKey,
    /// Native find using the generated value itself.
    NativeByValue,
    /// No native find; linear scan over the full extent.
    Scan,
    /// Neither find nor iteration.
    Unsupported,
}

impl Capabilities {
    pub const fn of<C: Probe>() -> Self {
        Self {
            insert: C::INSERT.is_some(),
            push_back: C::PUSH_BACK.is_some(),
            push: C::PUSH.is_some(),
            begin: C::BEGIN.is_some(),
            find: C::FIND.is_some(),
        }
    }

    /// Stack/queue adapter. Wins over push_back when both are exposed.
    pub const fn is_push_style(self) -> bool {
        self.push
    }

    pub const fn is_sequence(self) -> bool {
        self.push_back && !self.push
    }

    /// Sequences commonly expose `insert` too, so insert alone only counts when neither
    /// push nor push_back exists.
    pub const fn is_associative(self) -> bool {
        self.insert && !self.push_back && !self.push
    }

    pub const fn insert_path(self) -> Option<InsertPath> {
        if self.is_push_style() {
            Some(InsertPath::Push)
        } else if self.is_sequence() {
            Some(InsertPath::PushBack)
        } else if self.is_associative() {
            Some(InsertPath::Insert)
        } else {
            None
        }
    }

    pub const fn family(self) -> Family {
        match self.insert_path() {
            Some(InsertPath::Push) => Family::PushOnlyLike,
            Some(InsertPath::PushBack) => Family::SequenceLike,
            Some(InsertPath::Insert) => Family::AssociativeLike,
            None if self.begin => Family::IterableOnly,
            None => Family::Unsupported,
        }
    }

    /// `keyed` is whether the query value is pair-shaped; it only matters for native lookups.
    pub const fn lookup_path(self, keyed: bool) -> LookupPath {
        match (self.find, self.begin) {
            (true, _) if keyed => LookupPath::NativeByKey,
            (true, _) => LookupPath::NativeByValue,
            (false, true) => LookupPath::Scan,
            (false, false) => LookupPath::Unsupported,
        }
    }
}

impl InsertPath {
    /// Name of the member this path calls.
    pub const fn member(self) -> &'static str {
        match self {
            InsertPath::Push => "push",
            InsertPath::PushBack => "push_back",
            InsertPath::Insert => "insert",
        }
    }
}

impl LookupPath {
    pub const fn is_native(self) -> bool {
        matches!(self, LookupPath::NativeByKey | LookupPath::NativeByValue)
    }

    pub const fn is_measured(self) -> bool {
        !matches!(self, LookupPath::Unsupported)
    }

    /// Timings from a scan and a native lookup measure different things.
    pub const fn comparable_with(self, other: LookupPath) -> bool {
        self.is_native() == other.is_native()
    }
}

/// Resolves the add-operation for `C`, following [`Capabilities::insert_path`].
///
/// Evaluated in a const context this rejects, at build time, any container with no way to
/// add elements.
pub const fn insert_fn<C: Probe>() -> AddFn<C> {
    match (C::PUSH, C::PUSH_BACK, C::INSERT) {
        (Some(push), _, _) => push,
        (None, Some(push_back), _) => push_back,
        (None, None, Some(insert)) => insert,
        (None, None, None) => panic!("container exposes none of push, push_back or insert"),
    }
}
