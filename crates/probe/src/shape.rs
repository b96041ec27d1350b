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

//! Shape of generated values.
//!
//! A value is pair-shaped when it is not a primitive scalar and exposes both a first and a
//! second field. Pair-shaped values are looked up by their first field (the key).

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

pub trait Shape {
    /// Primitive scalar. A fundamental type is never pair-shaped.
    const FUNDAMENTAL: bool = false;
    const HAS_FIRST: bool = false;
    const HAS_SECOND: bool = false;
}

pub const fn is_pair_shaped<T: Shape + ?Sized>() -> bool {
    !T::FUNDAMENTAL && T::HAS_FIRST && T::HAS_SECOND
}

/// Turns a generated value into something a container of keys `K` and elements `E` can be
/// searched with.
pub trait Query<K, E>: Shape + Sized {
    /// Native lookups use the first field rather than the whole value.
    const KEYED: bool;

    fn into_key(self) -> K;

    /// Fallback scan predicate.
    fn matches(&self, elem: &E) -> bool;
}

impl<T: Shape + PartialEq> Query<T, T> for T {
    const KEYED: bool = false;

    fn into_key(self) -> T {
        self
    }

    fn matches(&self, elem: &T) -> bool {
        elem == self
    }
}

impl<A: PartialEq, B> Query<A, A> for (A, B) {
    const KEYED: bool = is_pair_shaped::<(A, B)>();

    fn into_key(self) -> A {
        self.0
    }

    fn matches(&self, elem: &A) -> bool {
        *elem == self.0
    }
}

impl<A, B> Shape for (A, B) {
    const HAS_FIRST: bool = true;
    const HAS_SECOND: bool = true;
}

macro_rules! fundamental {
    ($($t:ty),* $(,)?) => {
        $(impl Shape for $t {
            const FUNDAMENTAL: bool = true;
        })*
    };
}

fundamental!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

impl Shape for str {}
impl Shape for String {}
impl<T: ?Sized> Shape for &T {}
impl<T: ?Sized> Shape for Box<T> {}
impl<T: ?Sized> Shape for Rc<T> {}
impl<T: ?Sized> Shape for Arc<T> {}
impl<T: ?Sized + ToOwned> Shape for Cow<'_, T> {}
impl<T> Shape for Option<T> {}
impl<T> Shape for Vec<T> {}
impl<T> Shape for VecDeque<T> {}
impl<T, const N: usize> Shape for [T; N] {}
impl<T, S> Shape for HashSet<T, S> {}
impl<T> Shape for BTreeSet<T> {}
impl<K, V, S> Shape for HashMap<K, V, S> {}
impl<K, V> Shape for BTreeMap<K, V> {}
