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

use crate::{AddFn, FindFn, Probe, VisitFn};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::hint::black_box;

// Sequences. No member find, so lookups go through the fallback scan. `insert` appends, so a
// sequence also looks associative-capable and push_back has to win.

impl<T> Probe for Vec<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const PUSH_BACK: Option<AddFn<Self>> = Some(Vec::push);
    const INSERT: Option<AddFn<Self>> = Some(|v, value| v.insert(v.len(), value));
    const BEGIN: Option<VisitFn<Self>> = Some(|v, visit| {
        let _ = v.iter().try_for_each(visit);
    });
}

impl<T> Probe for VecDeque<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const PUSH_BACK: Option<AddFn<Self>> = Some(VecDeque::push_back);
    const INSERT: Option<AddFn<Self>> = Some(|d, value| d.insert(d.len(), value));
    const BEGIN: Option<VisitFn<Self>> = Some(|d, visit| {
        let _ = d.iter().try_for_each(visit);
    });
}

impl<T> Probe for LinkedList<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const PUSH_BACK: Option<AddFn<Self>> = Some(LinkedList::push_back);
    const BEGIN: Option<VisitFn<Self>> = Some(|l, visit| {
        let _ = l.iter().try_for_each(visit);
    });
}

// A heap is a push-style container that still allows iteration (in arbitrary order).
impl<T: Ord> Probe for BinaryHeap<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const PUSH: Option<AddFn<Self>> = Some(BinaryHeap::push);
    const BEGIN: Option<VisitFn<Self>> = Some(|h, visit| {
        let _ = h.iter().try_for_each(visit);
    });
}

// Sets.

impl<T: Eq + Hash, S: BuildHasher> Probe for HashSet<T, S> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const INSERT: Option<AddFn<Self>> = Some(|s, value| {
        s.insert(value);
    });
    const BEGIN: Option<VisitFn<Self>> = Some(|s, visit| {
        let _ = s.iter().try_for_each(visit);
    });
    const FIND: Option<FindFn<Self>> = Some(|s, key| s.contains(key));
}

impl<T: Ord> Probe for BTreeSet<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const INSERT: Option<AddFn<Self>> = Some(|s, value| {
        s.insert(value);
    });
    const BEGIN: Option<VisitFn<Self>> = Some(|s, visit| {
        let _ = s.iter().try_for_each(visit);
    });
    const FIND: Option<FindFn<Self>> = Some(|s, key| s.contains(key));
}

// Maps take (key, value) pairs and keep the first value inserted for a key. Iteration visits
// keys and touches each value.

impl<K: Eq + Hash, V, S: BuildHasher> Probe for HashMap<K, V, S> {
    type Value = (K, V);
    type Elem = K;
    type Key = K;

    const INSERT: Option<AddFn<Self>> = Some(|m, (key, value)| {
        m.entry(key).or_insert(value);
    });
    const BEGIN: Option<VisitFn<Self>> = Some(|m, visit| {
        let _ = m.iter().try_for_each(|(key, value)| {
            black_box(value);
            visit(key)
        });
    });
    const FIND: Option<FindFn<Self>> = Some(|m, key| m.contains_key(key));
}

impl<K: Ord, V> Probe for BTreeMap<K, V> {
    type Value = (K, V);
    type Elem = K;
    type Key = K;

    const INSERT: Option<AddFn<Self>> = Some(|m, (key, value)| {
        m.entry(key).or_insert(value);
    });
    const BEGIN: Option<VisitFn<Self>> = Some(|m, visit| {
        let _ = m.iter().try_for_each(|(key, value)| {
            black_box(value);
            visit(key)
        });
    });
    const FIND: Option<FindFn<Self>> = Some(|m, key| m.contains_key(key));
}
