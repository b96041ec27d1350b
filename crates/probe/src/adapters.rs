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

//! Limited-access adapters. Only the top (or front) is reachable: no iteration, no lookup.

use crate::{AddFn, Probe};
use std::collections::VecDeque;

/// Last-in, first-out adapter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// First-in, first-out adapter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Probe for Stack<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const PUSH: Option<AddFn<Self>> = Some(Stack::push);
}

impl<T> Probe for Queue<T> {
    type Value = T;
    type Elem = T;
    type Key = T;

    const PUSH: Option<AddFn<Self>> = Some(Queue::push);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, Family, LookupPath};

    #[test]
    fn test_adapters_are_push_only() {
        for caps in [Capabilities::of::<Stack<u8>>(), Capabilities::of::<Queue<u8>>()] {
            assert_eq!(caps.family(), Family::PushOnlyLike);
            assert!(!caps.begin);
            assert_eq!(caps.lookup_path(false), LookupPath::Unsupported);
        }
    }

    #[test]
    fn test_stack_and_queue_order() {
        let mut s = Stack::new();
        let mut q = Queue::new();
        for i in 0..3 {
            s.push(i);
            q.push(i);
        }
        assert_eq!(s.top(), Some(&2));
        assert_eq!(q.front(), Some(&0));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(s.len(), 2);
        assert_eq!(q.len(), 2);
        assert!(!s.is_empty());
    }
}
