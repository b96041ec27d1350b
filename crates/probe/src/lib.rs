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

//! Capability probes for container types.
//!
//! A container states which members it exposes by implementing [`Probe`]. Everything the
//! benchmark harness needs to know about a container is derived from those declarations at
//! compile time:
//! - [`Capabilities`], the descriptor of exposed members
//! - [`InsertPath`], the single add-operation used for insertion (push, then push_back, then insert)
//! - [`Family`], the container family tag
//! - [`LookupPath`], how lookups are performed (native find, fallback scan, or not at all)
//!
//! Generated values are classified by [`Shape`], and turned into lookup keys by [`Query`].

mod adapters;
mod capabilities;
mod shape;
mod std_impls;

pub use adapters::{Queue, Stack};
pub use capabilities::{
    AddFn, Capabilities, Family, FindFn, InsertPath, LookupPath, Probe, VisitFn, insert_fn,
};
pub use shape::{Query, Shape, is_pair_shaped};
