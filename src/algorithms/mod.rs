// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Algorithm engines over the immutable graph model
//!
//! Each engine borrows the graph read-only and returns an owned result
//! with no back-reference to it.

pub mod bellman_ford;
pub mod floyd_warshall;
pub mod prim;
pub mod reconstruct;

pub use bellman_ford::{bellman_ford, PathEntry, ShortestPathTree};
pub use floyd_warshall::{floyd_warshall, AllPairs};
pub use prim::{prim, SpanningTree};
