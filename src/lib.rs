// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphwalk library - spanning trees and shortest paths over weighted graphs
//!
//! This crate reads weighted graphs from a small DOT subset and runs three
//! classic analyses over them: Prim's minimum spanning tree, Bellman-Ford
//! single-source shortest paths with negative-cycle detection, and
//! Floyd-Warshall all-pairs shortest paths with path reconstruction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod analysis;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod reader;
pub mod render;
pub mod report;

/// Core data types shared by the graph model and the engines
pub mod types {
    use serde::{Serialize, Serializer};
    use std::fmt;
    use std::ops::Add;

    /// Integer edge weight (may be negative)
    pub type Weight = i64;

    // =========================================================================
    // Distance
    // =========================================================================

    /// Tentative or final path length
    ///
    /// Every finite distance orders below `Infinite`. Adding a weight to
    /// `Infinite` stays `Infinite`, and finite sums saturate instead of
    /// overflowing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Distance {
        /// Reachable with the given total weight
        Finite(Weight),
        /// Not reachable
        Infinite,
    }

    impl Distance {
        /// Zero-length distance
        pub const ZERO: Self = Self::Finite(0);

        /// Check whether this distance is finite
        #[must_use]
        pub fn is_finite(self) -> bool {
            matches!(self, Self::Finite(_))
        }

        /// Get the finite value, if any
        #[must_use]
        pub fn value(self) -> Option<Weight> {
            match self {
                Self::Finite(d) => Some(d),
                Self::Infinite => None,
            }
        }
    }

    impl Add<Weight> for Distance {
        type Output = Self;

        fn add(self, weight: Weight) -> Self {
            match self {
                Self::Finite(d) => Self::Finite(d.saturating_add(weight)),
                Self::Infinite => Self::Infinite,
            }
        }
    }

    impl Add for Distance {
        type Output = Self;

        fn add(self, other: Self) -> Self {
            match (self, other) {
                (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.saturating_add(b)),
                _ => Self::Infinite,
            }
        }
    }

    impl fmt::Display for Distance {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Finite(d) => fmt::Display::fmt(d, f),
                Self::Infinite => f.pad("∞"),
            }
        }
    }

    impl Serialize for Distance {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Finite(d) => serializer.serialize_i64(*d),
                Self::Infinite => serializer.serialize_none(),
            }
        }
    }

    // =========================================================================
    // Edge
    // =========================================================================

    /// Directed weighted edge between two vertex labels
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct Edge {
        /// Source vertex label
        pub source: String,
        /// Target vertex label
        pub target: String,
        /// Edge weight
        pub weight: Weight,
    }

    impl Edge {
        /// Create a new directed edge
        pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
            Self {
                source: source.into(),
                target: target.into(),
                weight,
            }
        }

        /// The same edge pointing the other way
        #[must_use]
        pub fn reversed(&self) -> Self {
            Self {
                source: self.target.clone(),
                target: self.source.clone(),
                weight: self.weight,
            }
        }
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {}, {})", self.source, self.target, self.weight)
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::algorithms::{AllPairs, ShortestPathTree, SpanningTree};
    pub use crate::error::{GraphError, ParseError};
    pub use crate::graph::Graph;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
