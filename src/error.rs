// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph construction, the engines, and the DOT reader

use thiserror::Error;

/// Errors raised by the graph model and the algorithm engines
///
/// Construction errors abort building the graph. Algorithm errors are
/// local to the single invocation that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge references a vertex outside the vertex set
    #[error("edge {from} -> {to} references unknown vertex '{missing}'")]
    InvalidEdge {
        /// Edge source label
        from: String,
        /// Edge target label
        to: String,
        /// The endpoint that is not a vertex
        missing: String,
    },

    /// The vertex list contains the same label twice
    #[error("duplicate vertex '{0}'")]
    DuplicateVertex(String),

    /// Declared directedness does not match the supplied edges
    #[error("undirected graph is missing reverse edge {to} -> {from} (weight {weight})")]
    GraphTypeMismatch {
        /// Source label of the unmatched edge
        from: String,
        /// Target label of the unmatched edge
        to: String,
        /// Weight of the unmatched edge
        weight: i64,
    },

    /// The algorithm cannot run on this kind of graph
    #[error("{algorithm} cannot run on this graph: {reason}")]
    UnsupportedGraphType {
        /// Algorithm name
        algorithm: &'static str,
        /// Why the graph was rejected
        reason: &'static str,
    },

    /// A vertex label passed to an algorithm is not in the graph
    #[error("unknown vertex '{0}'")]
    UnknownVertex(String),

    /// A negative-weight cycle is reachable from the source
    #[error("graph contains a negative cycle reachable from '{origin}' (edge {from} -> {to} still relaxes)")]
    NegativeCycle {
        /// Source vertex of the run
        origin: String,
        /// Tail of an edge that still relaxes
        from: String,
        /// Head of an edge that still relaxes
        to: String,
    },

    /// The successor matrix walk did not reach its target within |V| steps
    #[error("inconsistent successor matrix: walk from '{from}' to '{to}' does not terminate")]
    InconsistentSuccessors {
        /// Walk origin
        from: String,
        /// Walk target
        to: String,
    },
}

/// Errors raised while reading a DOT graph description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token appeared where it is not allowed
    #[error("{line}:{column}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// What the reader was looking for
        expected: &'static str,
        /// The token text that was found
        found: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Input ended in the middle of a construct
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the reader was looking for
        expected: &'static str,
    },

    /// A quoted identifier was never closed
    #[error("{line}:{column}: unterminated string")]
    UnterminatedString {
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Edge operator does not match the declared graph type
    #[error("{line}:{column}: '{op}' edge in a {kind}; graph type and edge connections don't match")]
    EdgeOpMismatch {
        /// The operator used
        op: &'static str,
        /// "graph" or "digraph"
        kind: &'static str,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// A weight label is not an integer
    #[error("{line}:{column}: invalid weight '{value}'")]
    InvalidWeight {
        /// The label text
        value: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },
}
