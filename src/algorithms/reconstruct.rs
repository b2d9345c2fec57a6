// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path reconstruction from the Floyd-Warshall successor matrix

use super::floyd_warshall::AllPairs;
use crate::error::GraphError;
use std::collections::BTreeSet;

impl AllPairs {
    /// Reconstruct the shortest path from `from` to `to`
    ///
    /// Returns an empty sequence when no path exists and `[from]` when
    /// both ends are the same vertex. The walk takes at most |V| steps.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` for a label outside the matrices and
    /// `InconsistentSuccessors` when the walk does not reach `to`.
    pub fn reconstruct(&self, from: &str, to: &str) -> Result<Vec<String>, GraphError> {
        let start = self
            .position(from)
            .ok_or_else(|| GraphError::UnknownVertex(from.to_string()))?;
        let target = self
            .position(to)
            .ok_or_else(|| GraphError::UnknownVertex(to.to_string()))?;

        Ok(self
            .walk(start, target)?
            .into_iter()
            .map(|i| self.vertices[i].clone())
            .collect())
    }

    /// Vertex positions along the path from `start` to `target`
    fn walk(&self, start: usize, target: usize) -> Result<Vec<usize>, GraphError> {
        if self.next[start][target].is_none() {
            return Ok(Vec::new());
        }

        let mut path = vec![start];
        let mut current = start;
        while current != target {
            // A simple path visits each vertex at most once
            if path.len() > self.len() {
                return Err(self.inconsistent(start, target));
            }
            current = self.next[current][target].ok_or_else(|| self.inconsistent(start, target))?;
            path.push(current);
        }
        Ok(path)
    }

    /// Edges used by the shortest paths from `source` to every reachable vertex
    ///
    /// # Errors
    ///
    /// Same as [`AllPairs::reconstruct`].
    pub fn path_edges_from(&self, source: &str) -> Result<BTreeSet<(String, String)>, GraphError> {
        let start = self
            .position(source)
            .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;

        let mut used = BTreeSet::new();
        for target in 0..self.len() {
            if target == start || !self.dist[start][target].is_finite() {
                continue;
            }
            let path = self.walk(start, target)?;
            for hop in path.windows(2) {
                used.insert((self.vertices[hop[0]].clone(), self.vertices[hop[1]].clone()));
            }
        }
        Ok(used)
    }

    fn inconsistent(&self, start: usize, target: usize) -> GraphError {
        GraphError::InconsistentSuccessors {
            from: self.vertices[start].clone(),
            to: self.vertices[target].clone(),
        }
    }
}
