// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use graphwalk::algorithms::{bellman_ford, floyd_warshall, prim};
use graphwalk::graph::Graph;
use graphwalk::types::Edge;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    directed: bool,
    vertices: u8,
    edges: Vec<(u8, u8, i32)>,
}

fuzz_target!(|input: Input| {
    let n = usize::from(input.vertices % 12) + 1;
    let names: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
    let mut edges = Vec::new();
    for (u, v, w) in input.edges.into_iter().take(64) {
        let (u, v) = (usize::from(u) % n, usize::from(v) % n);
        edges.push(Edge::new(names[u].clone(), names[v].clone(), i64::from(w)));
        if !input.directed {
            edges.push(Edge::new(names[v].clone(), names[u].clone(), i64::from(w)));
        }
    }
    let graph = Graph::build(names.clone(), edges, input.directed).expect("generated graph is valid");

    if !graph.is_directed() {
        let tree = prim(&graph).expect("prim runs on undirected graphs");
        assert!(tree.edges.len() < n);
    }
    let _ = bellman_ford(&graph, &names[0]);

    // Without a negative cycle every successor walk must terminate
    let all = floyd_warshall(&graph);
    if !all.has_negative_cycle() {
        for u in &names {
            for v in &names {
                all.reconstruct(u, v).expect("successor walk terminates");
            }
        }
    }
});
