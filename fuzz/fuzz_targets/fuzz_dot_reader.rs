// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(description) = graphwalk::reader::parse(text) {
            // Anything the reader accepts must build into a graph
            let vertices = description.vertices.len();
            let graph = description.into_graph().expect("reader produced an invalid graph");
            assert_eq!(graph.vertex_count(), vertices);
        }
    }
});
