#![no_main]

use depscope::{
    graph::{algorithms::dijkstra, build_weighted_adjacency},
    EdgeFile, LoaderConfig,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let file = EdgeFile::from_mem(data.to_vec());
    for config in [LoaderConfig::lenient(), LoaderConfig::strict()] {
        let _ = file.edges(&config);
        if let Ok(weighted) = file.weighted_edges(&config) {
            if let Some(first) = weighted.first() {
                let _ = dijkstra(&build_weighted_adjacency(&weighted), first.origin);
            }
        }
    }
});
