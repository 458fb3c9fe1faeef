// Independent handles on one graph capturing at the same time

mod common;

use common::*;
use ontologyops_core::Statement;
use ontologyops_core::vocabulary::rdfs;
use ontologyops_engine::TrackedGraph;
use std::collections::BTreeSet;
use std::thread;

#[test]
fn test_concurrent_captures_all_land() {
    let (_dir, config) = temp_config();
    // Create the namespace and schema before the threads race
    TrackedGraph::open(&config, "shop").unwrap();

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let config = config.clone();
            thread::spawn(move || {
                let mut graph = TrackedGraph::open(&config, "shop").unwrap();
                let mut statements = shop_v1();
                statements.insert(Statement::literal(
                    ex("Product"),
                    rdfs::COMMENT,
                    &format!("variant {}", i % 3),
                ));
                graph
                    .capture(&statements, &format!("writer-{}", i), "concurrent")
                    .unwrap()
            })
        })
        .collect();
    let fingerprints: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let graph = TrackedGraph::open(&config, "shop").unwrap();
    let log = graph.log().unwrap();
    assert_eq!(log.len(), 6);

    let distinct: BTreeSet<_> = fingerprints.iter().collect();
    assert_eq!(distinct.len(), 3);
    for fp in distinct {
        assert!(graph.load(fp).is_ok());
    }
}
