#![no_main]

use libfuzzer_sys::fuzz_target;

use algokit::{
    infra::{arbitrary::GraphOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: GraphOpsSeq<i8, i8>| {
    let mut graph = Graph::new_directed();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
