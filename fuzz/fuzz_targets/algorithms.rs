#![no_main]

use libfuzzer_sys::fuzz_target;

use algokit::{algo, infra::arbitrary::GraphOpsSeq, Graph};

fuzz_target!(|input: (bool, GraphOpsSeq<i8, i8>)| {
    let (directed, ops) = input;

    let mut raw = Graph::new(directed);
    for op in ops {
        op.apply(&mut raw);
    }

    // Widen the weights so that path lengths do not overflow.
    let mut graph = Graph::<i8, i32>::new(directed);
    graph.extend_with_vertices(raw.vertices().copied());
    for edge in raw.edges() {
        graph
            .add_edge(edge.src, edge.dst, i32::from(*edge.weight).abs())
            .unwrap();
    }

    if let Some(source) = graph.vertices().next().copied() {
        let dijkstra = algo::dijkstra(&graph, &source).unwrap();
        let bellman_ford = algo::bellman_ford(&graph, &source).unwrap();
        let spfa = algo::spfa(&graph, &source).unwrap();

        for v in graph.vertices() {
            assert_eq!(dijkstra.dist(v), bellman_ford.dist(v));
            assert_eq!(dijkstra.dist(v), spfa.dist(v));
        }
    }

    let kruskal = algo::kruskal(&graph);
    let prim = algo::prim(&graph);
    assert_eq!(kruskal.total_weight(), prim.total_weight());
    assert_eq!(kruskal.edge_count(), prim.edge_count());

    // Every undirected edge fails the sort, but only some form a cycle.
    if directed {
        assert_eq!(
            algo::topological_sort(&graph).is_err(),
            algo::is_cyclic(&graph)
        );
    }

    if let Some(path) = algo::euler_path(&graph) {
        if !graph.is_empty() {
            assert_eq!(path.len(), graph.edge_count() + 1);
        }
    }
});
