use std::{fmt, hash::Hash};

use proptest::{
    collection,
    prelude::*,
    strategy::{NewTree, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{core::weight::Weight, graph::Graph};

pub fn graph_undirected<V: Strategy, W: Strategy>(vertex: V, weight: W) -> GraphStrategy<V, W> {
    GraphStrategy::new(vertex, weight, false)
}

pub fn graph_directed<V: Strategy, W: Strategy>(vertex: V, weight: W) -> GraphStrategy<V, W> {
    GraphStrategy::new(vertex, weight, true)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyParams {
    max_size: usize,
    edge_factor: usize,
    acyclic: bool,
    connected: bool,
    allow_loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            edge_factor: 3,
            acyclic: false,
            connected: false,
            allow_loops: false,
        }
    }
}

impl StrategyParams {
    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Edges only go from a vertex to a vertex added later, so a directed
    /// graph has no cycle.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    /// Every vertex is reachable from the first one.
    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }
}

pub struct GraphStrategy<V, W> {
    vertex: V,
    weight: W,
    directed: bool,
    params: StrategyParams,
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for GraphStrategy<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("vertex", &self.vertex)
            .field("weight", &self.weight)
            .field("directed", &self.directed)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<V: Strategy, W: Strategy> GraphStrategy<V, W> {
    pub fn new(vertex: V, weight: W, directed: bool) -> Self {
        Self {
            vertex,
            weight,
            directed,
            params: StrategyParams::default(),
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed(any::<u8>(), 0..10u32).max_size(16).acyclic()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(connected);
    delegate_builder_fn!(allow_loops);
}

type Edges<W> = Vec<(usize, usize, W)>;
type Links<W> = Vec<(usize, W)>;

impl<V, W> GraphStrategy<V, W>
where
    V: Strategy + Clone + 'static,
    V::Value: Eq + Hash + Clone,
    W: Strategy + Clone + 'static,
    W::Value: Weight,
{
    fn build(&self) -> BoxedStrategy<Graph<V::Value, W::Value>> {
        let params = self.params;
        let directed = self.directed;
        let weight = self.weight.clone();

        collection::vec(self.vertex.clone(), 0..=params.max_size)
            .prop_map(|labels| {
                let mut seen = FxHashSet::default();
                labels
                    .into_iter()
                    .filter(|label| seen.insert(label.clone()))
                    .collect::<Vec<_>>()
            })
            .prop_flat_map(move |labels| {
                let n = labels.len();
                let bound = n.max(1);
                let max_edges = if n == 0 { 0 } else { params.edge_factor * n };

                let edges = collection::vec((0..bound, 0..bound, weight.clone()), 0..=max_edges);
                let links = collection::vec((any::<usize>(), weight.clone()), n);

                (Just(labels), edges, links)
            })
            .prop_map(move |(labels, edges, links): (Vec<V::Value>, Edges<W::Value>, Links<W::Value>)| {
                let mut graph = Graph::with_capacity(directed, labels.len(), edges.len());
                graph.extend_with_vertices(labels.iter().cloned());

                for (u, v, weight) in edges {
                    let (u, v) = if params.acyclic { (u.min(v), u.max(v)) } else { (u, v) };

                    if u == v && (params.acyclic || !params.allow_loops) {
                        continue;
                    }

                    let _ = graph.add_edge(&labels[u], &labels[v], weight);
                }

                if params.connected {
                    // Link every vertex to some earlier one, unless it
                    // already has an edge from an earlier vertex.
                    for (v, (r, weight)) in links.into_iter().enumerate().skip(1) {
                        let u = r % v;
                        if graph.edge(&labels[u], &labels[v]).is_none() {
                            let _ = graph.add_edge(&labels[u], &labels[v], weight);
                        }
                    }
                }

                graph
            })
            .boxed()
    }
}

impl<V, W> Strategy for GraphStrategy<V, W>
where
    V: Strategy + Clone + 'static,
    V::Value: Eq + Hash + Clone,
    W: Strategy + Clone + 'static,
    W::Value: Weight,
{
    type Tree = Box<dyn ValueTree<Value = Self::Value>>;
    type Value = Graph<V::Value, W::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}
