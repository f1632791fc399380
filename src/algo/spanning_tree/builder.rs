use std::hash::Hash;

use crate::{core::weight::Weight, graph::Graph};

use super::{algo, kruskal, prim, Algo, Error, SpanningTree};

pub struct SpanningTreeBuilder<'a, V, W, A> {
    graph: &'a Graph<V, W>,
    root: Option<V>,
    algo: A,
}

impl<V, W> SpanningTree<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn on(graph: &Graph<V, W>) -> SpanningTreeBuilder<'_, V, W, algo::AnyAlgo> {
        SpanningTreeBuilder {
            graph,
            root: None,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, V, W, A> SpanningTreeBuilder<'a, V, W, A>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn kruskal(self) -> SpanningTreeBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::Kruskal)
    }

    pub fn prim(self) -> SpanningTreeBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::Prim)
    }

    pub fn using(self, algo: Algo) -> SpanningTreeBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using_opt(Some(algo))
    }

    pub fn using_opt(self, algo: Option<Algo>) -> SpanningTreeBuilder<'a, V, W, algo::SpecificAlgo> {
        SpanningTreeBuilder {
            graph: self.graph,
            root: self.root,
            algo: algo::SpecificAlgo(algo),
        }
    }

    fn run_algo(self, algo: Algo) -> Result<SpanningTree<V, W>, Error> {
        let graph = self.graph;

        let root = match &self.root {
            Some(root) => Some(graph.index_of(root).ok_or(Error::UnknownVertex)?),
            None => None,
        };

        debug!(
            ?algo,
            ?root,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "spanning_tree"
        );

        let edges = match algo {
            Algo::Kruskal => kruskal(graph),
            Algo::Prim => prim(graph, root),
        };

        Ok(SpanningTree::from_raw(graph, edges))
    }
}

impl<'a, V, W> SpanningTreeBuilder<'a, V, W, algo::AnyAlgo>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn run(self) -> Result<SpanningTree<V, W>, Error> {
        self.run_algo(Algo::Kruskal)
    }
}

impl<'a, V, W> SpanningTreeBuilder<'a, V, W, algo::SpecificAlgo>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Vertex the tree is grown from. Only [Prim's algorithm](Algo::Prim)
    /// takes it into account, the result is a minimum spanning tree either
    /// way.
    pub fn root(self, root: &V) -> Self {
        Self {
            root: Some(root.clone()),
            ..self
        }
    }

    pub fn run(self) -> Result<SpanningTree<V, W>, Error> {
        let algo = self.algo.0.unwrap_or(Algo::Kruskal);
        self.run_algo(algo)
    }
}
