use std::hash::Hash;

use crate::{core::weight::Weight, graph::Graph};

use super::{algo, dfs::dfs, kahn::kahn, Algo, TopoSort, TopoSortInner};

pub struct TopoSortBuilder<'a, V, W, A> {
    graph: &'a Graph<V, W>,
    algo: A,
}

impl<V, W> TopoSort<'_, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn on(graph: &Graph<V, W>) -> TopoSortBuilder<'_, V, W, algo::AnyAlgo> {
        TopoSortBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, V, W, A> TopoSortBuilder<'a, V, W, A>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn kahn(self) -> TopoSortBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::Kahn)
    }

    pub fn dfs(self) -> TopoSortBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::Dfs)
    }

    pub fn using(self, algo: Algo) -> TopoSortBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using_opt(Some(algo))
    }

    pub fn using_opt(self, algo: Option<Algo>) -> TopoSortBuilder<'a, V, W, algo::SpecificAlgo> {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }

    fn run_algo(self, algo: Algo) -> TopoSort<'a, V, W> {
        let inner = match algo {
            Algo::Kahn => TopoSortInner::Kahn(kahn(self.graph)),
            Algo::Dfs => TopoSortInner::Dfs(dfs(self.graph)),
        };

        TopoSort { inner }
    }
}

impl<'a, V, W> TopoSortBuilder<'a, V, W, algo::AnyAlgo>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn run(self) -> TopoSort<'a, V, W> {
        self.run_algo(Algo::Kahn)
    }
}

impl<'a, V, W> TopoSortBuilder<'a, V, W, algo::SpecificAlgo>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn run(self) -> TopoSort<'a, V, W> {
        let algo = self.algo.0.unwrap_or(Algo::Kahn);
        self.run_algo(algo)
    }
}
