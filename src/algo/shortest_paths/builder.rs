use std::hash::Hash;

use crate::{core::weight::Weight, graph::Graph};

use super::{algo, bellman_ford, bfs, dijkstra, spfa, Algo, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, V, W, A> {
    graph: &'a Graph<V, W>,
    goal: Option<V>,
    algo: A,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn on(graph: &Graph<V, W>) -> ShortestPathsBuilder<'_, V, W, algo::AnyAlgo> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, V, W, A> ShortestPathsBuilder<'a, V, W, A>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Stops the search once the shortest path to `goal` is known. Fails
    /// with [`Error::GoalNotReached`] if there is no such path.
    pub fn goal(self, goal: &V) -> Self {
        Self {
            goal: Some(goal.clone()),
            ..self
        }
    }

    pub fn dijkstra(self) -> ShortestPathsBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::Dijkstra)
    }

    pub fn bellman_ford(self) -> ShortestPathsBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::BellmanFord)
    }

    pub fn spfa(self) -> ShortestPathsBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using(Algo::Spfa)
    }

    /// Ignores the edge weights and counts the edges on the path instead.
    pub fn bfs(self) -> ShortestPathsBuilder<'a, V, W, algo::Bfs> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            algo: algo::Bfs,
        }
    }

    pub fn using(self, algo: Algo) -> ShortestPathsBuilder<'a, V, W, algo::SpecificAlgo> {
        self.using_opt(Some(algo))
    }

    pub fn using_opt(
        self,
        algo: Option<Algo>,
    ) -> ShortestPathsBuilder<'a, V, W, algo::SpecificAlgo> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            algo: algo::SpecificAlgo(algo),
        }
    }

    fn choose_algo(&self) -> Algo {
        if W::is_unsigned() {
            Algo::Dijkstra
        } else if self.graph.is_directed() {
            // There is a possibility that a negative weight is encountered,
            // so, for directed graphs, we conservatively use Bellman-Ford.
            Algo::BellmanFord
        } else {
            // Any negative edge in an undirected graph forms a negative
            // cycle, which is an error for Bellman-Ford as well. Dijkstra
            // reports it as a negative edge and is faster otherwise.
            Algo::Dijkstra
        }
    }

    fn endpoints(&self, source: &V) -> Result<(usize, Option<usize>), Error> {
        let source = self.graph.index_of(source).ok_or(Error::UnknownVertex)?;
        let goal = match &self.goal {
            Some(goal) => Some(self.graph.index_of(goal).ok_or(Error::UnknownVertex)?),
            None => None,
        };

        Ok((source, goal))
    }

    fn run_algo(self, algo: Algo, source: &V) -> Result<ShortestPaths<V, W>, Error> {
        let (source, goal) = self.endpoints(source)?;
        let graph = self.graph;

        debug!(
            ?algo,
            source,
            ?goal,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "shortest_paths"
        );

        let raw = match algo {
            Algo::Dijkstra => dijkstra(graph, source, goal)?,
            Algo::BellmanFord => bellman_ford(graph, source, goal)?,
            Algo::Spfa => spfa(graph, source, goal)?,
        };

        Ok(ShortestPaths::from_raw(graph, source, raw))
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W, algo::AnyAlgo>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn run(self, source: &V) -> Result<ShortestPaths<V, W>, Error> {
        let algo = self.choose_algo();
        self.run_algo(algo, source)
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W, algo::SpecificAlgo>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn run(self, source: &V) -> Result<ShortestPaths<V, W>, Error> {
        let algo = self.algo.0.unwrap_or_else(|| self.choose_algo());
        self.run_algo(algo, source)
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W, algo::Bfs>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn run(self, source: &V) -> Result<ShortestPaths<V, usize>, Error> {
        let (source, goal) = self.endpoints(source)?;
        let graph = self.graph;

        debug!(source, ?goal, vertices = graph.vertex_count(), "shortest_paths_bfs");

        let raw = bfs(graph, source, goal)?;
        Ok(ShortestPaths::from_raw(graph, source, raw))
    }
}
