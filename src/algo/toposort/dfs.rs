use std::hash::Hash;

use fixedbitset::FixedBitSet;

use crate::{core::weight::Weight, graph::Graph};

pub fn dfs<V, W>(graph: &Graph<V, W>) -> DfsIter<'_, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    debug!(vertices = n, "toposort_dfs");

    DfsIter {
        graph,
        stack: Vec::new(),
        discovered: FixedBitSet::with_capacity(n),
        closed: FixedBitSet::with_capacity(n),
        next_root: 0,
        done: false,
    }
}

pub struct DfsIter<'a, V, W> {
    pub(super) graph: &'a Graph<V, W>,
    // Vertex and the position of the next predecessor to explore.
    stack: Vec<(usize, usize)>,
    discovered: FixedBitSet,
    closed: FixedBitSet,
    next_root: usize,
    done: bool,
}

impl<'a, V, W> Iterator for DfsIter<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Item = Result<usize, (usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        // The traversal goes against the edge directions and reports a vertex
        // when it is closed, that is, when all its predecessors have been
        // reported. This gives the order lazily without reversing a finished
        // postorder at the end. Reaching a vertex that is discovered but not
        // closed means that there is a back edge.
        if self.done {
            return None;
        }

        loop {
            let Some((vertex, pos)) = self.stack.last_mut() else {
                let n = self.graph.vertex_count();

                while self.next_root < n && self.discovered.contains(self.next_root) {
                    self.next_root += 1;
                }

                if self.next_root == n {
                    self.done = true;
                    return None;
                }

                self.discovered.insert(self.next_root);
                self.stack.push((self.next_root, 0));
                continue;
            };

            let vertex = *vertex;
            let incoming = self.graph.incoming_list(vertex);

            match incoming.get(*pos) {
                Some(&(pred, _)) => {
                    *pos += 1;

                    if !self.discovered.contains(pred) {
                        self.discovered.insert(pred);
                        self.stack.push((pred, 0));
                    } else if !self.closed.contains(pred) {
                        self.done = true;
                        return Some(Err((pred, vertex)));
                    }
                }
                None => {
                    self.stack.pop();
                    self.closed.insert(vertex);
                    return Some(Ok(vertex));
                }
            }
        }
    }
}
