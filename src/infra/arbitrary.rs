use std::{fmt, hash::Hash};

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{error::AddEdgeError, weight::Weight},
    graph::Graph,
};

/// Position of a vertex in insertion order, taken modulo the vertex count
/// at the time the operation is applied.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    pub fn map(self, m: usize) -> Option<Index> {
        self.get(m).map(Index)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum GraphOp<V, W> {
    AddVertex(V),
    AddEdge(Index, Index, W),
}

#[derive(Debug, PartialEq)]
pub enum GraphOpResult<W> {
    AddVertex(bool),
    AddEdge(Result<Option<W>, AddEdgeError<W>>),
    /// Edge operation on a graph without vertices.
    Skipped,
}

impl<V, W> GraphOp<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn apply(self, graph: &mut Graph<V, W>) -> GraphOpResult<W> {
        let n = graph.vertex_count();

        match self {
            GraphOp::AddVertex(label) => GraphOpResult::AddVertex(graph.add_vertex(label)),
            GraphOp::AddEdge(src, dst, weight) => match (src.get(n), dst.get(n)) {
                (Some(u), Some(v)) => {
                    let src = graph.label(u).clone();
                    let dst = graph.label(v).clone();
                    GraphOpResult::AddEdge(graph.add_edge(&src, &dst, weight))
                }
                _ => GraphOpResult::Skipped,
            },
        }
    }
}

pub struct GraphOpsSeq<V, W>(pub Vec<GraphOp<V, W>>);

impl<V, W> IntoIterator for GraphOpsSeq<V, W> {
    type Item = GraphOp<V, W>;
    type IntoIter = std::vec::IntoIter<GraphOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, W> GraphOpsSeq<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    /// Applies the operations while printing them as Rust code, so that a
    /// fuzzer finding can be turned into a regression test.
    pub fn replay(self, graph: &mut Graph<V, W>) {
        println!("let mut graph = Graph::new({});", graph.is_directed());
        println!();

        for op in self {
            let n = graph.vertex_count();

            match &op {
                GraphOp::AddVertex(label) => println!("graph.add_vertex({label:?});"),
                GraphOp::AddEdge(src, dst, weight) => {
                    if let (Some(u), Some(v)) = (src.get(n), dst.get(n)) {
                        println!(
                            "graph.add_edge(&{:?}, &{:?}, {weight:?});",
                            graph.label(u),
                            graph.label(v)
                        );
                    }
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for GraphOpsSeq<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GraphOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    GraphOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_graph_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
}

impl<'a, V, W> Arbitrary<'a> for GraphOpsSeq<V, W>
where
    V: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(10..=1000)?;
        let r = u.nice_f64()?;

        let m_target = ((n_target * (n_target - 1) / 2) as f64 * r).round() as usize;

        let total = u.len();

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let re = (m as f64 / m_target.max(1) as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, rv, re, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                GraphOp::AddVertex(_) => n += 1,
                GraphOp::AddEdge(_, _, _) => m += 1,
            }

            seq.push(op);
        }

        Ok(GraphOpsSeq(seq))
    }
}

fn arbitrary_op<'a, V, W>(
    u: &mut Unstructured<'a>,
    rv: f64,
    re: f64,
    r: f64,
) -> arbitrary::Result<GraphOp<V, W>>
where
    V: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    // The more vertices/edges are in the graph, the less likely another one
    // is added. Edges are less influenced by the overall progress so that
    // they keep coming until the end.
    let wv = non_linear_decrease(0.4 * rv + 0.6 * r);
    let we = non_linear_decrease(0.6 * re + 0.4 * r);

    u.choose_weighted(&[OpKind::AddVertex, OpKind::AddEdge], &[wv, we])
        .and_then(|kind| match kind {
            OpKind::AddVertex => Ok(GraphOp::AddVertex(u.arbitrary()?)),
            OpKind::AddEdge => Ok(GraphOp::AddEdge(
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
            )),
        })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();

        let random = self.nice_f64()?;
        let bound = random * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors can leave `acc` slightly below `bound`.
        choices.last().ok_or(arbitrary::Error::EmptyChoose)
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
