use crate::algebra::complement;
use crate::matrix::RelationMatrix;
use log::info;

/// Summary properties of a graph, used to compare a graph with its complement.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphProperties {
    /// Undirected graphs count every edge once (a self-loop is one edge).
    pub edge_count: usize,
    /// `n(n-1)/2` (undirected) or `n(n-1)` (directed), plus `n` when self-loops are present.
    pub max_edges: usize,
    /// `edge_count / max_edges`.
    pub density: f64,
    pub avg_degree: f64,
    pub has_self_loops: bool,
    pub is_undirected: bool,
    /// Every pair of distinct vertices is connected.
    pub is_complete: bool,
    /// Row sums (undirected) or `in + out` degrees (directed).
    pub degrees: Vec<usize>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ComplementComparison {
    pub complement: RelationMatrix,
    pub original: GraphProperties,
    pub complement_properties: GraphProperties,
}

impl From<&RelationMatrix> for GraphProperties {
    fn from(graph: &RelationMatrix) -> Self {
        let n = graph.size();
        let is_undirected = graph.is_symmetric();
        let has_self_loops = graph.has_self_loops();
        let loops = (0..n).filter(|v| graph.get(*v, *v)).count();
        let non_loops = graph.pair_count() - loops;

        let (edge_count, mut max_edges) = if is_undirected {
            (non_loops / 2 + loops, n * (n - 1) / 2)
        } else {
            (non_loops + loops, n * (n - 1))
        };
        if has_self_loops {
            max_edges += n;
        }

        let degrees: Vec<usize> = (0..n)
            .map(|v| {
                if is_undirected {
                    graph.out_degree(v)
                } else {
                    graph.out_degree(v) + graph.in_degree(v)
                }
            })
            .collect();

        GraphProperties {
            edge_count,
            max_edges,
            density: if max_edges == 0 {
                0.0
            } else {
                edge_count as f64 / max_edges as f64
            },
            avg_degree: degrees.iter().sum::<usize>() as f64 / n as f64,
            has_self_loops,
            is_undirected,
            is_complete: non_loops == n * (n - 1),
            degrees,
        }
    }
}

/// Compute the complement of `graph` and the properties of both graphs.
pub fn compare_with_complement(graph: &RelationMatrix) -> ComplementComparison {
    let complement = complement(graph);
    let original = GraphProperties::from(graph);
    let complement_properties = GraphProperties::from(&complement);
    info!(
        "Graph has {} edges, its complement has {} edges.",
        original.edge_count, complement_properties.edge_count
    );
    ComplementComparison {
        complement,
        original,
        complement_properties,
    }
}
