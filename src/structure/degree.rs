use crate::matrix::RelationMatrix;
use log::debug;

/// Degrees of a directed graph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DirectedDegrees {
    pub in_degrees: Vec<usize>,
    pub out_degrees: Vec<usize>,
    /// `in_degree + out_degree` (a self-loop contributes to both).
    pub total_degrees: Vec<usize>,
}

/// Degrees of an undirected graph, where the degree of a vertex is its row sum.
#[derive(Clone, PartialEq, Debug)]
pub struct UndirectedDegrees {
    pub degrees: Vec<usize>,
    pub degree_sum: usize,
    pub special: SpecialVertices,
}

/// Vertices with notable degrees, plus basic degree statistics.
#[derive(Clone, PartialEq, Debug)]
pub struct SpecialVertices {
    /// Vertices of degree `0`.
    pub isolated: Vec<usize>,
    /// Vertices of degree `1`.
    pub pendant: Vec<usize>,
    pub max_degree: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree_vertices: Vec<usize>,
    pub min_degree_vertices: Vec<usize>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DegreeReport {
    Directed(DirectedDegrees),
    Undirected(UndirectedDegrees),
}

/// Compute vertex degrees of `graph`.
///
/// For directed graphs, the in-degree of a vertex is its column sum and the out-degree is its
/// row sum. For undirected graphs, the degree is the row sum, so a self-loop counts once.
pub fn vertex_degrees(graph: &RelationMatrix, directed: bool) -> DegreeReport {
    let vertices = 0..graph.size();
    if directed {
        let in_degrees: Vec<usize> = vertices.clone().map(|v| graph.in_degree(v)).collect();
        let out_degrees: Vec<usize> = vertices.map(|v| graph.out_degree(v)).collect();
        let total_degrees = in_degrees
            .iter()
            .zip(&out_degrees)
            .map(|(i, o)| i + o)
            .collect();
        DegreeReport::Directed(DirectedDegrees {
            in_degrees,
            out_degrees,
            total_degrees,
        })
    } else {
        let degrees: Vec<usize> = vertices.map(|v| graph.out_degree(v)).collect();
        let degree_sum = degrees.iter().sum();
        let special = SpecialVertices::from(degrees.as_slice());
        debug!(
            "Undirected degrees {:?}; sum={}, isolated={:?}, pendant={:?}.",
            degrees, degree_sum, special.isolated, special.pendant
        );
        DegreeReport::Undirected(UndirectedDegrees {
            degrees,
            degree_sum,
            special,
        })
    }
}

impl From<&[usize]> for SpecialVertices {
    fn from(degrees: &[usize]) -> Self {
        let with_degree = |d: usize| -> Vec<usize> {
            (0..degrees.len()).filter(|v| degrees[*v] == d).collect()
        };
        let max_degree = degrees.iter().copied().max().unwrap_or(0);
        let min_degree = degrees.iter().copied().min().unwrap_or(0);
        let avg_degree = if degrees.is_empty() {
            0.0
        } else {
            degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
        };
        SpecialVertices {
            isolated: with_degree(0),
            pendant: with_degree(1),
            max_degree,
            min_degree,
            avg_degree,
            max_degree_vertices: with_degree(max_degree),
            min_degree_vertices: with_degree(min_degree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DegreeReport, vertex_degrees};
    use crate::test_utils::mk_relation;

    #[test]
    fn directed_degrees() {
        let graph = mk_relation(&[[0, 1, 1], [0, 0, 1], [1, 0, 1]]);
        let DegreeReport::Directed(degrees) = vertex_degrees(&graph, true) else {
            panic!("Expected directed degrees.");
        };
        assert_eq!(degrees.out_degrees, vec![2, 1, 2]);
        assert_eq!(degrees.in_degrees, vec![1, 1, 3]);
        assert_eq!(degrees.total_degrees, vec![3, 2, 5]);
    }

    #[test]
    fn undirected_degrees_and_special_vertices() {
        // A - B - C, D isolated, self-loop on C.
        let graph = mk_relation(&[[0, 1, 0, 0], [1, 0, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]);
        let DegreeReport::Undirected(degrees) = vertex_degrees(&graph, false) else {
            panic!("Expected undirected degrees.");
        };
        assert_eq!(degrees.degrees, vec![1, 2, 2, 0]);
        assert_eq!(degrees.degree_sum, 5);
        let special = degrees.special;
        assert_eq!(special.isolated, vec![3]);
        assert_eq!(special.pendant, vec![0]);
        assert_eq!(special.max_degree, 2);
        assert_eq!(special.min_degree, 0);
        assert_eq!(special.max_degree_vertices, vec![1, 2]);
        assert_eq!(special.min_degree_vertices, vec![3]);
        assert_eq!(special.avg_degree, 1.25);
    }

    #[test]
    fn handshake_without_loops() {
        let graph = mk_relation(&[[0, 1, 1], [1, 0, 1], [1, 1, 0]]);
        let DegreeReport::Undirected(degrees) = vertex_degrees(&graph, false) else {
            panic!("Expected undirected degrees.");
        };
        // Three undirected edges.
        assert_eq!(degrees.degree_sum, 2 * 3);
        assert!(degrees.special.isolated.is_empty());
        assert!(degrees.special.pendant.is_empty());
    }
}
