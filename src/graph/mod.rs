//! Chord graph — nodes, weighted directed edges, and the derived adjacency view.
//!
//! The adjacency view is always computed from the edge list and never edited
//! directly, so `adjacency.weight(a, b) == Some(w)` holds exactly for the
//! edges `(a -> b, w)` in the graph.

pub mod catalog;
pub mod error;

pub use catalog::build_chord_graph;
pub use error::GraphError;

use serde::{Deserialize, Serialize};

/// A chord in the graph: short identifier, display name and roman-numeral function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordNode {
    /// Short label, e.g. `"Dm"`. Unique within a graph.
    pub id: String,
    /// Human-readable name, e.g. `"D minor"`.
    pub display_name: String,
    /// Harmonic function as a roman numeral, e.g. `"ii"`.
    pub function_label: String,
}

impl ChordNode {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        function_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            function_label: function_label.into(),
        }
    }
}

/// A directed transition between two chords with a positive cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordEdge {
    pub from: String,
    pub to: String,
    /// 1 = strong resolution, 2 = moderate, 3 = weak/distant.
    pub weight: f64,
}

impl ChordEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// An outgoing neighbour of a node in the adjacency view.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour {
    pub id: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct AdjacencyRow {
    node: String,
    neighbours: Vec<Neighbour>,
}

/// Node id → (neighbour id → weight), in insertion order.
///
/// Rows follow node order and every node has a row, even without outgoing
/// edges. Neighbours follow edge-list order. Lookups are linear, which is fine
/// for graphs of a few dozen chords.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Adjacency {
    rows: Vec<AdjacencyRow>,
}

impl Adjacency {
    fn derive(nodes: &[ChordNode], edges: &[ChordEdge]) -> Self {
        let mut rows: Vec<AdjacencyRow> = nodes
            .iter()
            .map(|n| AdjacencyRow {
                node: n.id.clone(),
                neighbours: Vec::new(),
            })
            .collect();

        for edge in edges {
            if let Some(row) = rows.iter_mut().find(|r| r.node == edge.from) {
                row.neighbours.push(Neighbour {
                    id: edge.to.clone(),
                    weight: edge.weight,
                });
            }
        }

        Self { rows }
    }

    /// Whether `id` has a row in the view.
    pub fn contains(&self, id: &str) -> bool {
        self.rows.iter().any(|r| r.node == id)
    }

    /// Outgoing neighbours of `id` in edge order, or `None` for an unknown node.
    pub fn neighbours(&self, id: &str) -> Option<&[Neighbour]> {
        self.rows
            .iter()
            .find(|r| r.node == id)
            .map(|r| r.neighbours.as_slice())
    }

    /// Weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)?
            .iter()
            .find(|n| n.id == to)
            .map(|n| n.weight)
    }

    /// Node ids in row order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.node.as_str())
    }

    /// Total number of neighbour entries across all rows.
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(|r| r.neighbours.len()).sum()
    }
}

/// An immutable chord graph. Serialises as `{ nodes, edges }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordGraph {
    nodes: Vec<ChordNode>,
    edges: Vec<ChordEdge>,
    #[serde(skip)]
    adjacency: Adjacency,
}

impl ChordGraph {
    /// Build a graph from nodes and edges, rejecting duplicate nodes, duplicate
    /// edges, dangling endpoints and non-positive weights.
    pub fn from_parts(nodes: Vec<ChordNode>, edges: Vec<ChordEdge>) -> Result<Self, GraphError> {
        for (i, node) in nodes.iter().enumerate() {
            if nodes[..i].iter().any(|n| n.id == node.id) {
                return Err(GraphError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        for (i, edge) in edges.iter().enumerate() {
            for endpoint in [&edge.from, &edge.to] {
                if !nodes.iter().any(|n| &n.id == endpoint) {
                    return Err(GraphError::UnknownNode {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if !(edge.weight.is_finite() && edge.weight > 0.0) {
                return Err(GraphError::InvalidWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                });
            }
            if edges[..i]
                .iter()
                .any(|e| e.from == edge.from && e.to == edge.to)
            {
                return Err(GraphError::DuplicateEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
        }

        Ok(Self::assemble(nodes, edges))
    }

    /// Derive the adjacency view without validation. Edges from unknown nodes
    /// are left out of the view.
    pub(crate) fn assemble(nodes: Vec<ChordNode>, edges: Vec<ChordEdge>) -> Self {
        let adjacency = Adjacency::derive(&nodes, &edges);
        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    pub fn nodes(&self) -> &[ChordNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[ChordEdge] {
        &self.edges
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: &str) -> Option<&ChordNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Roman-numeral function label of a chord, if it is in the graph.
    pub fn function_label(&self, id: &str) -> Option<&str> {
        self.node(id).map(|n| n.function_label.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Vec<ChordNode>, Vec<ChordEdge>) {
        let nodes = vec![
            ChordNode::new("C", "C Major", "I"),
            ChordNode::new("F", "F Major", "IV"),
            ChordNode::new("G", "G Major", "V"),
        ];
        let edges = vec![
            ChordEdge::new("C", "F", 1.0),
            ChordEdge::new("F", "G", 2.0),
            ChordEdge::new("G", "C", 1.0),
            ChordEdge::new("C", "G", 3.0),
        ];
        (nodes, edges)
    }

    #[test]
    fn adjacency_matches_edges() {
        let (nodes, edges) = triangle();
        let graph = ChordGraph::from_parts(nodes, edges).unwrap();
        for edge in graph.edges() {
            assert_eq!(
                graph.adjacency().weight(&edge.from, &edge.to),
                Some(edge.weight)
            );
        }
        assert_eq!(graph.adjacency().entry_count(), graph.edges().len());
    }

    #[test]
    fn edges_are_directed() {
        let (nodes, edges) = triangle();
        let graph = ChordGraph::from_parts(nodes, edges).unwrap();
        assert_eq!(graph.adjacency().weight("C", "F"), Some(1.0));
        assert_eq!(graph.adjacency().weight("F", "C"), None);
    }

    #[test]
    fn neighbours_keep_edge_order() {
        let (nodes, edges) = triangle();
        let graph = ChordGraph::from_parts(nodes, edges).unwrap();
        let ids: Vec<&str> = graph
            .adjacency()
            .neighbours("C")
            .unwrap()
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["F", "G"]);
    }

    #[test]
    fn node_without_edges_has_empty_row() {
        let (mut nodes, edges) = triangle();
        nodes.push(ChordNode::new("Am", "A minor", "vi"));
        let graph = ChordGraph::from_parts(nodes, edges).unwrap();
        assert!(graph.adjacency().contains("Am"));
        assert_eq!(graph.adjacency().neighbours("Am"), Some(&[][..]));
        assert!(graph.adjacency().neighbours("X").is_none());
    }

    #[test]
    fn rejects_duplicate_node() {
        let (mut nodes, edges) = triangle();
        nodes.push(ChordNode::new("C", "C again", "I"));
        assert_eq!(
            ChordGraph::from_parts(nodes, edges),
            Err(GraphError::DuplicateNode { id: "C".into() })
        );
    }

    #[test]
    fn rejects_duplicate_edge() {
        let (nodes, mut edges) = triangle();
        edges.push(ChordEdge::new("C", "F", 2.0));
        assert_eq!(
            ChordGraph::from_parts(nodes, edges),
            Err(GraphError::DuplicateEdge {
                from: "C".into(),
                to: "F".into()
            })
        );
    }

    #[test]
    fn rejects_dangling_edge() {
        let (nodes, mut edges) = triangle();
        edges.push(ChordEdge::new("C", "Em", 3.0));
        assert!(matches!(
            ChordGraph::from_parts(nodes, edges),
            Err(GraphError::UnknownNode { missing, .. }) if missing == "Em"
        ));
    }

    #[test]
    fn rejects_non_positive_weight() {
        let (nodes, mut edges) = triangle();
        edges.push(ChordEdge::new("F", "C", 0.0));
        assert!(matches!(
            ChordGraph::from_parts(nodes, edges),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn serializes_nodes_and_edges_only() {
        let (nodes, edges) = triangle();
        let graph = ChordGraph::from_parts(nodes, edges).unwrap();
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["nodes"][0]["id"], "C");
        assert_eq!(json["nodes"][0]["displayName"], "C Major");
        assert_eq!(json["nodes"][0]["functionLabel"], "I");
        assert_eq!(json["edges"][1]["from"], "F");
        assert_eq!(json["edges"][1]["weight"], 2.0);
        assert!(json.get("adjacency").is_none());
    }
}
