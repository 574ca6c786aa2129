//! Graph view-model
//!
//! Reshapes backend node/edge lists into the form a force-directed renderer
//! consumes. Initial coordinates and visual weights are cosmetic jitter for
//! layout variety, drawn from a seeded generator so a given document always
//! lays out the same way.

mod cache;

pub use cache::{NodeObject, NodeObjectCache};

use crate::api::kg::GraphData;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Node count above which low render quality truncates the view
pub const LOW_QUALITY_NODE_CAP: usize = 100;

/// Entity type taxonomy; drives color lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Person,
    Organization,
    Location,
    Date,
    Number,
    Product,
    Module,
    Technology,
    Unknown,
}

impl NodeKind {
    /// Parse a backend entity label
    pub fn from_label(label: Option<&str>) -> Self {
        match label.unwrap_or("") {
            "PERSON" => Self::Person,
            "ORG" => Self::Organization,
            "LOCATION" => Self::Location,
            "DATE" => Self::Date,
            "NUMBER" => Self::Number,
            "PRODUCT" => Self::Product,
            "MODULE" => Self::Module,
            "TECH" => Self::Technology,
            _ => Self::Unknown,
        }
    }

    /// Render color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Technology => "#52c41a",
            Self::Organization => "#722ed1",
            Self::Date => "#fa8c16",
            Self::Person => "#eb2f96",
            Self::Location => "#13c2c2",
            Self::Number => "#fadb14",
            Self::Product => "#1890ff",
            Self::Module => "#2f54eb",
            Self::Unknown => "#00d4ff",
        }
    }

    /// Short tag color name for list views
    pub fn tag_color(&self) -> &'static str {
        match self {
            Self::Technology => "green",
            Self::Organization => "purple",
            Self::Date => "orange",
            Self::Person => "magenta",
            Self::Location => "cyan",
            Self::Number => "gold",
            Self::Product => "blue",
            Self::Module => "geekblue",
            Self::Unknown => "blue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Location => "location",
            Self::Date => "date",
            Self::Number => "number",
            Self::Product => "product",
            Self::Module => "module",
            Self::Technology => "technology",
            Self::Unknown => "unknown",
        }
    }
}

/// A renderable node with jittered layout attributes
#[derive(Debug, Clone)]
pub struct ViewNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    /// Visual weight in [1, 5)
    pub weight: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A renderable link
#[derive(Debug, Clone)]
pub struct ViewLink {
    pub source: String,
    pub target: String,
    pub label: String,
    /// Visual strength in [1, 6)
    pub strength: f32,
}

/// Render quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderQuality {
    Low,
    Medium,
    High,
}

impl RenderQuality {
    pub fn cycle(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Render settings controlled from the settings panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub quality: RenderQuality,
    pub show_labels: bool,
    pub node_size: f32,
    pub link_width: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            quality: RenderQuality::High,
            show_labels: true,
            node_size: 2.5,
            link_width: 1.5,
        }
    }
}

/// The subset of a view selected for rendering
#[derive(Debug)]
pub struct VisibleGraph<'a> {
    pub nodes: Vec<&'a ViewNode>,
    pub links: Vec<&'a ViewLink>,
}

/// A document graph reshaped for rendering
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    pub nodes: Vec<ViewNode>,
    pub links: Vec<ViewLink>,
}

impl GraphView {
    /// Build a view from backend graph data with seeded layout jitter
    pub fn build(data: &GraphData, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let nodes = data
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let id = if node.text.is_empty() {
                    format!("node_{}", index)
                } else {
                    node.text.clone()
                };
                ViewNode {
                    name: id.clone(),
                    id,
                    kind: NodeKind::from_label(node.label.as_deref()),
                    weight: rng.gen::<f32>() * 4.0 + 1.0,
                    x: (rng.gen::<f32>() - 0.5) * 200.0,
                    y: (rng.gen::<f32>() - 0.5) * 200.0,
                    z: (rng.gen::<f32>() - 0.5) * 200.0,
                }
            })
            .collect();

        let links = data
            .edges
            .iter()
            .map(|edge| ViewLink {
                source: edge.source.clone(),
                target: edge.target.clone(),
                label: edge
                    .relation
                    .clone()
                    .unwrap_or_else(|| "RELATED".to_string()),
                strength: rng.gen::<f32>() * 5.0 + 1.0,
            })
            .collect();

        Self { nodes, links }
    }

    /// Stable jitter seed for a document
    pub fn seed_for(document_id: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        document_id.hash(&mut hasher);
        hasher.finish()
    }

    /// Select what gets rendered under the given settings.
    ///
    /// Low quality with more than [`LOW_QUALITY_NODE_CAP`] nodes shows only
    /// the first cap-many nodes and edges whose endpoints both survive.
    /// A rendering-cost mitigation; the underlying view is untouched.
    pub fn visible(&self, settings: &RenderSettings) -> VisibleGraph<'_> {
        if settings.quality != RenderQuality::Low || self.nodes.len() <= LOW_QUALITY_NODE_CAP {
            return VisibleGraph {
                nodes: self.nodes.iter().collect(),
                links: self.links.iter().collect(),
            };
        }

        let nodes: Vec<&ViewNode> = self.nodes.iter().take(LOW_QUALITY_NODE_CAP).collect();
        let kept: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let links = self
            .links
            .iter()
            .filter(|l| kept.contains(l.source.as_str()) && kept.contains(l.target.as_str()))
            .collect();

        VisibleGraph { nodes, links }
    }

    /// Node counts per kind, for the legend
    pub fn kind_counts(&self) -> Vec<(NodeKind, usize)> {
        let mut counts: Vec<(NodeKind, usize)> = Vec::new();
        for node in &self.nodes {
            match counts.iter_mut().find(|(k, _)| *k == node.kind) {
                Some((_, c)) => *c += 1,
                None => counts.push((node.kind, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::kg::{GraphEdge, GraphNode};

    fn graph_with(nodes: usize) -> GraphData {
        GraphData {
            nodes: (0..nodes)
                .map(|i| GraphNode {
                    text: format!("n{}", i),
                    label: Some("TECH".to_string()),
                })
                .collect(),
            edges: (0..nodes.saturating_sub(1))
                .map(|i| GraphEdge {
                    source: format!("n{}", i),
                    target: format!("n{}", i + 1),
                    relation: Some("next".to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn taxonomy_covers_backend_labels() {
        assert_eq!(NodeKind::from_label(Some("PERSON")), NodeKind::Person);
        assert_eq!(NodeKind::from_label(Some("ORG")), NodeKind::Organization);
        assert_eq!(NodeKind::from_label(Some("TECH")), NodeKind::Technology);
        assert_eq!(NodeKind::from_label(Some("BOGUS")), NodeKind::Unknown);
        assert_eq!(NodeKind::from_label(None), NodeKind::Unknown);
    }

    #[test]
    fn kind_colors_are_fixed() {
        assert_eq!(NodeKind::Technology.color(), "#52c41a");
        assert_eq!(NodeKind::Person.color(), "#eb2f96");
        assert_eq!(NodeKind::Unknown.color(), "#00d4ff");
    }

    #[test]
    fn jitter_is_reproducible_for_a_seed() {
        let data = graph_with(10);
        let a = GraphView::build(&data, 42);
        let b = GraphView::build(&data, 42);
        for (na, nb) in a.nodes.iter().zip(&b.nodes) {
            assert_eq!(na.x, nb.x);
            assert_eq!(na.weight, nb.weight);
        }

        let c = GraphView::build(&data, 43);
        assert!(a.nodes.iter().zip(&c.nodes).any(|(na, nc)| na.x != nc.x));
    }

    #[test]
    fn jitter_stays_in_range() {
        let view = GraphView::build(&graph_with(200), 7);
        for node in &view.nodes {
            assert!((1.0..5.0).contains(&node.weight));
            assert!((-100.0..100.0).contains(&node.x));
            assert!((-100.0..100.0).contains(&node.y));
            assert!((-100.0..100.0).contains(&node.z));
        }
        for link in &view.links {
            assert!((1.0..6.0).contains(&link.strength));
        }
    }

    #[test]
    fn low_quality_caps_nodes_at_100() {
        let view = GraphView::build(&graph_with(150), 1);
        let settings = RenderSettings {
            quality: RenderQuality::Low,
            ..RenderSettings::default()
        };
        let visible = view.visible(&settings);
        assert_eq!(visible.nodes.len(), 100);

        let kept: std::collections::HashSet<&str> =
            visible.nodes.iter().map(|n| n.id.as_str()).collect();
        for link in &visible.links {
            assert!(kept.contains(link.source.as_str()));
            assert!(kept.contains(link.target.as_str()));
        }
        // The chain edge n99->n100 crosses the cut and must be gone.
        assert!(!visible
            .links
            .iter()
            .any(|l| l.source == "n99" && l.target == "n100"));
    }

    #[test]
    fn high_quality_shows_everything() {
        let view = GraphView::build(&graph_with(150), 1);
        let visible = view.visible(&RenderSettings::default());
        assert_eq!(visible.nodes.len(), 150);
        assert_eq!(visible.links.len(), 149);
    }

    #[test]
    fn low_quality_under_cap_is_untruncated() {
        let view = GraphView::build(&graph_with(80), 1);
        let settings = RenderSettings {
            quality: RenderQuality::Low,
            ..RenderSettings::default()
        };
        assert_eq!(view.visible(&settings).nodes.len(), 80);
    }

    #[test]
    fn seed_for_is_stable() {
        assert_eq!(GraphView::seed_for("doc-1"), GraphView::seed_for("doc-1"));
        assert_ne!(GraphView::seed_for("doc-1"), GraphView::seed_for("doc-2"));
    }
}
