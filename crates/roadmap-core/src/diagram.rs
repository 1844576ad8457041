//! Positioned diagram output types.
//!
//! [`DiagramGraph`] is the output contract consumed by the rendering layer:
//! nodes carry authoritative positions and per-phase annotations, edges the
//! chain connectivity. Node ids are stable across recomputation for the
//! same phase index, which is what makes position reconciliation possible.

use serde::Serialize;

use crate::geometry::Point;

/// Node id of the synthetic start bookend.
pub const START_ID: &str = "start";

/// Node id of the synthetic end bookend.
pub const END_ID: &str = "end";

/// Returns the stable node id for the phase at `index`.
pub fn phase_id(index: usize) -> String {
    format!("phase-{index}")
}

/// The role a node plays in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    End,
    Phase,
}

/// A positioned diagram node.
///
/// `position` is the authoritative layout coordinate and the only field a
/// user may mutate after creation; everything else is recomputed from the
/// learning-path document on every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramNode {
    pub id: String,
    pub kind: NodeKind,
    pub position: Point,
    pub label: String,
    pub emoji: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<MatchedResource>,
}

/// Rendering weight of an edge. Terminal edges (into the end bookend)
/// render heavier than chain edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeEmphasis {
    Normal,
    Terminal,
}

/// A directed edge between two nodes.
///
/// Edges are fully recomputed on every layout pass and carry no persisted
/// user state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub emphasis: EdgeEmphasis,
    pub animated: bool,
}

/// Whether a matched resource came from the course or certification list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Certification,
}

/// A catalog entry matched to a phase, projected to what the node card
/// needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedResource {
    pub title: String,
    pub url: String,
    pub kind: ResourceKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// A complete positioned graph: the renderable output of the layout
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramGraph {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}
