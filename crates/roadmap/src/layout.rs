//! Layout engine for the phase chain.
//!
//! Converts a learning-path document into a positioned node/edge graph.
//! The domain is a strict linear sequence (one career phase follows
//! another), so layout is a single column with fixed vertical spacing; no
//! general graph-layout algorithm is needed. The spacing constant
//! over-approximates rendered card height, so nodes never overlap
//! regardless of content length and content is never measured.

use log::debug;

use roadmap_core::{
    diagram::{
        DiagramEdge, DiagramGraph, DiagramNode, EdgeEmphasis, NodeKind, END_ID, START_ID, phase_id,
    },
    geometry::Point,
    model::{LearningPathDocument, Phase, ResourceCatalog},
};

use crate::{config::LayoutConfig, matcher};

/// Decorative emoji cycle for phase nodes, indexed by `i % 6`. Does not
/// affect ordering or identity.
const PHASE_EMOJI: [&str; 6] = ["📚", "🎓", "🏆", "⭐", "🚀", "💡"];

/// Computes the positioned graph for a learning-path document.
///
/// Pure and deterministic given identical input and configuration. An
/// absent document, or a document without phases, produces the default
/// two-node diagram shown before any conversation has produced data.
pub fn layout(
    document: Option<&LearningPathDocument>,
    catalog: Option<&ResourceCatalog>,
    config: &LayoutConfig,
) -> DiagramGraph {
    let Some(phases) = document.and_then(|document| document.phases.as_ref()) else {
        return default_graph(config);
    };

    let origin = config.origin();
    let spacing = config.spacing();

    let mut nodes = Vec::with_capacity(phases.len() + 2);
    let mut edges = Vec::with_capacity(phases.len() + 1);

    nodes.push(bookend(
        START_ID,
        NodeKind::Start,
        "Current Role",
        "👨‍💻",
        origin,
    ));

    for (index, phase) in phases.iter().enumerate() {
        let position = Point::new(origin.x(), origin.y() + spacing * (index as f32 + 1.0));
        nodes.push(phase_node(phase, index, position, catalog));

        let source = if index == 0 {
            START_ID.to_string()
        } else {
            phase_id(index - 1)
        };
        edges.push(DiagramEdge {
            id: format!("edge-{index}"),
            source,
            target: phase_id(index),
            emphasis: EdgeEmphasis::Normal,
            animated: true,
        });
    }

    nodes.push(bookend(
        END_ID,
        NodeKind::End,
        "Target Role",
        "🎯",
        Point::new(
            origin.x(),
            origin.y() + spacing * (phases.len() as f32 + 1.0),
        ),
    ));

    let final_source = match phases.len() {
        0 => START_ID.to_string(),
        len => phase_id(len - 1),
    };
    edges.push(DiagramEdge {
        id: "edge-final".to_string(),
        source: final_source,
        target: END_ID.to_string(),
        emphasis: EdgeEmphasis::Terminal,
        animated: true,
    });

    debug!(
        nodes_len = nodes.len(),
        edges_len = edges.len();
        "Layout calculated",
    );

    DiagramGraph { nodes, edges }
}

/// The two-node diagram shown before any data exists.
fn default_graph(config: &LayoutConfig) -> DiagramGraph {
    let origin = config.origin();

    let nodes = vec![
        bookend(START_ID, NodeKind::Start, "Start Your Journey", "🚀", origin),
        bookend(
            END_ID,
            NodeKind::End,
            "Achieve Your Goal",
            "🎯",
            Point::new(origin.x(), origin.y() + config.spacing()),
        ),
    ];

    let edges = vec![DiagramEdge {
        id: "start-end".to_string(),
        source: START_ID.to_string(),
        target: END_ID.to_string(),
        emphasis: EdgeEmphasis::Normal,
        animated: true,
    }];

    DiagramGraph { nodes, edges }
}

fn bookend(id: &str, kind: NodeKind, label: &str, emoji: &str, position: Point) -> DiagramNode {
    DiagramNode {
        id: id.to_string(),
        kind,
        position,
        label: label.to_string(),
        emoji: emoji.to_string(),
        duration: None,
        description: None,
        skills: Vec::new(),
        resources: Vec::new(),
    }
}

fn phase_node(
    phase: &Phase,
    index: usize,
    position: Point,
    catalog: Option<&ResourceCatalog>,
) -> DiagramNode {
    DiagramNode {
        id: phase_id(index),
        kind: NodeKind::Phase,
        position,
        label: phase
            .name
            .clone()
            .unwrap_or_else(|| format!("Phase {}", index + 1)),
        emoji: PHASE_EMOJI[index % PHASE_EMOJI.len()].to_string(),
        duration: phase.duration.clone(),
        description: phase.description.clone(),
        skills: phase.skills.clone(),
        resources: matcher::relevant_resources(phase, catalog, index),
    }
}
