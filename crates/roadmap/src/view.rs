//! Diagram view state.
//!
//! [`DiagramState`] is the single writer for the node and edge collections
//! consumed by the rendering layer. Recomputation happens exactly when the
//! input document changes, not on every call; user interactions mutate
//! positions and selection in place between recomputations.

use log::debug;

use roadmap_core::{
    diagram::{DiagramEdge, DiagramNode, EdgeEmphasis},
    geometry::Point,
    model::{LearningPathDocument, ResourceCatalog},
};

use crate::{config::LayoutConfig, layout, reconcile};

/// Holds the current diagram and its selection.
#[derive(Debug, Default)]
pub struct DiagramState {
    config: LayoutConfig,
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
    selected: Option<DiagramNode>,
    last_document: Option<LearningPathDocument>,
    rendered: bool,
}

impl DiagramState {
    /// Creates an empty diagram state with the given layout configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Brings the diagram up to date with `document`.
    ///
    /// A no-op when the document matches the one already laid out.
    /// Otherwise the layout is recomputed, user-moved positions are
    /// carried over by reconciliation, and the edge set is replaced
    /// wholesale (edges are never reconciled).
    pub fn sync(
        &mut self,
        document: Option<&LearningPathDocument>,
        catalog: Option<&ResourceCatalog>,
    ) {
        if self.rendered && self.last_document.as_ref() == document {
            return;
        }

        let graph = layout::layout(document, catalog, &self.config);
        self.nodes = reconcile::reconcile(&self.nodes, graph.nodes);
        self.edges = graph.edges;
        self.last_document = document.cloned();
        self.rendered = true;

        debug!(
            nodes_len = self.nodes.len(),
            edges_len = self.edges.len();
            "Diagram recomputed",
        );
    }

    /// Drags a node to a new position. Returns `false` when no node with
    /// that id exists.
    pub fn move_node(&mut self, id: &str, position: Point) -> bool {
        match self.nodes.iter_mut().find(|node| node.id == id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Selects a node by id, storing a snapshot of its current state.
    ///
    /// The snapshot is not live-updated if the node later changes while
    /// still selected; the staleness window is bounded by the next user
    /// action.
    pub fn select(&mut self, id: &str) -> Option<&DiagramNode> {
        self.selected = self.nodes.iter().find(|node| node.id == id).cloned();
        self.selected.as_ref()
    }

    /// Clears the selection (empty-canvas click or close control).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Appends a user-drawn edge between two existing nodes.
    ///
    /// Ignored when an endpoint is missing or the link already exists.
    /// User edges live only until the next recomputation replaces the
    /// edge set.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        let exists = |id: &str| self.nodes.iter().any(|node| node.id == id);
        if !exists(source) || !exists(target) {
            return false;
        }
        if self
            .edges
            .iter()
            .any(|edge| edge.source == source && edge.target == target)
        {
            return false;
        }

        self.edges.push(DiagramEdge {
            id: format!("edge-{source}-{target}"),
            source: source.to_string(),
            target: target.to_string(),
            emphasis: EdgeEmphasis::Normal,
            animated: false,
        });
        true
    }

    /// Current nodes, in chain order.
    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    /// Current edges.
    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    /// The selected node snapshot, if any.
    pub fn selected(&self) -> Option<&DiagramNode> {
        self.selected.as_ref()
    }
}
