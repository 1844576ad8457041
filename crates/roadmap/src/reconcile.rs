//! Position reconciliation across incremental updates.
//!
//! When the backend revises the learning path, the layout is recomputed
//! from scratch, but the user may have dragged nodes since the previous
//! render. Reconciliation keeps a previous position wherever a node id
//! survives the update and adopts every other field from the fresh node.

use std::collections::HashMap;

use roadmap_core::diagram::DiagramNode;

/// Node count of the two-bookend default diagram. A previous node set at
/// or below this size is treated as "no real diagram was rendered yet",
/// and reconciliation is bypassed so the first real render always uses
/// computed layout.
const DEFAULT_DIAGRAM_LEN: usize = 2;

/// Merges freshly computed nodes with previously rendered ones.
///
/// Only `position` is ever taken from a previous node; ids, labels,
/// annotations, and node count always come from the fresh list. Fresh
/// ids without a previous counterpart keep their computed position, and
/// previous ids that no longer exist are dropped.
pub fn reconcile(previous: &[DiagramNode], fresh: Vec<DiagramNode>) -> Vec<DiagramNode> {
    if previous.len() <= DEFAULT_DIAGRAM_LEN {
        return fresh;
    }

    let previous_positions: HashMap<&str, _> = previous
        .iter()
        .map(|node| (node.id.as_str(), node.position))
        .collect();

    fresh
        .into_iter()
        .map(|mut node| {
            if let Some(position) = previous_positions.get(node.id.as_str()).copied() {
                node.position = position;
            }
            node
        })
        .collect()
}
