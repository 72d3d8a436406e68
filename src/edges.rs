//! The edge pass. Runs over the completed node set once every node has its position, and
//! connects each commit to each of its in-list parents.
//!
//! Edges are derived data - they hold plain coordinates copied out of the nodes, not node
//! references, so the result serializes flat and the renderer never chases pointers.

use std::collections::HashMap;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::CommitId;
use crate::colors::color_for_lane;
use crate::layout::{GraphNode, PixelPos};

/// One drawable line segment between a commit and one of its parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GraphEdge {
    /// The child commit's position.
    pub from: PixelPos,
    /// The parent commit's position.
    pub to: PixelPos,
    /// A palette entry (see [`crate::colors`]).
    pub color: &'static str,
}

/// Connect every node to each of its parents that actually appears in the node set.
///
/// Dangling parent ids are skipped silently - a depth-limited history is normal input, not an
/// error. Color rule: a first-parent edge continues the child's line and takes the *child's*
/// lane color; any other parent is a merge source and takes the *parent's* lane color, so a
/// line entering a merge keeps the color of the branch it came from.
pub(crate) fn synthesize_edges(nodes: &[GraphNode]) -> Vec<GraphEdge> {
    // If an id somehow appears twice, the later node wins the lookup. Input validation is
    // upstream's job.
    let by_id: HashMap<&CommitId, &GraphNode> = nodes.iter()
        .map(|n| (&n.id, n))
        .collect();

    let mut edges = Vec::new();
    for node in nodes {
        for (pi, parent_id) in node.parents.iter().enumerate() {
            let Some(parent) = by_id.get(parent_id) else { continue };

            let color_lane = if pi == 0 { node.lane } else { parent.lane };
            edges.push(GraphEdge {
                from: node.pos,
                to: parent.pos,
                color: color_for_lane(color_lane),
            });
        }
    }
    edges
}
