//! The layout builder: a single forward pass over the commit list which assigns lanes and
//! emits node geometry, followed by the edge pass in [`crate::edges`].
//!
//! The pass juggles two pieces of call-local state:
//!
//! - the *reservation map*, promising lanes to parents we haven't reached yet, and
//! - the *active-lane set* (inside [`LaneAllocator`](crate::lanes)), tracking which vertical
//!   lines are still expected to continue below the current row.
//!
//! Neither structure escapes the call, so repeated / parallel invocations on independent
//! commit lists are trivially safe.

use std::collections::HashMap;
use smallvec::SmallVec;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{CommitId, Lane};
use crate::edges::{synthesize_edges, GraphEdge};
use crate::lanes::LaneAllocator;

/// Horizontal distance between adjacent lanes, in pixels.
pub const LANE_WIDTH: usize = 20;

/// Vertical distance between adjacent rows, in pixels.
pub const ROW_HEIGHT: usize = 28;

/// One input row: a commit id plus its parent ids, ordered the way git orders them (first
/// parent = the branch the commit landed on).
///
/// This is the entire input contract. No timestamps, no messages - the history collaborator
/// keeps all of that; the layout engine only cares about topology. Parent ids that never
/// appear in the list (shallow / depth-limited history) are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CommitRecord {
    pub id: CommitId,
    pub parents: SmallVec<[CommitId; 2]>,
}

impl CommitRecord {
    pub fn new<I, P, S>(id: I, parents: P) -> Self
        where I: Into<CommitId>, P: IntoIterator<Item = S>, S: Into<CommitId>
    {
        Self {
            id: id.into(),
            parents: parents.into_iter().map(|p| p.into()).collect(),
        }
    }

    /// A commit with no parents.
    pub fn root<I: Into<CommitId>>(id: I) -> Self {
        Self { id: id.into(), parents: SmallVec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() >= 2
    }
}

/// A pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PixelPos {
    pub x: usize,
    pub y: usize,
}

/// One laid-out commit. Row `i` of the input becomes node `i`; nodes are immutable once the
/// pass has emitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GraphNode {
    pub id: CommitId,
    pub lane: Lane,
    /// Copied from the input record, so the caller can hit-test / tooltip without keeping the
    /// original list around.
    pub parents: SmallVec<[CommitId; 2]>,
    pub pos: PixelPos,
}

/// The finished layout: nodes in input order, derived edges, and the widest lane used (for
/// canvas sizing). Returned by value; the engine retains nothing between calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Layout {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub max_lane: Lane,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of lanes the drawing needs. 0 for an empty layout.
    pub fn lane_count(&self) -> usize {
        if self.nodes.is_empty() { 0 } else { self.max_lane + 1 }
    }
}

/// Lay out a newest-first commit list.
///
/// The input is consumed read-only and is not validated: parents, when present in the list,
/// must appear at a later row than every child naming them. Upstream owns that ordering;
/// feeding anything else in produces a wrong-looking (but still well-formed) layout rather
/// than an error. Duplicate ids are likewise not detected.
pub fn layout(commits: &[CommitRecord]) -> Layout {
    let mut lanes = LaneAllocator::new();
    // Lanes promised to commits we haven't reached yet.
    let mut reserved: HashMap<CommitId, Lane> = HashMap::new();

    let mut nodes = Vec::with_capacity(commits.len());
    let mut max_lane: Lane = 0;

    for (row, commit) in commits.iter().enumerate() {
        // A reservation left by a previously visited child wins; otherwise this is a new
        // branch head and takes the smallest free lane.
        let lane = match reserved.remove(&commit.id) {
            Some(lane) => lane,
            None => lanes.allocate(),
        };
        lanes.mark_active(lane);
        max_lane = max_lane.max(lane);

        nodes.push(GraphNode {
            id: commit.id.clone(),
            lane,
            parents: commit.parents.clone(),
            pos: PixelPos { x: lane * LANE_WIDTH, y: row * ROW_HEIGHT },
        });

        if commit.parents.is_empty() {
            // Root commit. Nothing continues below this row.
            lanes.free(lane);
        }

        for (pi, parent) in commit.parents.iter().enumerate() {
            if pi == 0 {
                if reserved.contains_key(parent) {
                    // Fork: an earlier sibling already claimed this parent, so our lane stops
                    // here. First come, first served.
                    lanes.free(lane);
                } else {
                    // Continue this lineage straight down.
                    reserved.insert(parent.clone(), lane);
                }
            } else if !reserved.contains_key(parent) {
                // Merge source. Always gets a lane of its own so the merged-in line reads
                // separately from the line it merges into.
                let merge_lane = lanes.allocate();
                reserved.insert(parent.clone(), merge_lane);
            }
        }

        // Reclaim lanes no pending reservation names anymore. Scanned in lane order, never
        // map order, so output stays deterministic.
        let mut to_free: SmallVec<[Lane; 8]> = SmallVec::new();
        for lane in lanes.active_lanes() {
            if !reserved.values().any(|&r| r == lane) {
                to_free.push(lane);
            }
        }
        for lane in to_free {
            lanes.free(lane);
        }
    }

    let edges = synthesize_edges(&nodes);
    Layout { nodes, edges, max_lane }
}
