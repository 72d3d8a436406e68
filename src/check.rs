use std::collections::{HashMap, HashSet};
use crate::{CommitId, Lane};
use crate::colors::color_for_lane;
use crate::layout::{CommitRecord, GraphNode, Layout, PixelPos, LANE_WIDTH, ROW_HEIGHT};

impl Layout {
    /// Check this layout against the input list it was built from. This is only exported for
    /// integration testing (the fuzzer leans on it); you shouldn't have any reason to call it.
    ///
    /// This method is public, but do not depend on it as part of the crate API. It could be
    /// removed at any time.
    #[allow(unused)]
    pub fn dbg_check(&self, commits: &[CommitRecord]) {
        // One node per input row, in input order, parent lists copied verbatim, positions
        // derived from (lane, row) by the fixed spacing constants.
        assert_eq!(self.nodes.len(), commits.len());
        for (row, (node, commit)) in self.nodes.iter().zip(commits).enumerate() {
            assert_eq!(node.id, commit.id);
            assert_eq!(node.parents, commit.parents);
            assert_eq!(node.pos, PixelPos {
                x: node.lane * LANE_WIDTH,
                y: row * ROW_HEIGHT,
            });
        }

        // max_lane is exactly the widest lane any node landed on (0 when empty).
        let actual_max = self.nodes.iter().map(|n| n.lane).max().unwrap_or(0);
        assert_eq!(self.max_lane, actual_max);

        // Rows are unique in y, so y is enough to find an edge's endpoints.
        let by_y: HashMap<usize, &GraphNode> = self.nodes.iter()
            .map(|n| (n.pos.y, n))
            .collect();
        let ids: HashSet<&CommitId> = self.nodes.iter().map(|n| &n.id).collect();

        // Exactly one edge per (child, present-parent) pair; dangling parents contribute
        // nothing, so the total is bounded by the total parent-reference count.
        let expected_edges: usize = commits.iter()
            .flat_map(|c| c.parents.iter())
            .filter(|p| ids.contains(p))
            .count();
        assert_eq!(self.edges.len(), expected_edges);
        let total_parent_refs: usize = commits.iter().map(|c| c.parents.len()).sum();
        assert!(self.edges.len() <= total_parent_refs);

        for edge in &self.edges {
            let child = by_y.get(&edge.from.y).expect("edge from a position with no node");
            let parent = by_y.get(&edge.to.y).expect("edge to a position with no node");
            assert_eq!(edge.from, child.pos);
            assert_eq!(edge.to, parent.pos);

            // Continuation edges carry the child's lane color; merge-source edges carry the
            // parent's.
            let expected_color = if child.parents.first() == Some(&parent.id) {
                color_for_lane(child.lane)
            } else {
                color_for_lane(parent.lane)
            };
            assert_eq!(edge.color, expected_color);
        }

        // No lane leaks: replay the reservation bookkeeping and make sure a fresh branch head
        // never lands on a lane that's still promised to a not-yet-visited commit.
        let mut reserved: HashMap<&CommitId, Lane> = HashMap::new();
        for node in &self.nodes {
            match reserved.remove(&node.id) {
                Some(lane) => assert_eq!(
                    lane, node.lane,
                    "{:?} was promised lane {lane} but sits on lane {}", node.id, node.lane,
                ),
                None => assert!(
                    !reserved.values().any(|&l| l == node.lane),
                    "branch head {:?} landed on a lane promised to someone else", node.id,
                ),
            }

            for (pi, parent) in node.parents.iter().enumerate() {
                if pi == 0 {
                    reserved.entry(parent).or_insert(node.lane);
                } else if !reserved.contains_key(parent) {
                    // The builder handed this merge source a fresh lane. The parent's own row
                    // records which one; dangling merge parents never get a row and drop out
                    // of the replay.
                    if let Some(p) = self.nodes.iter().find(|n| &n.id == parent) {
                        reserved.insert(parent, p.lane);
                    }
                }
            }
        }
    }
}
