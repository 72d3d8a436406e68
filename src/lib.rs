//! Lane layout for commit graphs.
//!
//! Given a list of commits in reverse chronological order (newest first), this crate assigns
//! each commit a horizontal *lane* and produces node & edge geometry suitable for drawing a
//! branch-and-merge graph - the visualization behind `git log --graph` and every git GUI's
//! history view.
//!
//! The layout is built around two ideas:
//!
//! 1. A **reservation**: when a commit names a parent we haven't visited yet, we promise that
//!    parent a lane. When the parent's row comes up, it takes the promised lane - that's how a
//!    single lineage reads as one continuous vertical line.
//! 2. A **lane allocator** which always hands out the smallest free lane index, so the graph
//!    stays as narrow as the history allows.
//!
//! The whole computation is a pure function of its input. No I/O, no retained state, no
//! validation - fetching commits and drawing the result are both the caller's problem.
//!
//! ## Example
//!
//! ```
//! use commit_lanes::{layout, CommitRecord};
//!
//! // Three commits, newest first. c1 -> c2 -> c3 (c3 is the root).
//! let commits = [
//!     CommitRecord::new("c1", ["c2"]),
//!     CommitRecord::new("c2", ["c3"]),
//!     CommitRecord::root("c3"),
//! ];
//!
//! let graph = layout(&commits);
//! assert_eq!(graph.nodes.len(), 3);
//! // A linear history never leaves lane 0.
//! assert!(graph.nodes.iter().all(|n| n.lane == 0));
//! assert_eq!(graph.max_lane, 0);
//! assert_eq!(graph.edges.len(), 2);
//! ```
//!
//! Merge commits (two or more parents) keep their own lane for the first parent and spawn a
//! fresh lane for each additional parent, so merged-in branches stay visually distinct:
//!
//! ```
//! use commit_lanes::{layout, CommitRecord};
//!
//! let commits = [
//!     CommitRecord::new("m", ["p0", "p1"]),
//!     CommitRecord::root("p0"),
//!     CommitRecord::root("p1"),
//! ];
//!
//! let graph = layout(&commits);
//! assert_eq!(graph.nodes[0].lane, 0); // m
//! assert_eq!(graph.nodes[1].lane, 0); // p0 continues m's line
//! assert_eq!(graph.nodes[2].lane, 1); // p1 came in from the side
//! ```
//!
//! Parents which never show up in the input (shallow clones, depth-limited logs) are fine -
//! they simply don't get an edge.

pub mod layout;
pub mod edges;
pub mod colors;
mod lanes;
mod check;

#[cfg(feature = "dot_export")]
pub mod dot;

pub use layout::{layout, CommitRecord, GraphNode, Layout, PixelPos, LANE_WIDTH, ROW_HEIGHT};
pub use edges::GraphEdge;
pub use colors::{color_for_lane, PALETTE};

/// A horizontal slot index. Lane 0 is the leftmost vertical track in the drawn graph.
pub type Lane = usize;

/// An opaque commit identifier, unique within one input list. Usually a (possibly abbreviated)
/// git object hash, but the layout engine never looks inside it.
pub type CommitId = smartstring::alias::String;
