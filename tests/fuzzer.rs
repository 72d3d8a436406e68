//! Randomized layout tests. Histories are generated chronologically (so parents always exist
//! before their children) and then reversed into the newest-first order the layout engine
//! expects. Everything is seeded, so failures replay.

use rand::prelude::*;
use commit_lanes::{layout, CommitId, CommitRecord};

fn commit_id(n: usize) -> CommitId {
    format!("commit{n}").into()
}

/// Pick a parent for commit `n`, biased towards recent commits so chains stay long, like
/// real histories.
fn pick_parent(rng: &mut SmallRng, n: usize) -> CommitId {
    let back = rng.gen_range(1..=usize::min(n, 6));
    commit_id(n - back)
}

/// Generate a plausible history of `len` commits, newest first.
///
/// Roughly: mostly linear chains, some forks (two children picking the same parent), some
/// merges, the odd extra root, and - if `allow_dangling` - the occasional parent id that
/// never appears in the list, like a depth-limited `git log` would produce.
fn random_history(rng: &mut SmallRng, len: usize, allow_dangling: bool) -> Vec<CommitRecord> {
    let mut commits: Vec<CommitRecord> = Vec::with_capacity(len);

    for n in 0..len {
        let mut parents: Vec<CommitId> = Vec::new();

        if n > 0 && !rng.gen_bool(0.08) {
            parents.push(pick_parent(rng, n));
            if rng.gen_bool(0.2) {
                // Merge. Make sure the parents are distinct.
                let second = pick_parent(rng, n);
                if second != parents[0] {
                    parents.push(second);
                }
            }
        }

        if allow_dangling && rng.gen_bool(0.05) {
            parents.push(format!("never-fetched-{n}").into());
        }

        commits.push(CommitRecord::new(commit_id(n), parents));
    }

    // Chronological -> newest-first.
    commits.reverse();
    commits
}

#[test]
fn random_histories() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let len = rng.gen_range(0..120);
        let commits = random_history(&mut rng, len, false);

        let graph = layout(&commits);
        graph.dbg_check(&commits);

        assert_eq!(graph.nodes.len(), commits.len());
        // Can't need more lanes than rows.
        assert!(graph.lane_count() <= commits.len());
    }
}

#[test]
fn random_truncated_histories() {
    // Same again but with dangling parents mixed in. These must never panic.
    for seed in 100..140 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let len = rng.gen_range(1..80);
        let commits = random_history(&mut rng, len, true);

        let graph = layout(&commits);
        graph.dbg_check(&commits);
    }
}

#[test]
fn random_layout_is_deterministic() {
    for seed in 200..220 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let commits = random_history(&mut rng, 60, true);

        let a = layout(&commits);
        let b = layout(&commits);
        assert_eq!(a, b);
    }
}
