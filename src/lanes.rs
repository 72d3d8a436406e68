//! The lane allocator. Hands out the smallest free lane index, which is the whole reason the
//! drawn graph stays compact - a branch that dies frees its lane, and the next branch head
//! slots back into the gap.

use crate::Lane;

/// Occupancy of lanes, indexed by lane number. This is call-local state inside [`layout`] -
/// it never outlives a single layout pass.
///
/// A scan over a boolean vec beats a sorted set here: real histories sit at a handful of
/// simultaneous lanes, so the scan is short and the storage is contiguous.
///
/// [`layout`]: crate::layout::layout
#[derive(Debug, Clone, Default)]
pub(crate) struct LaneAllocator {
    active: Vec<bool>,
}

impl LaneAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the smallest lane index not currently active.
    pub fn allocate(&mut self) -> Lane {
        for (lane, active) in self.active.iter_mut().enumerate() {
            if !*active {
                *active = true;
                return lane;
            }
        }

        self.active.push(true);
        self.active.len() - 1
    }

    /// Mark a lane active. Idempotent - reserving a lane that's already in flight is a no-op.
    pub fn mark_active(&mut self, lane: Lane) {
        if lane >= self.active.len() {
            self.active.resize(lane + 1, false);
        }
        self.active[lane] = true;
    }

    /// Release a lane for reuse by a later `allocate()`.
    pub fn free(&mut self, lane: Lane) {
        if let Some(active) = self.active.get_mut(lane) {
            *active = false;
        }
    }

    #[cfg(test)]
    pub fn is_active(&self, lane: Lane) -> bool {
        self.active.get(lane).copied().unwrap_or(false)
    }

    /// Iterate over the currently active lanes, in lane order. Lane order (not map order!)
    /// matters for deterministic output.
    pub fn active_lanes(&self) -> impl Iterator<Item = Lane> + '_ {
        self.active.iter()
            .enumerate()
            .filter_map(|(lane, &active)| active.then_some(lane))
    }
}
