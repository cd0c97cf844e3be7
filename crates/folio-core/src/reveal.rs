use crate::constants::REVEAL_THRESHOLD;
use fnv::FnvHashSet;

/// One intersection report for an observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub id: u32,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Intersection ratio rescaled against the largest ratio the element can
/// reach. An element taller than the viewport never exceeds
/// `viewport_height / element_height`, so its raw ratio is divided by that
/// ceiling. Non-positive or non-finite heights leave the ratio unchanged.
pub fn reachable_ratio(ratio: f64, element_height: f64, viewport_height: f64) -> f64 {
    if !(element_height > 0.0 && viewport_height > 0.0)
        || !element_height.is_finite()
        || !viewport_height.is_finite()
    {
        return ratio;
    }
    let ceiling = (viewport_height / element_height).min(1.0);
    (ratio / ceiling).min(1.0)
}

/// One-shot reveal bookkeeping: every observed element is revealed at most
/// once and is dropped from observation when that happens.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    watching: FnvHashSet<u32>,
    shown: FnvHashSet<u32>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            watching: FnvHashSet::default(),
            shown: FnvHashSet::default(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `id`. Returns false if it is already watched or was
    /// revealed before.
    pub fn observe(&mut self, id: u32) -> bool {
        if self.shown.contains(&id) {
            return false;
        }
        self.watching.insert(id)
    }

    pub fn is_shown(&self, id: u32) -> bool {
        self.shown.contains(&id)
    }

    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    /// Apply a batch of intersection reports and return the ids revealed by
    /// it, in batch order. Callers should stop observing each returned id.
    pub fn on_entries(&mut self, entries: &[Visibility]) -> Vec<u32> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }
            if self.watching.remove(&entry.id) {
                self.shown.insert(entry.id);
                revealed.push(entry.id);
            }
        }
        revealed
    }
}
