use ledge_core::Position;

/// Tracks which collectibles have been picked up across sensor snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatchTracker {
    initial: usize,
    uncaught: Vec<Position>,
    caught: Vec<Position>,
}

impl CatchTracker {
    pub fn new(collectibles: Vec<Position>) -> Self {
        Self {
            initial: collectibles.len(),
            uncaught: collectibles,
            caught: Vec::new(),
        }
    }

    /// Move every uncaught collectible missing from `remaining` to the caught set and return
    /// the newly caught ones. Matching is exact.
    pub fn record(&mut self, remaining: &[Position]) -> Vec<Position> {
        let mut newly = Vec::new();
        self.uncaught.retain(|c| {
            let still_there = remaining.contains(c);
            if !still_there {
                newly.push(*c);
            }
            still_there
        });
        self.caught.extend_from_slice(&newly);
        newly
    }

    /// True once at least one collectible has disappeared since setup.
    pub fn any_caught(&self) -> bool {
        self.initial > self.uncaught.len()
    }

    pub fn initial_count(&self) -> usize {
        self.initial
    }

    pub fn uncaught(&self) -> &[Position] {
        &self.uncaught
    }

    pub fn caught(&self) -> &[Position] {
        &self.caught
    }
}
