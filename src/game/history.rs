use fxhash::FxHashMap;

/// Occurrence counts of position hashes, used by the rules layer for
/// repetition draws. The ordered stack exists so takebacks can undo counts.
#[derive(Clone, Debug)]
pub struct PositionHistory {
    positions: FxHashMap<u64, u32>,
    history: Vec<u64>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self {
            positions: FxHashMap::default(),
            history: Vec::with_capacity(256),
        }
    }

    pub fn push(&mut self, zobrist_key: u64) {
        self.history.push(zobrist_key);
        *self.positions.entry(zobrist_key).or_insert(0) += 1;
    }

    pub fn pop(&mut self) {
        if let Some(zobrist_key) = self.history.pop() {
            if let Some(count) = self.positions.get_mut(&zobrist_key) {
                if *count > 1 {
                    *count -= 1;
                } else {
                    self.positions.remove(&zobrist_key);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn occurrences(&self, zobrist_key: u64) -> u32 {
        self.positions.get(&zobrist_key).copied().unwrap_or(0)
    }

    pub fn is_threefold_repetition(&self, zobrist_key: u64) -> bool {
        // Counting the position about to be reached as well
        self.occurrences(zobrist_key) >= 2
    }
}
