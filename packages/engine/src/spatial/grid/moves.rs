use super::*;

impl Grid {
    /// Move the grain at `from` into the empty cell `to`.
    pub fn move_grain(&mut self, from: GridPos, to: GridPos) {
        debug_assert!(
            self.get_at(from) == Cell::Sand && self.get_at(to) == Cell::Empty,
            "move_grain: ({}, {}) -> ({}, {}) is not grain -> empty",
            from.x(),
            from.y(),
            to.x(),
            to.y()
        );
        self.write(from.index(), Cell::Empty);
        self.write(to.index(), Cell::Sand);
    }
}
