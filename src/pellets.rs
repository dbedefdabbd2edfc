use crate::maze::Maze;

/// Which cells still hold a pellet. Starts full on every open cell and only
/// ever empties.
#[derive(Clone, Debug)]
pub struct PelletField {
    present: Vec<bool>,
    remaining: usize,
}

impl PelletField {
    pub fn new(maze: &Maze) -> Self {
        let present: Vec<bool> = (0..maze.cell_count())
            .map(|cell| !maze.is_wall(cell))
            .collect();
        let remaining = present.iter().filter(|&&p| p).count();
        Self { present, remaining }
    }

    pub fn is_present(&self, cell: usize) -> bool {
        self.present.get(cell).copied().unwrap_or(false)
    }

    /// Returns true only when a pellet was actually removed.
    pub fn consume(&mut self, cell: usize) -> bool {
        match self.present.get_mut(cell) {
            Some(slot) if *slot => {
                *slot = false;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
