use std::collections::HashSet;

use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// Column and row offset, `(dx, dy)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// Square grid of `size * size` cells addressed by a single index, with a
/// wall set that is fixed once built.
#[derive(Clone, Debug)]
pub struct Maze {
    size: usize,
    walls: HashSet<usize>,
}

impl Maze {
    pub fn new(size: usize, walls: impl IntoIterator<Item = usize>) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let cells = size * size;
        let mut set = HashSet::new();
        for cell in walls {
            if cell >= cells {
                return Err(MazeError::OutOfBounds { cell, cells });
            }
            set.insert(cell);
        }
        Ok(Self { size, walls: set })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    pub fn is_wall(&self, cell: usize) -> bool {
        self.walls.contains(&cell)
    }

    pub fn row(&self, cell: usize) -> usize {
        cell / self.size
    }

    pub fn col(&self, cell: usize) -> usize {
        cell % self.size
    }

    pub fn manhattan(&self, a: usize, b: usize) -> usize {
        self.row(a).abs_diff(self.row(b)) + self.col(a).abs_diff(self.col(b))
    }

    /// The orthogonal neighbour of `cell` in `dir`, or `None` when that would
    /// leave the grid. Never wraps from one row into the next.
    pub fn step(&self, cell: usize, dir: Dir) -> Option<usize> {
        let (dx, dy) = dir.delta();
        let nx = self.col(cell) as isize + dx;
        let ny = self.row(cell) as isize + dy;
        if nx < 0 || ny < 0 {
            return None;
        }
        let (nx, ny) = (nx as usize, ny as usize);
        if nx >= self.size || ny >= self.size {
            return None;
        }
        Some(ny * self.size + nx)
    }

    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        Dir::ALL.into_iter().filter_map(move |dir| self.step(cell, dir))
    }

    pub fn walls(&self) -> impl Iterator<Item = usize> + '_ {
        self.walls.iter().copied()
    }
}
