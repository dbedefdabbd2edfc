use crate::error::MazeError;
use crate::maze::Maze;

pub const GRID_SIZE: usize = 10;
pub const GHOST_COUNT: usize = 4;

#[derive(Clone, Debug)]
pub struct LevelData {
    pub size: usize,
    pub walls: Vec<usize>,
    pub player_start: usize,
    pub ghost_starts: [usize; GHOST_COUNT],
}

pub fn create_level() -> LevelData {
    // Horizontal bar across row 1, vertical bar down column 2
    let mut walls = vec![12, 13, 14];
    for y in 2..9 {
        walls.push(y * GRID_SIZE + 2);
    }

    LevelData {
        size: GRID_SIZE,
        walls,
        player_start: 0,
        // Bottom-right corner, then up the last column
        ghost_starts: [99, 89, 79, 69],
    }
}

impl LevelData {
    pub fn maze(&self) -> Result<Maze, MazeError> {
        let maze = Maze::new(self.size, self.walls.iter().copied())?;
        let starts = std::iter::once(("player", self.player_start))
            .chain(self.ghost_starts.iter().map(|&cell| ("ghost", cell)));
        for (what, cell) in starts {
            if !maze.contains(cell) {
                return Err(MazeError::OutOfBounds {
                    cell,
                    cells: maze.cell_count(),
                });
            }
            if maze.is_wall(cell) {
                return Err(MazeError::StartOnWall { what, cell });
            }
        }
        Ok(maze)
    }
}
