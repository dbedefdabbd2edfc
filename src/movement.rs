use crate::maze::{Dir, Maze};

pub fn can_move(maze: &Maze, pos: usize, dir: Dir) -> bool {
    match maze.step(pos, dir) {
        Some(next) => !maze.is_wall(next),
        None => false,
    }
}

/// Resolve a move for any grid-bound actor. Edges and walls absorb the move:
/// the original position comes back unchanged.
pub fn try_move(maze: &Maze, pos: usize, dir: Dir) -> usize {
    match maze.step(pos, dir) {
        Some(next) if !maze.is_wall(next) => next,
        _ => pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::create_level;

    #[test]
    fn never_leaves_grid_or_enters_wall() {
        let maze = create_level().maze().unwrap();
        for cell in 0..maze.cell_count() {
            if maze.is_wall(cell) {
                continue;
            }
            for dir in Dir::ALL {
                let next = try_move(&maze, cell, dir);
                assert!(maze.contains(next), "{cell} {dir:?} -> {next}");
                assert!(!maze.is_wall(next), "{cell} {dir:?} -> {next}");
                assert_eq!(next != cell, can_move(&maze, cell, dir));
            }
        }
    }

    #[test]
    fn edges_absorb_moves() {
        let maze = create_level().maze().unwrap();
        let n = maze.size();
        for i in 0..n {
            let left_edge = i * n;
            let right_edge = i * n + n - 1;
            if !maze.is_wall(left_edge) {
                assert_eq!(try_move(&maze, left_edge, Dir::Left), left_edge);
            }
            if !maze.is_wall(right_edge) {
                assert_eq!(try_move(&maze, right_edge, Dir::Right), right_edge);
            }
            if !maze.is_wall(i) {
                assert_eq!(try_move(&maze, i, Dir::Up), i);
            }
            let bottom = n * (n - 1) + i;
            if !maze.is_wall(bottom) {
                assert_eq!(try_move(&maze, bottom, Dir::Down), bottom);
            }
        }
    }

    #[test]
    fn walls_absorb_moves() {
        let maze = create_level().maze().unwrap();
        // 2 sits directly above wall 12, 11 directly left of it
        assert_eq!(try_move(&maze, 2, Dir::Down), 2);
        assert_eq!(try_move(&maze, 11, Dir::Right), 11);
        assert_eq!(try_move(&maze, 11, Dir::Left), 10);
    }
}
