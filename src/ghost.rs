use crate::maze::{Dir, Maze};
use crate::movement::{can_move, try_move};

/// Order in which a ghost looks at its neighbours. The first neighbour that
/// reaches the best distance wins, so this order breaks ties.
pub const GHOST_SCAN_ORDER: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

pub fn ghost_candidates(maze: &Maze, pos: usize) -> impl Iterator<Item = usize> + '_ {
    GHOST_SCAN_ORDER
        .into_iter()
        .filter(move |&dir| can_move(maze, pos, dir))
        .map(move |dir| try_move(maze, pos, dir))
        // a legal step never changes column by more than one
        .filter(move |&next| maze.col(next).abs_diff(maze.col(pos)) <= 1)
}

/// Greedy chase: step to the neighbour closest to `target` by Manhattan
/// distance, even if that is farther than where the ghost stands now. No
/// lookahead, so a ghost can stall behind a wall. Stays put when boxed in.
pub fn ghost_next_move(maze: &Maze, pos: usize, target: usize) -> usize {
    let mut best = pos;
    let mut shortest = usize::MAX;
    for next in ghost_candidates(maze, pos) {
        let distance = maze.manhattan(next, target);
        if distance < shortest {
            shortest = distance;
            best = next;
        }
    }
    best
}

/// Every ghost moves from its pre-tick cell toward the pre-tick target. Ghosts
/// ignore one another and may share a cell.
pub fn update_ghosts<const N: usize>(maze: &Maze, ghosts: [usize; N], target: usize) -> [usize; N] {
    ghosts.map(|ghost| ghost_next_move(maze, ghost, target))
}
