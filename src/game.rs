use log::{debug, info};

use crate::difficulty::{Difficulty, HUNGER_MAX};
use crate::error::MazeError;
use crate::ghost::update_ghosts;
use crate::level::{LevelData, GHOST_COUNT};
use crate::maze::{Dir, Maze};
use crate::movement::try_move;
use crate::pellets::PelletField;

pub const START_LIVES: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    Caught,
    Starved,
}

/// Side effects a front end may react to (sound, currency).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten { cell: usize, earned: u32 },
    LifeLost { lives: u32 },
    GameOver { cause: GameOverCause },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    Player,
    Ghost(usize),
}

/// Everything a renderer needs to draw one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub wall: bool,
    pub pellet: bool,
    pub occupant: Option<Occupant>,
}

#[derive(Clone, Debug)]
pub struct Game {
    maze: Maze,
    pellets: PelletField,
    player: usize,
    player_spawn: usize,
    ghosts: [usize; GHOST_COUNT],
    ghost_spawns: [usize; GHOST_COUNT],
    score: u32,
    lives: u32,
    hunger: u32,
    difficulty: Difficulty,
    phase: Phase,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(level: &LevelData, difficulty: Difficulty) -> Result<Self, MazeError> {
        let maze = level.maze()?;
        Ok(Self {
            pellets: PelletField::new(&maze),
            maze,
            player: level.player_start,
            player_spawn: level.player_start,
            ghosts: level.ghost_starts,
            ghost_spawns: level.ghost_starts,
            score: 0,
            lives: START_LIVES,
            hunger: HUNGER_MAX,
            difficulty,
            phase: Phase::Playing,
            events: Vec::new(),
        })
    }

    /// Start over on the same maze. Difficulty carries across sessions.
    pub fn reset(&mut self) {
        self.pellets = PelletField::new(&self.maze);
        self.player = self.player_spawn;
        self.ghosts = self.ghost_spawns;
        self.score = 0;
        self.lives = START_LIVES;
        self.hunger = HUNGER_MAX;
        self.phase = Phase::Playing;
        self.events.clear();
        info!("new session on {}", self.difficulty);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            debug!("difficulty {} -> {}", self.difficulty, difficulty);
            self.difficulty = difficulty;
        }
    }

    pub fn move_player(&mut self, dir: Dir) {
        if self.phase == Phase::Over {
            return;
        }
        let next = try_move(&self.maze, self.player, dir);
        if next != self.player {
            self.player = next;
            self.consume_tile();
        }
    }

    fn consume_tile(&mut self) {
        if self.pellets.consume(self.player) {
            let earned = self.difficulty.score_multiplier();
            self.score += earned;
            self.hunger = HUNGER_MAX;
            self.events.push(GameEvent::PelletEaten {
                cell: self.player,
                earned,
            });
        }
    }

    pub fn update_ghosts(&mut self) {
        if self.phase == Phase::Over {
            return;
        }
        self.ghosts = update_ghosts(&self.maze, self.ghosts, self.player);
    }

    pub fn handle_collisions(&mut self) {
        if self.phase == Phase::Over || !self.ghosts.contains(&self.player) {
            return;
        }
        if self.lives > 1 {
            self.lives -= 1;
            self.player = self.player_spawn;
            debug!("caught, {} lives left", self.lives);
            self.events.push(GameEvent::LifeLost { lives: self.lives });
        } else {
            self.lives = 0;
            self.end(GameOverCause::Caught);
        }
    }

    /// One ghost tick: every ghost moves, then a single collision check.
    pub fn tick_ghosts(&mut self) {
        self.update_ghosts();
        self.handle_collisions();
    }

    pub fn tick_hunger(&mut self) {
        if self.phase == Phase::Over {
            return;
        }
        let step = self.difficulty.hunger_step();
        if self.hunger <= step {
            self.hunger = 0;
            self.end(GameOverCause::Starved);
        } else {
            self.hunger -= step;
        }
    }

    fn end(&mut self, cause: GameOverCause) {
        self.phase = Phase::Over;
        info!("game over ({cause:?}) with score {}", self.score);
        self.events.push(GameEvent::GameOver { cause });
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> usize {
        self.player
    }

    pub fn ghosts(&self) -> &[usize; GHOST_COUNT] {
        &self.ghosts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn hunger(&self) -> u32 {
        self.hunger
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pellets_left(&self) -> usize {
        self.pellets.remaining()
    }

    pub fn cell(&self, cell: usize) -> CellView {
        let occupant = if cell == self.player {
            Some(Occupant::Player)
        } else {
            self.ghosts
                .iter()
                .position(|&g| g == cell)
                .map(Occupant::Ghost)
        };
        CellView {
            wall: self.maze.is_wall(cell),
            pellet: self.pellets.is_present(cell),
            occupant,
        }
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, player: usize, ghosts: [usize; GHOST_COUNT]) {
        self.player = player;
        self.ghosts = ghosts;
    }

    #[cfg(test)]
    pub(crate) fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    #[cfg(test)]
    pub(crate) fn set_hunger(&mut self, hunger: u32) {
        self.hunger = hunger;
    }
}
