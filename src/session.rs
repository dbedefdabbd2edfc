use std::time::Instant;

use log::{debug, info};

use crate::clock::Clock;
use crate::difficulty::Difficulty;
use crate::game::{Game, GameEvent, Phase};
use crate::maze::Dir;
use crate::progression::{Progression, COSMETICS};
use crate::store::KvStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Dir),
    SetDifficulty(Difficulty),
    /// Buy or equip the catalog entry at this index.
    StoreAction(usize),
    NewGame,
    Quit,
}

/// One running game: the state machine, its timers and the player's
/// progression. Commands and clock polls each run to completion.
#[derive(Debug)]
pub struct Session<S: KvStore> {
    game: Game,
    progression: Progression<S>,
    clock: Clock,
    attached: bool,
    cues: Vec<GameEvent>,
}

impl<S: KvStore> Session<S> {
    pub fn start(game: Game, progression: Progression<S>, now: Instant) -> Self {
        let mut clock = Clock::default();
        clock.rearm(now, game.difficulty(), game.phase());
        info!("session started on {}", game.difficulty());
        Self {
            game,
            progression,
            clock,
            attached: true,
            cues: Vec::new(),
        }
    }

    pub fn handle(&mut self, command: Command, now: Instant) {
        if !self.attached {
            return;
        }
        let before = self.mode();
        match command {
            Command::Move(dir) => self.game.move_player(dir),
            Command::SetDifficulty(difficulty) => self.game.set_difficulty(difficulty),
            Command::StoreAction(index) => {
                if let Some(item) = COSMETICS.get(index) {
                    let outcome = self.progression.store_action(item);
                    debug!("store {}: {outcome:?}", item.id);
                }
            }
            Command::NewGame => {
                self.game.reset();
                self.clock
                    .rearm(now, self.game.difficulty(), self.game.phase());
            }
            Command::Quit => {
                self.stop();
                return;
            }
        }
        self.settle(before, now);
    }

    /// Runs whichever timers are due. Returns true when anything ticked.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.attached {
            return false;
        }
        let before = self.mode();
        let ticks = self.clock.poll(now);
        if ticks.ghosts {
            self.game.tick_ghosts();
        }
        if ticks.hunger {
            self.game.tick_hunger();
        }
        self.settle(before, now);
        ticks.any()
    }

    /// Cancels both timers and stops accepting commands. Safe to call twice.
    pub fn stop(&mut self) {
        if self.attached {
            info!("session stopped with score {}", self.game.score());
        }
        self.attached = false;
        self.clock.stop();
    }

    pub fn is_running(&self) -> bool {
        self.attached
    }

    /// Events since the last call, for sound and other fire-and-forget hooks.
    pub fn take_cues(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.cues)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn progression(&self) -> &Progression<S> {
        &self.progression
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    fn mode(&self) -> (Difficulty, Phase) {
        (self.game.difficulty(), self.game.phase())
    }

    fn settle(&mut self, before: (Difficulty, Phase), now: Instant) {
        for event in self.game.drain_events() {
            if let GameEvent::PelletEaten { earned, .. } = event {
                self.progression.credit(earned);
            }
            self.cues.push(event);
        }
        if self.mode() != before {
            self.clock
                .rearm(now, self.game.difficulty(), self.game.phase());
        }
    }
}
