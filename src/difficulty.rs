use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ParseDifficultyError;

pub const HUNGER_MAX: u32 = 100;
pub const HUNGER_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Hardcore,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Hardcore,
    ];

    /// How often the ghosts take a step.
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(800),
            Difficulty::Medium => Duration::from_millis(500),
            Difficulty::Hard | Difficulty::Hardcore => Duration::from_millis(250),
        }
    }

    pub fn score_multiplier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Hardcore => 5,
        }
    }

    pub fn depletes_hunger(self) -> bool {
        self == Difficulty::Hardcore
    }

    /// Hunger lost per hunger tick. Only hardcore arms the hunger timer.
    pub fn hunger_step(self) -> u32 {
        if self.depletes_hunger() {
            2
        } else {
            1
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Hardcore => "hardcore",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.tick_interval(), Duration::from_millis(800));
        assert_eq!(Difficulty::Hardcore.tick_interval(), Duration::from_millis(250));
        assert_eq!(Difficulty::Hard.score_multiplier(), 3);
        assert_eq!(Difficulty::Hardcore.score_multiplier(), 5);
        assert_eq!(Difficulty::Hardcore.hunger_step(), 2);
        assert_eq!(Difficulty::Easy.hunger_step(), 1);
        assert!(!Difficulty::Hard.depletes_hunger());
    }

    #[test]
    fn parse() {
        assert_eq!("Hardcore".parse::<Difficulty>(), Ok(Difficulty::Hardcore));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(ParseDifficultyError("nightmare".to_string()))
        );
    }
}
