use crate::level::GHOST_COUNT;

/// Terminal-independent colour names; the renderer maps them to real colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Yellow,
    Red,
    Blue,
    Pink,
    Green,
    Rainbow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GhostLook {
    pub tint: Tint,
    pub face: &'static str,
}

pub const GHOST_LOOKS: [GhostLook; GHOST_COUNT] = [
    GhostLook {
        tint: Tint::Red,
        face: "😈",
    },
    GhostLook {
        tint: Tint::Blue,
        face: "👻",
    },
    GhostLook {
        tint: Tint::Pink,
        face: "😡",
    },
    GhostLook {
        tint: Tint::Green,
        face: "💀",
    },
];

pub const PLAYER_TINT: Tint = Tint::Yellow;
pub const PLAYER_FACE: &str = "😃";
