use std::collections::BTreeSet;

use log::{debug, error, warn};

use crate::look::Tint;
use crate::store::KvStore;

pub const POINTS_KEY: &str = "points";
pub const OWNED_KEY: &str = "owned_cosmetics";
pub const EQUIPPED_KEY: &str = "equipped_cosmetic";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cosmetic {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u32,
    pub tint: Tint,
    /// Replaces the player glyph when equipped.
    pub emoji: Option<&'static str>,
}

pub const COSMETICS: [Cosmetic; 3] = [
    Cosmetic {
        id: "blue",
        name: "Blue Pacman",
        cost: 50,
        tint: Tint::Blue,
        emoji: None,
    },
    Cosmetic {
        id: "rainbow",
        name: "Rainbow Trail",
        cost: 100,
        tint: Tint::Rainbow,
        emoji: None,
    },
    Cosmetic {
        id: "crown",
        name: "Crown Pacman",
        cost: 150,
        tint: Tint::Yellow,
        emoji: Some("👑"),
    },
];

pub fn cosmetic(id: &str) -> Option<&'static Cosmetic> {
    COSMETICS.iter().find(|c| c.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOutcome {
    Bought,
    Equipped,
    Declined,
}

/// Currency and cosmetic unlocks. Every change is written straight through to
/// the store; a failed write is logged and play carries on.
#[derive(Debug)]
pub struct Progression<S: KvStore> {
    store: S,
    points: u32,
    owned: BTreeSet<String>,
    equipped: Option<String>,
}

impl<S: KvStore> Progression<S> {
    /// Reads all three values once. Missing or unreadable values fall back
    /// to zero points, nothing owned and nothing equipped.
    pub fn load(store: S) -> Self {
        let points: u32 = match store.get(POINTS_KEY) {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("unreadable {POINTS_KEY} [{raw}], starting from 0");
                0
            }),
        };
        let owned: BTreeSet<String> = match store.get(OWNED_KEY) {
            None => BTreeSet::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("unreadable {OWNED_KEY} [{raw}]: {err}");
                BTreeSet::new()
            }),
        };
        let equipped = store
            .get(EQUIPPED_KEY)
            .filter(|id| !id.is_empty())
            .filter(|id| {
                let owned_id = owned.contains(id);
                if !owned_id {
                    warn!("equipped {id} is not owned, unequipping");
                }
                owned_id
            });
        debug!("loaded progress: {points} points, owned {owned:?}, equipped {equipped:?}");
        Self {
            store,
            points,
            owned,
            equipped,
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn owned(&self) -> &BTreeSet<String> {
        &self.owned
    }

    pub fn is_owned(&self, id: &str) -> bool {
        self.owned.contains(id)
    }

    pub fn equipped(&self) -> Option<&str> {
        self.equipped.as_deref()
    }

    pub fn equipped_cosmetic(&self) -> Option<&'static Cosmetic> {
        self.equipped().and_then(cosmetic)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn credit(&mut self, earned: u32) {
        if earned == 0 {
            return;
        }
        self.points = self.points.saturating_add(earned);
        self.save_points();
    }

    /// Returns false, changing nothing, when `id` is already owned or the
    /// balance is short. The balance is saved before the item so a failed
    /// write never leaves a saved item that was not paid for.
    pub fn purchase(&mut self, id: &str, cost: u32) -> bool {
        if self.is_owned(id) || self.points < cost {
            return false;
        }
        self.points -= cost;
        self.owned.insert(id.to_string());
        if self.save_points() {
            self.save_owned();
        }
        debug!("bought {id} for {cost}, {} points left", self.points);
        true
    }

    /// Ownership is not checked here; callers are expected to offer equip for
    /// owned cosmetics only. An empty id unequips.
    pub fn equip(&mut self, id: &str) {
        if !id.is_empty() && !self.is_owned(id) {
            warn!("equipping {id} which is not owned");
        }
        self.equipped = Some(id.to_string()).filter(|id| !id.is_empty());
        self.persist(EQUIPPED_KEY, id.to_string());
    }

    /// The single store button per catalog entry: equip when owned, otherwise
    /// try to buy at the catalog price.
    pub fn store_action(&mut self, item: &Cosmetic) -> StoreOutcome {
        if self.is_owned(item.id) {
            self.equip(item.id);
            StoreOutcome::Equipped
        } else if self.purchase(item.id, item.cost) {
            StoreOutcome::Bought
        } else {
            StoreOutcome::Declined
        }
    }

    fn save_points(&mut self) -> bool {
        self.persist(POINTS_KEY, self.points.to_string())
    }

    fn save_owned(&mut self) {
        match serde_json::to_string(&self.owned) {
            Ok(encoded) => {
                self.persist(OWNED_KEY, encoded);
            }
            Err(err) => error!("could not encode owned cosmetics: {err}"),
        }
    }

    fn persist(&mut self, key: &str, value: String) -> bool {
        match self.store.set(key, &value) {
            Ok(()) => true,
            Err(err) => {
                error!("failed to save {key}: {err}");
                false
            }
        }
    }
}
