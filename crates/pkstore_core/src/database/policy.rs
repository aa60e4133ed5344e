//! Per-game container layouts.
//!
//! Each game resolves to one [`GamePolicy`]; containers copy the policy they
//! need at construction and never consult the table again.

use crate::core_api::Game;
use crate::slots::Discipline;

use super::items::ItemCategory;

/// How entries are laid out inside a pocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PocketLayout {
    /// Entries pack from index 0 in insertion order.
    Packed,
    /// Every valid item owns one dedicated index (Generation II TM/HM pocket).
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketPolicy {
    pub name: &'static str,
    pub capacity: usize,
    pub max_stack: u32,
    pub accepts: &'static [ItemCategory],
    pub layout: PocketLayout,
}

impl PocketPolicy {
    pub fn accepts_category(&self, category: ItemCategory) -> bool {
        self.accepts.contains(&category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoragePolicy {
    pub box_count: usize,
    pub box_capacity: usize,
    pub discipline: Discipline,
    /// `None` when boxes cannot be named at all.
    pub box_name_max_len: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePolicy {
    pub pockets: &'static [PocketPolicy],
    pub pc_items: PocketPolicy,
    pub storage: StoragePolicy,
}

pub const PARTY_CAPACITY: usize = 6;
pub const PC_POCKET_NAME: &str = "PC";

const DEFAULT_MAX_STACK: u32 = 99;
const BOX_NAME_MAX_LEN: usize = 8;

const EVERYTHING: &[ItemCategory] = &[
    ItemCategory::General,
    ItemCategory::Mail,
    ItemCategory::Berry,
    ItemCategory::KeyItem,
    ItemCategory::Ball,
    ItemCategory::Tm,
    ItemCategory::Hm,
    ItemCategory::Cologne,
    ItemCategory::BattleCd,
];
const GEN2_ITEMS: &[ItemCategory] = &[ItemCategory::General, ItemCategory::Berry, ItemCategory::Mail];
const GEN3_ITEMS: &[ItemCategory] = &[ItemCategory::General, ItemCategory::Mail];
const KEY_ITEMS: &[ItemCategory] = &[ItemCategory::KeyItem];
const BALLS: &[ItemCategory] = &[ItemCategory::Ball];
const MACHINES: &[ItemCategory] = &[ItemCategory::Tm, ItemCategory::Hm];
const TMS_ONLY: &[ItemCategory] = &[ItemCategory::Tm];
const BERRIES: &[ItemCategory] = &[ItemCategory::Berry];
const COLOGNES: &[ItemCategory] = &[ItemCategory::Cologne];
const BATTLE_CDS: &[ItemCategory] = &[ItemCategory::BattleCd];

const fn packed(
    name: &'static str,
    capacity: usize,
    accepts: &'static [ItemCategory],
) -> PocketPolicy {
    PocketPolicy {
        name,
        capacity,
        max_stack: DEFAULT_MAX_STACK,
        accepts,
        layout: PocketLayout::Packed,
    }
}

const fn single_stack(
    name: &'static str,
    capacity: usize,
    accepts: &'static [ItemCategory],
) -> PocketPolicy {
    PocketPolicy {
        max_stack: 1,
        ..packed(name, capacity, accepts)
    }
}

const fn pc_items(capacity: usize) -> PocketPolicy {
    packed(PC_POCKET_NAME, capacity, EVERYTHING)
}

const fn named_boxes(box_count: usize, box_capacity: usize, discipline: Discipline) -> StoragePolicy {
    StoragePolicy {
        box_count,
        box_capacity,
        discipline,
        box_name_max_len: Some(BOX_NAME_MAX_LEN),
    }
}

static GEN1: GamePolicy = GamePolicy {
    pockets: &[packed("Items", 20, EVERYTHING)],
    pc_items: pc_items(50),
    storage: StoragePolicy {
        box_count: 12,
        box_capacity: 20,
        discipline: Discipline::Compacting,
        box_name_max_len: None,
    },
};

static GEN2: GamePolicy = GamePolicy {
    pockets: &[
        packed("Items", 20, GEN2_ITEMS),
        single_stack("KeyItems", 26, KEY_ITEMS),
        packed("Balls", 12, BALLS),
        PocketPolicy {
            layout: PocketLayout::Fixed,
            ..packed("TM/HM", 57, MACHINES)
        },
    ],
    pc_items: pc_items(50),
    storage: named_boxes(14, 20, Discipline::Compacting),
};

static RUBY_SAPPHIRE: GamePolicy = GamePolicy {
    pockets: &[
        packed("Items", 20, GEN3_ITEMS),
        packed("Key Items", 20, KEY_ITEMS),
        packed("Poké Balls", 16, BALLS),
        packed("TMs & HMs", 64, MACHINES),
        packed("Berries", 46, BERRIES),
    ],
    pc_items: pc_items(50),
    storage: named_boxes(14, 30, Discipline::Sparse),
};

static EMERALD: GamePolicy = GamePolicy {
    pockets: &[
        packed("Items", 30, GEN3_ITEMS),
        packed("Key Items", 30, KEY_ITEMS),
        packed("Poké Balls", 16, BALLS),
        packed("TMs & HMs", 64, MACHINES),
        packed("Berries", 46, BERRIES),
    ],
    pc_items: pc_items(50),
    storage: named_boxes(14, 30, Discipline::Sparse),
};

static FIRERED_LEAFGREEN: GamePolicy = GamePolicy {
    pockets: &[
        packed("Items", 42, GEN3_ITEMS),
        packed("Key Items", 30, KEY_ITEMS),
        packed("Poké Balls", 13, BALLS),
        packed("TM Case", 58, MACHINES),
        packed("Berry Pouch", 43, BERRIES),
    ],
    pc_items: pc_items(50),
    storage: named_boxes(14, 30, Discipline::Sparse),
};

static COLOSSEUM: GamePolicy = GamePolicy {
    pockets: &[
        packed("Items", 20, GEN3_ITEMS),
        packed("Key Items", 43, KEY_ITEMS),
        packed("Poké Balls", 16, BALLS),
        packed("TMs", 64, TMS_ONLY),
        packed("Berries", 46, BERRIES),
        packed("Colognes", 3, COLOGNES),
    ],
    pc_items: pc_items(235),
    storage: named_boxes(3, 30, Discipline::Sparse),
};

static XD: GamePolicy = GamePolicy {
    pockets: &[
        packed("Items", 30, GEN3_ITEMS),
        packed("Key Items", 43, KEY_ITEMS),
        packed("Poké Balls", 16, BALLS),
        packed("TMs", 64, TMS_ONLY),
        packed("Berries", 46, BERRIES),
        packed("Colognes", 3, COLOGNES),
        single_stack("Battle CDs", 60, BATTLE_CDS),
    ],
    pc_items: pc_items(235),
    storage: named_boxes(8, 30, Discipline::Sparse),
};

pub fn game_policy(game: Game) -> &'static GamePolicy {
    match game {
        Game::Red | Game::Blue | Game::Yellow => &GEN1,
        Game::Gold | Game::Silver | Game::Crystal => &GEN2,
        Game::Ruby | Game::Sapphire => &RUBY_SAPPHIRE,
        Game::Emerald => &EMERALD,
        Game::FireRed | Game::LeafGreen => &FIRERED_LEAFGREEN,
        Game::Colosseum => &COLOSSEUM,
        Game::XD => &XD,
    }
}

/// Bag pocket or PC item list called `name` in `game`.
pub fn pocket_policy(game: Game, name: &str) -> Option<&'static PocketPolicy> {
    let policy = game_policy(game);
    if name == PC_POCKET_NAME {
        return Some(&policy.pc_items);
    }
    policy.pockets.iter().find(|pocket| pocket.name == name)
}
