//! Built-in item table for the Generation I-III titles.
//!
//! Names use each game's in-bag spelling. Technical and hidden machines
//! (`TM01`, `HM05`) and XD's battle discs (`Battle CD 07`) are numbered
//! families and are resolved by parsing instead of being listed.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::core_api::Game;

bitflags! {
    /// Set of games an entry exists in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct GameSet: u16 {
        const RED = 1 << 0;
        const BLUE = 1 << 1;
        const YELLOW = 1 << 2;
        const GOLD = 1 << 3;
        const SILVER = 1 << 4;
        const CRYSTAL = 1 << 5;
        const RUBY = 1 << 6;
        const SAPPHIRE = 1 << 7;
        const EMERALD = 1 << 8;
        const FIRERED = 1 << 9;
        const LEAFGREEN = 1 << 10;
        const COLOSSEUM = 1 << 11;
        const XD = 1 << 12;

        const GEN1 = Self::RED.bits() | Self::BLUE.bits() | Self::YELLOW.bits();
        const GEN2 = Self::GOLD.bits() | Self::SILVER.bits() | Self::CRYSTAL.bits();
        const RSE = Self::RUBY.bits() | Self::SAPPHIRE.bits() | Self::EMERALD.bits();
        const FRLG = Self::FIRERED.bits() | Self::LEAFGREEN.bits();
        const GBA = Self::RSE.bits() | Self::FRLG.bits();
        const GCN = Self::COLOSSEUM.bits() | Self::XD.bits();
        const GEN3 = Self::GBA.bits() | Self::GCN.bits();
        const GEN2_ON = Self::GEN2.bits() | Self::GEN3.bits();
        const HANDHELD = Self::GEN1.bits() | Self::GEN2.bits() | Self::GBA.bits();
    }
}

impl GameSet {
    pub const fn of(game: Game) -> Self {
        match game {
            Game::Red => Self::RED,
            Game::Blue => Self::BLUE,
            Game::Yellow => Self::YELLOW,
            Game::Gold => Self::GOLD,
            Game::Silver => Self::SILVER,
            Game::Crystal => Self::CRYSTAL,
            Game::Ruby => Self::RUBY,
            Game::Sapphire => Self::SAPPHIRE,
            Game::Emerald => Self::EMERALD,
            Game::FireRed => Self::FIRERED,
            Game::LeafGreen => Self::LEAFGREEN,
            Game::Colosseum => Self::COLOSSEUM,
            Game::XD => Self::XD,
        }
    }

    pub fn includes(self, game: Game) -> bool {
        self.contains(Self::of(game))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    General,
    Mail,
    Berry,
    KeyItem,
    Ball,
    Tm,
    Hm,
    Cologne,
    BattleCd,
}

impl ItemCategory {
    /// Whether a Pokémon may carry an item of this category.
    pub fn is_holdable(self) -> bool {
        matches!(self, Self::General | Self::Mail | Self::Berry | Self::Ball)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Mail => "Mail",
            Self::Berry => "Berry",
            Self::KeyItem => "Key Item",
            Self::Ball => "Ball",
            Self::Tm => "TM",
            Self::Hm => "HM",
            Self::Cologne => "Cologne",
            Self::BattleCd => "Battle CD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
    pub category: ItemCategory,
    pub games: GameSet,
}

struct ItemRecord {
    name: &'static str,
    category: ItemCategory,
    games: GameSet,
}

pub const TM_COUNT: u8 = 50;
pub const BATTLE_CD_COUNT: u8 = 60;

#[rustfmt::skip]
const ITEMS: &[ItemRecord] = &[
    // Medicine & general use
    ItemRecord { name: "Potion",        category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Antidote",      category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Burn Heal",     category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Full Restore",  category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Revive",        category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Ether",         category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "HP Up",         category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Rare Candy",    category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Moon Stone",    category: ItemCategory::General, games: GameSet::all() },
    ItemRecord { name: "Escape Rope",   category: ItemCategory::General, games: GameSet::HANDHELD },
    ItemRecord { name: "Lucky Egg",     category: ItemCategory::General, games: GameSet::GEN2_ON },
    ItemRecord { name: "Stick",         category: ItemCategory::General, games: GameSet::GEN2_ON },
    ItemRecord { name: "Stardust",      category: ItemCategory::General, games: GameSet::GEN2_ON },
    ItemRecord { name: "Berry Juice",   category: ItemCategory::General, games: GameSet::GEN2_ON },
    ItemRecord { name: "Wht Apricorn",  category: ItemCategory::General, games: GameSet::GEN2 },
    ItemRecord { name: "Lava Cookie",   category: ItemCategory::General, games: GameSet::GBA },
    ItemRecord { name: "Pink Scarf",    category: ItemCategory::General, games: GameSet::GBA },
    ItemRecord { name: "Green Shard",   category: ItemCategory::General, games: GameSet::GBA },

    // Mail
    ItemRecord { name: "Flower Mail",   category: ItemCategory::Mail,    games: GameSet::GEN2 },
    ItemRecord { name: "Orange Mail",   category: ItemCategory::Mail,    games: GameSet::GBA },
    ItemRecord { name: "Shadow Mail",   category: ItemCategory::Mail,    games: GameSet::GBA },

    // Berries
    ItemRecord { name: "Berry",         category: ItemCategory::Berry,   games: GameSet::GEN2 },
    ItemRecord { name: "PSNCureBerry",  category: ItemCategory::Berry,   games: GameSet::GEN2 },
    ItemRecord { name: "Cheri Berry",   category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Oran Berry",    category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Sitrus Berry",  category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Razz Berry",    category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Lum Berry",     category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Pinap Berry",   category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Aspear Berry",  category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Iapapa Berry",  category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Wiki Berry",    category: ItemCategory::Berry,   games: GameSet::GEN3 },
    ItemRecord { name: "Apicot Berry",  category: ItemCategory::Berry,   games: GameSet::GEN3 },

    // Balls
    ItemRecord { name: "Master Ball",   category: ItemCategory::Ball,    games: GameSet::all() },
    ItemRecord { name: "Ultra Ball",    category: ItemCategory::Ball,    games: GameSet::all() },
    ItemRecord { name: "Great Ball",    category: ItemCategory::Ball,    games: GameSet::all() },
    ItemRecord { name: "Poké Ball",     category: ItemCategory::Ball,    games: GameSet::all() },
    ItemRecord { name: "Safari Ball",   category: ItemCategory::Ball,    games: GameSet::GEN1.union(GameSet::GBA) },
    ItemRecord { name: "Park Ball",     category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Fast Ball",     category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Friend Ball",   category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Love Ball",     category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Level Ball",    category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Heavy Ball",    category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Lure Ball",     category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Moon Ball",     category: ItemCategory::Ball,    games: GameSet::GEN2 },
    ItemRecord { name: "Net Ball",      category: ItemCategory::Ball,    games: GameSet::GEN3 },
    ItemRecord { name: "Dive Ball",     category: ItemCategory::Ball,    games: GameSet::GEN3 },
    ItemRecord { name: "Nest Ball",     category: ItemCategory::Ball,    games: GameSet::GEN3 },
    ItemRecord { name: "Repeat Ball",   category: ItemCategory::Ball,    games: GameSet::GEN3 },
    ItemRecord { name: "Timer Ball",    category: ItemCategory::Ball,    games: GameSet::GEN3 },
    ItemRecord { name: "Luxury Ball",   category: ItemCategory::Ball,    games: GameSet::GEN3 },
    ItemRecord { name: "Premier Ball",  category: ItemCategory::Ball,    games: GameSet::GEN3 },

    // Key items
    ItemRecord { name: "Bicycle",       category: ItemCategory::KeyItem, games: GameSet::GEN1.union(GameSet::GEN2).union(GameSet::FRLG) },
    ItemRecord { name: "Old Rod",       category: ItemCategory::KeyItem, games: GameSet::HANDHELD },
    ItemRecord { name: "Helix Fossil",  category: ItemCategory::KeyItem, games: GameSet::GEN1.union(GameSet::FRLG) },
    ItemRecord { name: "Basement Key",  category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "SecretPotion",  category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "Mystery Egg",   category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "Silver Wing",   category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "Lost Item",     category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "SquirtBottle",  category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "Rainbow Wing",  category: ItemCategory::KeyItem, games: GameSet::GEN2 },
    ItemRecord { name: "Clear Bell",    category: ItemCategory::KeyItem, games: GameSet::CRYSTAL },
    ItemRecord { name: "GS Ball",       category: ItemCategory::KeyItem, games: GameSet::CRYSTAL },
    ItemRecord { name: "Blue Card",     category: ItemCategory::KeyItem, games: GameSet::CRYSTAL },
    ItemRecord { name: "Egg Ticket",    category: ItemCategory::KeyItem, games: GameSet::CRYSTAL },
    ItemRecord { name: "Wailmer Pail",  category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Meteorite",     category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Red Orb",       category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Root Fossil",   category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Contest Pass",  category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Eon Ticket",    category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Mach Bike",     category: ItemCategory::KeyItem, games: GameSet::RSE },
    ItemRecord { name: "Magma Emblem",  category: ItemCategory::KeyItem, games: GameSet::EMERALD },
    ItemRecord { name: "Old Sea Map",   category: ItemCategory::KeyItem, games: GameSet::EMERALD },
    ItemRecord { name: "Tea",           category: ItemCategory::KeyItem, games: GameSet::FRLG },
    ItemRecord { name: "Ruby",          category: ItemCategory::KeyItem, games: GameSet::FRLG },
    ItemRecord { name: "Miror Radar",   category: ItemCategory::KeyItem, games: GameSet::GCN },
    ItemRecord { name: "Jail Key",      category: ItemCategory::KeyItem, games: GameSet::COLOSSEUM },
    ItemRecord { name: "Elevator Key",  category: ItemCategory::KeyItem, games: GameSet::COLOSSEUM },
    ItemRecord { name: "Small Tablet",  category: ItemCategory::KeyItem, games: GameSet::COLOSSEUM },
    ItemRecord { name: "F-Disk",        category: ItemCategory::KeyItem, games: GameSet::COLOSSEUM },
    ItemRecord { name: "Ein File S",    category: ItemCategory::KeyItem, games: GameSet::COLOSSEUM },
    ItemRecord { name: "Krane Memo 1",  category: ItemCategory::KeyItem, games: GameSet::XD },
    ItemRecord { name: "Krane Memo 2",  category: ItemCategory::KeyItem, games: GameSet::XD },
    ItemRecord { name: "Krane Memo 3",  category: ItemCategory::KeyItem, games: GameSet::XD },
    ItemRecord { name: "Krane Memo 4",  category: ItemCategory::KeyItem, games: GameSet::XD },
    ItemRecord { name: "Gonzap's Key",  category: ItemCategory::KeyItem, games: GameSet::XD },
    ItemRecord { name: "Powerup Part",  category: ItemCategory::KeyItem, games: GameSet::XD },

    // Colognes
    ItemRecord { name: "Joy Scent",     category: ItemCategory::Cologne, games: GameSet::GCN },
    ItemRecord { name: "Excite Scent",  category: ItemCategory::Cologne, games: GameSet::GCN },
    ItemRecord { name: "Vivid Scent",   category: ItemCategory::Cologne, games: GameSet::GCN },
];

/// Games in which hidden machine `number` exists.
fn hm_games(number: u8) -> GameSet {
    match number {
        1..=5 => GameSet::HANDHELD,
        6 | 7 => GameSet::GEN2.union(GameSet::GBA),
        8 => GameSet::GBA,
        _ => GameSet::empty(),
    }
}

fn parse_number(digits: &str, max: u8) -> Option<u8> {
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u8 = digits.parse().ok()?;
    (1..=max).contains(&number).then_some(number)
}

/// Category and number of a numbered item (`TM12`, `HM03`, `Battle CD 40`).
pub fn numbered_item(name: &str) -> Option<(ItemCategory, u8)> {
    if let Some(digits) = name.strip_prefix("TM") {
        return parse_number(digits, TM_COUNT).map(|n| (ItemCategory::Tm, n));
    }
    if let Some(digits) = name.strip_prefix("HM") {
        return parse_number(digits, 8).map(|n| (ItemCategory::Hm, n));
    }
    if let Some(digits) = name.strip_prefix("Battle CD ") {
        return parse_number(digits, BATTLE_CD_COUNT).map(|n| (ItemCategory::BattleCd, n));
    }
    None
}

pub fn item_info(name: &str) -> Option<ItemInfo> {
    if let Some(record) = ITEMS.iter().find(|record| record.name == name) {
        return Some(ItemInfo {
            category: record.category,
            games: record.games,
        });
    }

    let (category, number) = numbered_item(name)?;
    let games = match category {
        ItemCategory::Tm => GameSet::all(),
        ItemCategory::Hm => hm_games(number),
        ItemCategory::BattleCd => GameSet::XD,
        _ => GameSet::empty(),
    };
    Some(ItemInfo { category, games })
}

pub fn is_item_valid(name: &str, game: Game) -> bool {
    item_info(name).is_some_and(|info| info.games.includes(game))
}

/// Every item that exists in `game`, in catalog order: named items first,
/// then TMs, HMs and battle discs by number.
pub fn item_names(game: Game) -> Vec<String> {
    let mut names: Vec<String> = ITEMS
        .iter()
        .filter(|record| record.games.includes(game))
        .map(|record| record.name.to_string())
        .collect();

    names.extend((1..=TM_COUNT).map(|n| format!("TM{n:02}")));
    names.extend(
        (1..=8)
            .filter(|&n| hm_games(n).includes(game))
            .map(|n| format!("HM{n:02}")),
    );
    if GameSet::XD.includes(game) {
        names.extend((1..=BATTLE_CD_COUNT).map(|n| format!("Battle CD {n:02}")));
    }
    names
}
