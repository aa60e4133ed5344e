use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, Game, Generation};
use crate::database::{ItemCategory, NONE_SPECIES, is_item_valid, item_info, species};
use crate::gender::Gender;
use crate::slots::SlotValue;

pub const MAX_LEVEL: u8 = 100;
pub const MAX_NICKNAME_LEN: usize = 10;
pub const MAX_TRAINER_NAME_LEN: usize = 7;
pub const GEN2_MAX_LEVEL_MET: u8 = 63;
pub const DEFAULT_FRIENDSHIP: u8 = 70;
pub const DEFAULT_BALL: &str = "Poké Ball";
pub const DEFAULT_TRAINER_NAME: &str = "PKSTORE";
pub const NO_ITEM: &str = "None";
pub const NO_MOVE: &str = "None";

#[rustfmt::skip]
pub const RIBBON_NAMES: &[&str] = &[
    "Cool", "Beauty", "Cute", "Smart", "Tough",
    "Champion", "Winning", "Victory", "Artist", "Effort",
    "Marine", "Land", "Sky", "Country", "National", "Earth", "World",
];

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one stored creature. Clones share it; only
/// [`Pokemon::duplicate`] and conversion mint a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    fn fresh() -> Self {
        Self(NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub name: String,
    pub pp: u8,
}

impl MoveSlot {
    pub fn empty() -> Self {
        Self {
            name: NO_MOVE.to_string(),
            pp: 0,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Markings: u8 {
        const CIRCLE = 1 << 0;
        const TRIANGLE = 1 << 1;
        const SQUARE = 1 << 2;
        const HEART = 1 << 3;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestStats {
    pub cool: u8,
    pub beauty: u8,
    pub cute: u8,
    pub smart: u8,
    pub tough: u8,
    pub feel: u8,
}

/// Record fields whose existence depends on the generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokemonField {
    HeldItem,
    Friendship,
    Gender,
    Shininess,
    LevelMet,
    TrainerGender,
    TrainerSecretId,
    Personality,
    Ability,
    Ball,
    OriginalGame,
    Markings,
    Ribbons,
    ContestStats,
}

impl PokemonField {
    pub const ALL: [PokemonField; 14] = [
        Self::HeldItem,
        Self::Friendship,
        Self::Gender,
        Self::Shininess,
        Self::LevelMet,
        Self::TrainerGender,
        Self::TrainerSecretId,
        Self::Personality,
        Self::Ability,
        Self::Ball,
        Self::OriginalGame,
        Self::Markings,
        Self::Ribbons,
        Self::ContestStats,
    ];

    pub fn introduced_in(self) -> Generation {
        match self {
            Self::HeldItem
            | Self::Friendship
            | Self::Gender
            | Self::Shininess
            | Self::LevelMet
            | Self::TrainerGender => Generation::II,
            _ => Generation::III,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeldItem => "held item",
            Self::Friendship => "friendship",
            Self::Gender => "gender",
            Self::Shininess => "shininess",
            Self::LevelMet => "level met",
            Self::TrainerGender => "trainer gender",
            Self::TrainerSecretId => "trainer secret ID",
            Self::Personality => "personality",
            Self::Ability => "ability",
            Self::Ball => "ball",
            Self::OriginalGame => "original game",
            Self::Markings => "markings",
            Self::Ribbons => "ribbons",
            Self::ContestStats => "contest stats",
        }
    }
}

impl fmt::Display for PokemonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `game` stores `field` at all.
pub fn game_supports(game: Game, field: PokemonField) -> bool {
    match field {
        // Gold and Silver never recorded the trainer's gender.
        PokemonField::TrainerGender if game.generation() == Generation::II => {
            game == Game::Crystal
        }
        _ => game.generation() >= field.introduced_in(),
    }
}

/// Medium-fast growth curve.
pub fn experience_at_level(level: u8) -> u32 {
    u32::from(level).pow(3)
}

fn level_for_experience(experience: u32) -> u8 {
    (1..=MAX_LEVEL)
        .rev()
        .find(|&level| experience_at_level(level) <= experience)
        .unwrap_or(1)
}

/// One creature as stored in a party or box slot.
///
/// Fields a generation does not store are `None`; their setters fail with
/// `Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub(crate) uid: RecordId,
    pub(crate) game: Game,
    pub(crate) species: String,
    pub(crate) nickname: String,
    pub(crate) trainer_name: String,
    pub(crate) trainer_public_id: u16,
    pub(crate) experience: u32,
    pub(crate) level: u8,
    pub(crate) moves: [MoveSlot; 4],

    pub(crate) held_item: Option<String>,
    pub(crate) friendship: Option<u8>,
    pub(crate) gender: Option<Gender>,
    pub(crate) shiny: Option<bool>,
    pub(crate) level_met: Option<u8>,
    pub(crate) trainer_gender: Option<Gender>,

    pub(crate) trainer_secret_id: Option<u16>,
    pub(crate) personality: Option<u32>,
    pub(crate) ability: Option<String>,
    pub(crate) ball: Option<String>,
    pub(crate) original_game: Option<Game>,
    pub(crate) markings: Option<Markings>,
    pub(crate) ribbons: Option<BTreeSet<String>>,
    pub(crate) contest_stats: Option<ContestStats>,
}

impl Pokemon {
    pub fn new(species_name: &str, game: Game, level: u8) -> Result<Self, CoreError> {
        let exists = species(species_name).is_some_and(|record| record.exists_in(game));
        if !exists {
            return Err(CoreError::invalid_value(format!(
                "{species_name} does not exist in {game}"
            )));
        }
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(CoreError::out_of_range(format!(
                "level {level} is outside [1, {MAX_LEVEL}]"
            )));
        }
        Ok(Self::blank(game, species_name, level))
    }

    /// Empty-slot sentinel for `game`.
    pub fn none(game: Game) -> Self {
        Self::blank(game, NONE_SPECIES, 0)
    }

    /// Record with every field `game` stores set to its default.
    pub(crate) fn blank(game: Game, species_name: &str, level: u8) -> Self {
        let record = species(species_name);
        let gated = |field: PokemonField| game_supports(game, field);

        let default_gender = match record {
            Some(record) if !record.genderless => Gender::Male,
            _ => Gender::Genderless,
        };
        let level_met = match game.generation() {
            Generation::II => level.min(GEN2_MAX_LEVEL_MET),
            _ => level,
        };

        Self {
            uid: RecordId::fresh(),
            game,
            species: species_name.to_string(),
            nickname: if record.is_some() {
                species_name.to_uppercase()
            } else {
                NONE_SPECIES.to_string()
            },
            trainer_name: DEFAULT_TRAINER_NAME.to_string(),
            trainer_public_id: 0,
            experience: if level == 0 { 0 } else { experience_at_level(level) },
            level,
            moves: std::array::from_fn(|_| MoveSlot::empty()),

            held_item: gated(PokemonField::HeldItem).then(|| NO_ITEM.to_string()),
            friendship: gated(PokemonField::Friendship).then_some(DEFAULT_FRIENDSHIP),
            gender: gated(PokemonField::Gender).then_some(default_gender),
            shiny: gated(PokemonField::Shininess).then_some(false),
            level_met: gated(PokemonField::LevelMet).then_some(level_met),
            trainer_gender: gated(PokemonField::TrainerGender).then_some(Gender::Male),

            trainer_secret_id: gated(PokemonField::TrainerSecretId).then_some(0),
            personality: gated(PokemonField::Personality).then_some(0),
            ability: gated(PokemonField::Ability).then(|| {
                record
                    .map_or("None", |record| record.default_ability())
                    .to_string()
            }),
            ball: gated(PokemonField::Ball).then(|| DEFAULT_BALL.to_string()),
            original_game: gated(PokemonField::OriginalGame).then_some(game.canonical()),
            markings: gated(PokemonField::Markings).then_some(Markings::empty()),
            ribbons: gated(PokemonField::Ribbons).then(BTreeSet::new),
            contest_stats: gated(PokemonField::ContestStats).then(ContestStats::default),
        }
    }

    /// Field-for-field copy with a new record identity.
    pub fn duplicate(&self) -> Self {
        Self {
            uid: RecordId::fresh(),
            ..self.clone()
        }
    }

    pub fn uid(&self) -> RecordId {
        self.uid
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn is_none(&self) -> bool {
        self.species == NONE_SPECIES
    }

    pub fn supports(&self, field: PokemonField) -> bool {
        game_supports(self.game, field)
    }

    fn require(&self, field: PokemonField) -> Result<(), CoreError> {
        if self.supports(field) {
            Ok(())
        } else {
            Err(CoreError::unsupported(format!(
                "{} has no {field}",
                self.game
            )))
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, nickname: &str) -> Result<(), CoreError> {
        let len = nickname.chars().count();
        if len == 0 || len > MAX_NICKNAME_LEN {
            return Err(CoreError::invalid_value(format!(
                "nickname must be 1-{MAX_NICKNAME_LEN} characters"
            )));
        }
        self.nickname = nickname.to_string();
        Ok(())
    }

    pub fn trainer_name(&self) -> &str {
        &self.trainer_name
    }

    pub fn set_trainer_name(&mut self, name: &str) -> Result<(), CoreError> {
        let len = name.chars().count();
        if len == 0 || len > MAX_TRAINER_NAME_LEN {
            return Err(CoreError::invalid_value(format!(
                "trainer name must be 1-{MAX_TRAINER_NAME_LEN} characters"
            )));
        }
        self.trainer_name = name.to_string();
        Ok(())
    }

    pub fn trainer_public_id(&self) -> u16 {
        self.trainer_public_id
    }

    pub fn set_trainer_public_id(&mut self, id: u16) {
        self.trainer_public_id = id;
    }

    pub fn trainer_secret_id(&self) -> Option<u16> {
        self.trainer_secret_id
    }

    pub fn set_trainer_secret_id(&mut self, id: u16) -> Result<(), CoreError> {
        self.require(PokemonField::TrainerSecretId)?;
        self.trainer_secret_id = Some(id);
        Ok(())
    }

    /// Full trainer ID: secret half in the upper 16 bits where it exists.
    pub fn trainer_id(&self) -> u32 {
        let secret = u32::from(self.trainer_secret_id.unwrap_or(0));
        (secret << 16) | u32::from(self.trainer_public_id)
    }

    pub fn trainer_gender(&self) -> Option<Gender> {
        self.trainer_gender
    }

    pub fn set_trainer_gender(&mut self, gender: Gender) -> Result<(), CoreError> {
        self.require(PokemonField::TrainerGender)?;
        if gender == Gender::Genderless {
            return Err(CoreError::invalid_value("trainer gender must be Male or Female"));
        }
        self.trainer_gender = Some(gender);
        Ok(())
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn set_experience(&mut self, experience: u32) -> Result<(), CoreError> {
        let max = experience_at_level(MAX_LEVEL);
        if experience > max {
            return Err(CoreError::out_of_range(format!(
                "experience {experience} is above the maximum of {max}"
            )));
        }
        self.experience = experience;
        self.level = level_for_experience(experience);
        Ok(())
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) -> Result<(), CoreError> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(CoreError::out_of_range(format!(
                "level {level} is outside [1, {MAX_LEVEL}]"
            )));
        }
        self.level = level;
        self.experience = experience_at_level(level);
        Ok(())
    }

    pub fn moves(&self) -> &[MoveSlot; 4] {
        &self.moves
    }

    pub fn set_move(&mut self, index: usize, name: &str, pp: u8) -> Result<(), CoreError> {
        if index >= self.moves.len() {
            return Err(CoreError::out_of_range(format!(
                "move index {index} is outside [0, 4)"
            )));
        }
        if name.is_empty() {
            return Err(CoreError::invalid_value("move name cannot be empty"));
        }
        self.moves[index] = MoveSlot {
            name: name.to_string(),
            pp,
        };
        Ok(())
    }

    pub fn held_item(&self) -> Option<&str> {
        self.held_item.as_deref()
    }

    pub fn set_held_item(&mut self, item: &str) -> Result<(), CoreError> {
        self.require(PokemonField::HeldItem)?;
        if item != NO_ITEM && !is_holdable_in(item, self.game) {
            return Err(CoreError::invalid_value(format!(
                "{item} cannot be held in {}",
                self.game
            )));
        }
        self.held_item = Some(item.to_string());
        Ok(())
    }

    pub fn friendship(&self) -> Option<u8> {
        self.friendship
    }

    pub fn set_friendship(&mut self, friendship: u8) -> Result<(), CoreError> {
        self.require(PokemonField::Friendship)?;
        self.friendship = Some(friendship);
        Ok(())
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn set_gender(&mut self, gender: Gender) -> Result<(), CoreError> {
        self.require(PokemonField::Gender)?;
        let genderless = species(&self.species).is_none_or(|record| record.genderless);
        if genderless != (gender == Gender::Genderless) {
            return Err(CoreError::invalid_value(format!(
                "{} cannot be {gender}",
                self.species
            )));
        }
        self.gender = Some(gender);
        Ok(())
    }

    pub fn is_shiny(&self) -> Option<bool> {
        self.shiny
    }

    pub fn set_shininess(&mut self, shiny: bool) -> Result<(), CoreError> {
        self.require(PokemonField::Shininess)?;
        self.shiny = Some(shiny);
        Ok(())
    }

    pub fn level_met(&self) -> Option<u8> {
        self.level_met
    }

    pub fn set_level_met(&mut self, level: u8) -> Result<(), CoreError> {
        self.require(PokemonField::LevelMet)?;
        let max = match self.game.generation() {
            Generation::II => GEN2_MAX_LEVEL_MET,
            _ => MAX_LEVEL,
        };
        if level > max {
            return Err(CoreError::out_of_range(format!(
                "level met {level} is above the maximum of {max}"
            )));
        }
        self.level_met = Some(level);
        Ok(())
    }

    pub fn personality(&self) -> Option<u32> {
        self.personality
    }

    pub fn set_personality(&mut self, personality: u32) -> Result<(), CoreError> {
        self.require(PokemonField::Personality)?;
        self.personality = Some(personality);
        Ok(())
    }

    pub fn ability(&self) -> Option<&str> {
        self.ability.as_deref()
    }

    pub fn set_ability(&mut self, ability: &str) -> Result<(), CoreError> {
        self.require(PokemonField::Ability)?;
        let known = species(&self.species).is_some_and(|record| record.abilities.contains(&ability));
        if !known {
            return Err(CoreError::invalid_value(format!(
                "{} cannot have the ability {ability}",
                self.species
            )));
        }
        self.ability = Some(ability.to_string());
        Ok(())
    }

    pub fn ball(&self) -> Option<&str> {
        self.ball.as_deref()
    }

    pub fn set_ball(&mut self, ball: &str) -> Result<(), CoreError> {
        self.require(PokemonField::Ball)?;
        let is_ball = is_item_valid(ball, self.game)
            && item_info(ball).is_some_and(|info| info.category == ItemCategory::Ball);
        if !is_ball {
            return Err(CoreError::invalid_value(format!(
                "{ball} is not a ball in {}",
                self.game
            )));
        }
        self.ball = Some(ball.to_string());
        Ok(())
    }

    pub fn original_game(&self) -> Option<Game> {
        self.original_game
    }

    pub fn set_original_game(&mut self, game: Game) -> Result<(), CoreError> {
        self.require(PokemonField::OriginalGame)?;
        if game.generation() != Generation::III {
            return Err(CoreError::invalid_value(format!(
                "{game} cannot be recorded as an original game"
            )));
        }
        self.original_game = Some(game.canonical());
        Ok(())
    }

    pub fn markings(&self) -> Option<Markings> {
        self.markings
    }

    pub fn set_marking(&mut self, marking: Markings, on: bool) -> Result<(), CoreError> {
        self.require(PokemonField::Markings)?;
        let mut markings = self.markings.unwrap_or_else(Markings::empty);
        markings.set(marking, on);
        self.markings = Some(markings);
        Ok(())
    }

    pub fn ribbons(&self) -> Option<&BTreeSet<String>> {
        self.ribbons.as_ref()
    }

    pub fn set_ribbon(&mut self, ribbon: &str, on: bool) -> Result<(), CoreError> {
        self.require(PokemonField::Ribbons)?;
        if !RIBBON_NAMES.contains(&ribbon) {
            return Err(CoreError::invalid_value(format!("unknown ribbon '{ribbon}'")));
        }
        let ribbons = self.ribbons.get_or_insert_with(BTreeSet::new);
        if on {
            ribbons.insert(ribbon.to_string());
        } else {
            ribbons.remove(ribbon);
        }
        Ok(())
    }

    pub fn contest_stats(&self) -> Option<ContestStats> {
        self.contest_stats
    }

    pub fn set_contest_stats(&mut self, stats: ContestStats) -> Result<(), CoreError> {
        self.require(PokemonField::ContestStats)?;
        self.contest_stats = Some(stats);
        Ok(())
    }
}

impl SlotValue for Pokemon {
    fn same_identity(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

pub(crate) fn is_holdable_in(item: &str, game: Game) -> bool {
    is_item_valid(item, game) && item_info(item).is_some_and(|info| info.category.is_holdable())
}
