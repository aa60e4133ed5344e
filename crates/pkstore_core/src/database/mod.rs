//! Compiled-in game metadata and the validation queries containers run
//! before every mutation.

pub mod items;
pub mod policy;
pub mod species;

pub use items::{GameSet, ItemCategory, ItemInfo, item_info, item_names, is_item_valid};
pub use policy::{
    GamePolicy, PARTY_CAPACITY, PC_POCKET_NAME, PocketLayout, PocketPolicy, StoragePolicy,
    game_policy, pocket_policy,
};
pub use species::{NONE_SPECIES, SpeciesRecord, is_species_valid, species, species_names};

use crate::core_api::{CoreError, Game};
use crate::slots::Discipline;

fn require_pocket(pocket_name: &str, game: Game) -> Result<&'static PocketPolicy, CoreError> {
    pocket_policy(game, pocket_name).ok_or_else(|| {
        CoreError::key_not_found(format!("{game} has no pocket named '{pocket_name}'"))
    })
}

/// Whether `item` may be stored in the pocket called `pocket_name`.
/// Unknown pockets accept nothing.
pub fn is_item_valid_for_pocket(item: &str, pocket_name: &str, game: Game) -> bool {
    let Some(pocket) = pocket_policy(game, pocket_name) else {
        return false;
    };
    item_info(item)
        .is_some_and(|info| info.games.includes(game) && pocket.accepts_category(info.category))
}

pub fn pocket_capacity(pocket_name: &str, game: Game) -> Result<usize, CoreError> {
    require_pocket(pocket_name, game).map(|pocket| pocket.capacity)
}

pub fn max_stack(pocket_name: &str, game: Game) -> Result<u32, CoreError> {
    require_pocket(pocket_name, game).map(|pocket| pocket.max_stack)
}

/// Bag pocket names in canonical order. The PC item list is not included.
pub fn pocket_names(game: Game) -> Vec<&'static str> {
    game_policy(game)
        .pockets
        .iter()
        .map(|pocket| pocket.name)
        .collect()
}

/// Name of the bag pocket that stores `item` in `game`.
pub fn owning_pocket(item: &str, game: Game) -> Option<&'static str> {
    game_policy(game)
        .pockets
        .iter()
        .find(|pocket| is_item_valid_for_pocket(item, pocket.name, game))
        .map(|pocket| pocket.name)
}

pub fn box_capacity(game: Game) -> usize {
    game_policy(game).storage.box_capacity
}

pub fn box_count(game: Game) -> usize {
    game_policy(game).storage.box_count
}

pub fn box_discipline(game: Game) -> Discipline {
    game_policy(game).storage.discipline
}

pub fn box_name_max_len(game: Game) -> Option<usize> {
    game_policy(game).storage.box_name_max_len
}

pub fn party_capacity(_game: Game) -> usize {
    PARTY_CAPACITY
}
