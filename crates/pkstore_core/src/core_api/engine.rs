use crate::conversion;
use crate::items::{ItemBag, ItemPocket};
use crate::pokemon::{Pokemon, PokemonBox, PokemonParty, StoragePc};

use super::error::CoreError;
use super::types::{Entry, Game};

/// Entry point for building containers and converting entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// A bag pocket by name, or the `"PC"` item list.
    pub fn new_item_pocket(&self, name: &str, game: Game) -> Result<ItemPocket, CoreError> {
        ItemPocket::new(name, game)
    }

    pub fn new_item_bag(&self, game: Game) -> ItemBag {
        ItemBag::new(game)
    }

    pub fn new_pokemon_party(&self, game: Game) -> PokemonParty {
        PokemonParty::new(game)
    }

    pub fn new_pokemon_box(&self, game: Game) -> PokemonBox {
        PokemonBox::new(game)
    }

    pub fn new_storage_system(&self, game: Game) -> StoragePc {
        StoragePc::new(game)
    }

    pub fn new_pokemon(&self, species: &str, game: Game, level: u8) -> Result<Pokemon, CoreError> {
        Pokemon::new(species, game, level)
    }

    pub fn convert(&self, entry: &Entry, source: Game, dest: Game) -> Result<Entry, CoreError> {
        conversion::convert(entry, source, dest)
    }

    pub fn convert_bag(&self, bag: &ItemBag, dest: Game) -> Result<ItemBag, CoreError> {
        conversion::convert_bag(bag, dest)
    }
}
