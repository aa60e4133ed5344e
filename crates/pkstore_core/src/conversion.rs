//! Moving entries between games.
//!
//! Fields both games store are copied verbatim. Fields only the source
//! stores are dropped. Fields only the destination stores take the
//! destination's defaults: no held item, friendship 70, the species' first
//! ability, a Poké Ball, and the destination (canonical twin) as the
//! original game. Level met is set to the level at transfer.

use log::debug;

use crate::core_api::{CoreError, Entry, Game};
use crate::database::{is_item_valid, is_species_valid};
use crate::items::{ItemBag, ItemSlot};
use crate::pokemon::{NO_ITEM, Pokemon, PokemonField, is_holdable_in};

pub fn convert(entry: &Entry, source: Game, dest: Game) -> Result<Entry, CoreError> {
    match entry {
        Entry::None => Ok(Entry::None),
        Entry::Item(slot) if slot.quantity == 0 => Ok(Entry::None),
        Entry::Item(slot) => convert_item(slot, source, dest).map(Entry::Item),
        Entry::Creature(pokemon) => {
            if pokemon.game() != source {
                return Err(CoreError::invalid_value(format!(
                    "record belongs to {}, not {source}",
                    pokemon.game()
                )));
            }
            let converted = convert_pokemon(pokemon, dest)?;
            if converted.is_none() {
                Ok(Entry::None)
            } else {
                Ok(Entry::Creature(converted))
            }
        }
    }
}

pub fn convert_item(slot: &ItemSlot, source: Game, dest: Game) -> Result<ItemSlot, CoreError> {
    if !is_item_valid(&slot.item, source) {
        return Err(CoreError::invalid_value(format!(
            "{} does not exist in {source}",
            slot.item
        )));
    }
    if !is_item_valid(&slot.item, dest) {
        return Err(CoreError::invalid_value(format!(
            "{} does not exist in {dest}",
            slot.item
        )));
    }
    Ok(slot.clone())
}

/// Rebuilds `pokemon` for `dest`. The result carries a new record identity.
pub fn convert_pokemon(pokemon: &Pokemon, dest: Game) -> Result<Pokemon, CoreError> {
    if pokemon.is_none() {
        return Ok(Pokemon::none(dest));
    }
    if !is_species_valid(pokemon.species(), dest) {
        return Err(CoreError::invalid_value(format!(
            "{} does not exist in {dest}",
            pokemon.species()
        )));
    }

    let source = pokemon.game();
    let mut out = Pokemon::blank(dest, pokemon.species(), pokemon.level());

    out.nickname.clone_from(&pokemon.nickname);
    out.trainer_name.clone_from(&pokemon.trainer_name);
    out.trainer_public_id = pokemon.trainer_public_id;
    out.experience = pokemon.experience;
    out.moves.clone_from(&pokemon.moves);

    for field in PokemonField::ALL {
        match (pokemon.supports(field), out.supports(field)) {
            (true, false) => debug!("{source} -> {dest}: dropped {field}"),
            (false, true) => debug!("{source} -> {dest}: {field} set to default"),
            _ => {}
        }
    }

    if out.held_item.is_some() {
        if let Some(item) = pokemon.held_item() {
            if item == NO_ITEM || is_holdable_in(item, dest) {
                out.held_item = Some(item.to_string());
            } else {
                debug!("{source} -> {dest}: held item {item} cleared");
            }
        }
    }
    carry(&mut out.friendship, pokemon.friendship);
    carry(&mut out.gender, pokemon.gender);
    carry(&mut out.shiny, pokemon.shiny);
    carry(&mut out.trainer_gender, pokemon.trainer_gender);

    carry(&mut out.trainer_secret_id, pokemon.trainer_secret_id);
    carry(&mut out.personality, pokemon.personality);
    carry(&mut out.ability, pokemon.ability.clone());
    carry(&mut out.original_game, pokemon.original_game);
    carry(&mut out.markings, pokemon.markings);
    carry(&mut out.ribbons, pokemon.ribbons.clone());
    carry(&mut out.contest_stats, pokemon.contest_stats);
    if let Some(ball) = pokemon.ball() {
        if out.ball.is_some() && is_item_valid(ball, dest) {
            out.ball = Some(ball.to_string());
        }
    }

    Ok(out)
}

/// Overwrites a destination field with the source value when both games
/// store it.
fn carry<T>(dest: &mut Option<T>, source: Option<T>) {
    if dest.is_some() {
        if let Some(value) = source {
            *dest = Some(value);
        }
    }
}

/// Rebuilds a whole bag for `dest`, routing every stack to the pocket that
/// owns it there. Fails without a partial result if any stack cannot be
/// represented.
pub fn convert_bag(bag: &ItemBag, dest: Game) -> Result<ItemBag, CoreError> {
    let mut out = ItemBag::new(dest);
    for pocket in bag.pockets() {
        for slot in pocket.items() {
            let converted = convert_item(slot, bag.game(), dest)?;
            out.add(&converted.item, converted.quantity)?;
        }
    }
    Ok(out)
}
