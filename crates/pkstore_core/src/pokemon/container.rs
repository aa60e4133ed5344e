use std::ops::{Deref, DerefMut};

use log::{debug, trace};

use crate::core_api::{CoreError, Game};
use crate::database::{PARTY_CAPACITY, box_capacity, box_discipline, box_name_max_len, is_species_valid};
use crate::slots::{Discipline, SlottedList};

use super::record::Pokemon;

/// Creature slots shared by parties and boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonList {
    game: Game,
    slots: SlottedList<Pokemon>,
}

impl PokemonList {
    pub fn new(game: Game, capacity: usize, discipline: Discipline) -> Self {
        Self {
            game,
            slots: SlottedList::new(capacity, discipline),
        }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn discipline(&self) -> Discipline {
        self.slots.discipline()
    }

    pub fn num_pokemon(&self) -> usize {
        self.slots.occupied_count()
    }

    pub fn get(&self, index: usize) -> Result<Option<&Pokemon>, CoreError> {
        self.slots.get(index)
    }

    /// Copy of the record at `index`, or the empty sentinel.
    pub fn pokemon(&self, index: usize) -> Result<Pokemon, CoreError> {
        Ok(self
            .slots
            .get(index)?
            .cloned()
            .unwrap_or_else(|| Pokemon::none(self.game)))
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Pokemon>> + '_ {
        self.slots.iter()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Pokemon)> + '_ {
        self.slots.occupied()
    }

    /// Stores `pokemon` at `index`. An empty-species record clears the slot.
    ///
    /// A record whose identity already sits in another slot is stored as a
    /// duplicate, so no two slots ever share one identity.
    pub fn set(&mut self, index: usize, pokemon: Pokemon) -> Result<(), CoreError> {
        self.slots.check_index(index)?;
        if pokemon.game() != self.game {
            return Err(CoreError::invalid_value(format!(
                "a {} record cannot be stored in a {} container",
                pokemon.game(),
                self.game
            )));
        }

        if pokemon.is_none() {
            self.slots.set(index, None)?;
            trace!("slot {index} cleared");
            return Ok(());
        }

        if !is_species_valid(pokemon.species(), self.game) {
            return Err(CoreError::invalid_value(format!(
                "{} does not exist in {}",
                pokemon.species(),
                self.game
            )));
        }

        let uid = pokemon.uid();
        let aliased = self
            .slots
            .occupied()
            .any(|(other, stored)| other != index && stored.uid() == uid);
        let pokemon = if aliased {
            pokemon.duplicate()
        } else {
            pokemon
        };

        self.slots.set(index, Some(pokemon))?;
        Ok(())
    }

    /// Appends `pokemon` at the next free slot and returns its index.
    pub fn add(&mut self, pokemon: Pokemon) -> Result<usize, CoreError> {
        let index = self.slots.next_free().ok_or_else(|| {
            CoreError::out_of_range(format!("all {} slots are occupied", self.capacity()))
        })?;
        self.set(index, pokemon)?;
        Ok(index)
    }

    /// Takes the record out of `index`. Compacting containers shift later
    /// records left.
    pub fn remove(&mut self, index: usize) -> Result<Pokemon, CoreError> {
        let taken = self.slots.take(index)?;
        if taken.is_some() && self.discipline() == Discipline::Compacting {
            debug!(
                "{}: slot {index} emptied; {} record(s) remain packed",
                self.game,
                self.num_pokemon()
            );
        }
        Ok(taken.unwrap_or_else(|| Pokemon::none(self.game)))
    }

    pub fn move_pokemon(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        self.slots.move_entry(from, to)
    }

    /// Duplicates the record at `from` into `to` under a new identity.
    pub fn copy_into(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        self.slots.check_index(to)?;
        if from == to {
            return Err(CoreError::invalid_value(format!(
                "cannot copy slot {from} onto itself"
            )));
        }
        let source = self
            .slots
            .get(from)?
            .ok_or_else(|| CoreError::invalid_value(format!("slot {from} is empty")))?
            .duplicate();
        self.set(to, source)
    }
}

/// The six-slot active roster. Always compacting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonParty {
    list: PokemonList,
}

impl PokemonParty {
    pub fn new(game: Game) -> Self {
        Self {
            list: PokemonList::new(game, PARTY_CAPACITY, Discipline::Compacting),
        }
    }
}

impl Deref for PokemonParty {
    type Target = PokemonList;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for PokemonParty {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}

/// One page of PC storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonBox {
    name: String,
    list: PokemonList,
}

impl PokemonBox {
    pub fn new(game: Game) -> Self {
        Self {
            name: String::new(),
            list: PokemonList::new(game, box_capacity(game), box_discipline(game)),
        }
    }

    fn name_limit(&self) -> Result<usize, CoreError> {
        box_name_max_len(self.game()).ok_or_else(|| {
            CoreError::unsupported(format!("boxes cannot be named in {}", self.game()))
        })
    }

    pub fn name(&self) -> Result<&str, CoreError> {
        self.name_limit()?;
        Ok(&self.name)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CoreError> {
        let limit = self.name_limit()?;
        if name.chars().count() > limit {
            return Err(CoreError::invalid_value(format!(
                "box name '{name}' is longer than {limit} characters"
            )));
        }
        debug!("{}: box renamed '{}' -> '{name}'", self.game(), self.name);
        self.name = name.to_string();
        Ok(())
    }
}

impl Deref for PokemonBox {
    type Target = PokemonList;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for PokemonBox {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}
