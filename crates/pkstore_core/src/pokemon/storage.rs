use crate::core_api::{CoreError, Game};
use crate::database::{box_count, box_name_max_len};

use super::container::PokemonBox;

/// The PC: an ordered run of boxes for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePc {
    game: Game,
    boxes: Vec<PokemonBox>,
}

impl StoragePc {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            boxes: (0..box_count(game)).map(|_| PokemonBox::new(game)).collect(),
        }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn num_boxes(&self) -> usize {
        self.boxes.len()
    }

    pub fn num_pokemon(&self) -> usize {
        self.boxes.iter().map(|pc_box| pc_box.num_pokemon()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PokemonBox> + '_ {
        self.boxes.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index < self.boxes.len() {
            Ok(())
        } else {
            Err(CoreError::out_of_range(format!(
                "box {index} is outside [0, {})",
                self.boxes.len()
            )))
        }
    }

    pub fn box_at(&self, index: usize) -> Result<&PokemonBox, CoreError> {
        self.check_index(index)?;
        Ok(&self.boxes[index])
    }

    pub fn box_at_mut(&mut self, index: usize) -> Result<&mut PokemonBox, CoreError> {
        self.check_index(index)?;
        Ok(&mut self.boxes[index])
    }

    pub fn box_names(&self) -> Result<Vec<&str>, CoreError> {
        self.boxes.iter().map(PokemonBox::name).collect()
    }

    fn position_by_name(&self, name: &str) -> Result<usize, CoreError> {
        if box_name_max_len(self.game).is_none() {
            return Err(CoreError::unsupported(format!(
                "boxes cannot be named in {}",
                self.game
            )));
        }
        self.boxes
            .iter()
            .position(|pc_box| !name.is_empty() && pc_box.name().is_ok_and(|n| n == name))
            .ok_or_else(|| CoreError::key_not_found(format!("no box named '{name}'")))
    }

    pub fn box_by_name(&self, name: &str) -> Result<&PokemonBox, CoreError> {
        let index = self.position_by_name(name)?;
        Ok(&self.boxes[index])
    }

    pub fn box_by_name_mut(&mut self, name: &str) -> Result<&mut PokemonBox, CoreError> {
        let index = self.position_by_name(name)?;
        Ok(&mut self.boxes[index])
    }
}
