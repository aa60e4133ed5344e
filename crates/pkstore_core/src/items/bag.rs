use log::debug;

use crate::core_api::{CoreError, Game};
use crate::database::game_policy;

use super::ItemPocket;

/// Every bag pocket for one game, in the game's canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBag {
    game: Game,
    pockets: Vec<ItemPocket>,
}

impl ItemBag {
    pub fn new(game: Game) -> Self {
        let pockets = game_policy(game)
            .pockets
            .iter()
            .map(|policy| ItemPocket::from_policy(game, *policy))
            .collect();
        Self { game, pockets }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn pocket_names(&self) -> Vec<&str> {
        self.pockets.iter().map(ItemPocket::name).collect()
    }

    pub fn pockets(&self) -> impl Iterator<Item = &ItemPocket> + '_ {
        self.pockets.iter()
    }

    pub fn num_pockets(&self) -> usize {
        self.pockets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pockets.iter().all(ItemPocket::is_empty)
    }

    pub fn pocket(&self, name: &str) -> Result<&ItemPocket, CoreError> {
        self.pockets
            .iter()
            .find(|pocket| pocket.name() == name)
            .ok_or_else(|| {
                CoreError::key_not_found(format!("{} has no pocket named '{name}'", self.game))
            })
    }

    pub fn pocket_mut(&mut self, name: &str) -> Result<&mut ItemPocket, CoreError> {
        let game = self.game;
        self.pockets
            .iter_mut()
            .find(|pocket| pocket.name() == name)
            .ok_or_else(|| {
                CoreError::key_not_found(format!("{game} has no pocket named '{name}'"))
            })
    }

    fn owning_index(&self, item: &str) -> Result<usize, CoreError> {
        self.pockets
            .iter()
            .position(|pocket| pocket.accepts(item))
            .ok_or_else(|| {
                CoreError::invalid_value(format!("no {} pocket accepts {item}", self.game))
            })
    }

    /// Name of the pocket `item` is routed to.
    pub fn owning_pocket(&self, item: &str) -> Result<&str, CoreError> {
        let index = self.owning_index(item)?;
        Ok(self.pockets[index].name())
    }

    pub fn add(&mut self, item: &str, amount: u32) -> Result<(), CoreError> {
        let index = self.owning_index(item)?;
        let pocket = &mut self.pockets[index];
        pocket.add(item, amount)?;
        debug!("bag: added {amount} {item} to {}", pocket.name());
        Ok(())
    }

    pub fn remove(&mut self, item: &str, amount: u32) -> Result<(), CoreError> {
        let index = self.owning_index(item)?;
        let pocket = &mut self.pockets[index];
        pocket.remove(item, amount)?;
        debug!("bag: removed {amount} {item} from {}", pocket.name());
        Ok(())
    }

    pub fn quantity_of(&self, item: &str) -> u32 {
        self.owning_index(item)
            .map_or(0, |index| self.pockets[index].quantity_of(item))
    }
}
