use log::{debug, trace};

use crate::core_api::{CoreError, Game};
use crate::database::items::{TM_COUNT, numbered_item};
use crate::database::{ItemCategory, PocketLayout, PocketPolicy, item_info, item_names, pocket_policy};
use crate::slots::{Discipline, SlottedList};

use super::ItemSlot;

/// A named, fixed-capacity item list: one bag pocket or the PC item store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPocket {
    game: Game,
    policy: PocketPolicy,
    slots: SlottedList<ItemSlot>,
}

impl ItemPocket {
    pub fn new(name: &str, game: Game) -> Result<Self, CoreError> {
        let policy = pocket_policy(game, name).ok_or_else(|| {
            CoreError::key_not_found(format!("{game} has no pocket named '{name}'"))
        })?;
        Ok(Self::from_policy(game, *policy))
    }

    pub(crate) fn from_policy(game: Game, policy: PocketPolicy) -> Self {
        // Fixed pockets never shift, so they sit on a sparse list.
        let discipline = match policy.layout {
            PocketLayout::Packed => Discipline::Compacting,
            PocketLayout::Fixed => Discipline::Sparse,
        };
        Self {
            game,
            policy,
            slots: SlottedList::new(policy.capacity, discipline),
        }
    }

    pub fn name(&self) -> &str {
        self.policy.name
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn max_stack(&self) -> u32 {
        self.policy.max_stack
    }

    pub fn layout(&self) -> PocketLayout {
        self.policy.layout
    }

    pub fn num_items(&self) -> usize {
        self.slots.occupied_count()
    }

    pub fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    pub fn get(&self, index: usize) -> Result<Option<&ItemSlot>, CoreError> {
        self.slots.get(index)
    }

    /// Every slot in index order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ItemSlot>> + '_ {
        self.slots.iter()
    }

    /// Occupied slots in index order.
    pub fn items(&self) -> impl Iterator<Item = &ItemSlot> + '_ {
        self.slots.occupied().map(|(_, slot)| slot)
    }

    pub fn quantity_of(&self, item: &str) -> u32 {
        self.items()
            .find(|slot| slot.item == item)
            .map_or(0, |slot| slot.quantity)
    }

    pub fn accepts(&self, item: &str) -> bool {
        item_info(item).is_some_and(|info| {
            info.games.includes(self.game) && self.policy.accepts_category(info.category)
        })
    }

    /// Items this pocket would accept, in catalog order.
    pub fn valid_items(&self) -> Vec<String> {
        item_names(self.game)
            .into_iter()
            .filter(|item| self.accepts(item))
            .collect()
    }

    /// Item that owns `index` in a fixed-layout pocket. `None` for packed
    /// pockets, which have no designated positions.
    pub fn designated_item(&self, index: usize) -> Result<Option<String>, CoreError> {
        self.slots.check_index(index)?;
        if self.policy.layout == PocketLayout::Packed {
            return Ok(None);
        }
        let tm_count = usize::from(TM_COUNT);
        let name = if index < tm_count {
            format!("TM{:02}", index + 1)
        } else {
            format!("HM{:02}", index - tm_count + 1)
        };
        Ok(Some(name))
    }

    fn fixed_index(&self, item: &str) -> Option<usize> {
        match numbered_item(item)? {
            (ItemCategory::Tm, n) => Some(usize::from(n) - 1),
            (ItemCategory::Hm, n) => Some(usize::from(TM_COUNT) + usize::from(n) - 1),
            _ => None,
        }
    }

    fn check_amount(&self, amount: u32) -> Result<(), CoreError> {
        if amount == 0 || amount > self.policy.max_stack {
            return Err(CoreError::out_of_range(format!(
                "amount {amount} is outside [1, {}]",
                self.policy.max_stack
            )));
        }
        Ok(())
    }

    fn check_accepts(&self, item: &str) -> Result<(), CoreError> {
        if self.accepts(item) {
            Ok(())
        } else {
            Err(CoreError::invalid_value(format!(
                "{item} cannot be stored in the {} pocket for {}",
                self.policy.name, self.game
            )))
        }
    }

    fn position_of(&self, item: &str) -> Option<usize> {
        self.slots.position(|slot| slot.item == item)
    }

    /// Adds `amount` of `item`, stacking onto an existing slot when the item
    /// is already present. Single-stack pockets reject a second copy.
    pub fn add(&mut self, item: &str, amount: u32) -> Result<(), CoreError> {
        self.check_amount(amount)?;
        self.check_accepts(item)?;

        if let Some(index) = self.position_of(item) {
            if self.policy.max_stack == 1 {
                return Err(CoreError::invalid_value(format!(
                    "{item} is already in the {} pocket",
                    self.policy.name
                )));
            }
            let current = self.slots.get(index)?.map_or(0, |slot| slot.quantity);
            let total = current + amount;
            if total > self.policy.max_stack {
                return Err(CoreError::out_of_range(format!(
                    "{item} would stack to {total}, above the limit of {}",
                    self.policy.max_stack
                )));
            }
            if let Some(slot) = self.slots.get_mut(index)? {
                slot.quantity = total;
            }
            trace!("{}: {item} stacked to {total} at slot {index}", self.policy.name);
            return Ok(());
        }

        let entry = ItemSlot::new(item, amount);
        let index = match self.policy.layout {
            PocketLayout::Packed => self.slots.push(entry)?,
            PocketLayout::Fixed => {
                let index = self.fixed_index(item).ok_or_else(|| {
                    CoreError::invalid_value(format!("{item} has no slot in {}", self.policy.name))
                })?;
                self.slots.set(index, Some(entry))?;
                index
            }
        };
        trace!("{}: {item} x{amount} placed at slot {index}", self.policy.name);
        Ok(())
    }

    /// Removes `amount` of `item`. A slot that reaches zero is emptied and,
    /// in packed pockets, later slots close the gap.
    pub fn remove(&mut self, item: &str, amount: u32) -> Result<(), CoreError> {
        self.check_amount(amount)?;
        self.check_accepts(item)?;

        let index = self.position_of(item).ok_or_else(|| {
            CoreError::invalid_value(format!("{item} is not in the {} pocket", self.policy.name))
        })?;
        let current = self.slots.get(index)?.map_or(0, |slot| slot.quantity);
        if amount > current {
            return Err(CoreError::out_of_range(format!(
                "cannot remove {amount} {item}; only {current} present"
            )));
        }

        if amount == current {
            self.slots.take(index)?;
            if self.policy.layout == PocketLayout::Packed {
                debug!(
                    "{}: {item} emptied slot {index}; {} item(s) remain packed",
                    self.policy.name,
                    self.slots.occupied_count()
                );
            }
        } else if let Some(slot) = self.slots.get_mut(index)? {
            slot.quantity = current - amount;
        }
        Ok(())
    }

    /// Direct assignment. `None` or a quantity of zero clears the slot.
    pub fn set(&mut self, index: usize, entry: Option<ItemSlot>) -> Result<(), CoreError> {
        self.slots.check_index(index)?;
        let entry = entry.filter(|slot| slot.quantity > 0);

        if let Some(slot) = &entry {
            if slot.quantity > self.policy.max_stack {
                return Err(CoreError::out_of_range(format!(
                    "quantity {} is above the limit of {}",
                    slot.quantity, self.policy.max_stack
                )));
            }
            self.check_accepts(&slot.item)?;
            if self.policy.layout == PocketLayout::Fixed
                && self.fixed_index(&slot.item) != Some(index)
            {
                return Err(CoreError::invalid_value(format!(
                    "{} does not belong at slot {index}",
                    slot.item
                )));
            }
            match self.position_of(&slot.item) {
                Some(existing) if existing != index => {
                    return Err(CoreError::invalid_value(format!(
                        "{} is already stored at slot {existing}",
                        slot.item
                    )));
                }
                _ => {}
            }
        }

        self.slots.set(index, entry)?;
        Ok(())
    }

    pub fn set_item(&mut self, index: usize, item: &str, quantity: u32) -> Result<(), CoreError> {
        self.set(index, Some(ItemSlot::new(item, quantity)))
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        if self.policy.layout == PocketLayout::Fixed {
            return Err(CoreError::unsupported(format!(
                "items in the {} pocket have fixed positions",
                self.policy.name
            )));
        }
        self.slots.move_entry(from, to)
    }
}
