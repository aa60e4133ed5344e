mod bag;
mod pocket;

pub use bag::ItemBag;
pub use pocket::ItemPocket;

use serde::{Deserialize, Serialize};

use crate::slots::SlotValue;

/// Occupied pocket cell: an item name and how many of it are stacked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub item: String,
    pub quantity: u32,
}

impl ItemSlot {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

impl SlotValue for ItemSlot {
    fn same_identity(&self, other: &Self) -> bool {
        self.item == other.item
    }
}
