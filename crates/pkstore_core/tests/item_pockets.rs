use pkstore_core::core_api::{CoreErrorCode, Engine, Game};
use pkstore_core::database::PocketLayout;
use pkstore_core::items::{ItemPocket, ItemSlot};

fn pocket(name: &str, game: Game) -> ItemPocket {
    Engine::new()
        .new_item_pocket(name, game)
        .unwrap_or_else(|e| panic!("failed to build {name} for {game}: {e}"))
}

fn slot(pocket: &ItemPocket, index: usize) -> Option<ItemSlot> {
    pocket.get(index).expect("index should be valid").cloned()
}

#[test]
fn full_pocket_rejects_another_distinct_item() {
    let mut items = pocket("Items", Game::Red);
    assert_eq!(items.capacity(), 20);
    assert_eq!(items.max_stack(), 99);

    let valid = items.valid_items();
    for item in valid.iter().take(20) {
        items.add(item, 1).expect("distinct item should fit");
    }
    assert_eq!(items.num_items(), 20);

    let err = items.add(&valid[20], 1).expect_err("21st item should not fit");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
    assert_eq!(items.num_items(), 20);

    items.add(&valid[0], 5).expect("existing item should still stack");
    assert_eq!(items.quantity_of(&valid[0]), 6);
}

#[test]
fn stacks_sum_up_to_max_stack() {
    let mut items = pocket("Items", Game::Gold);
    items.add("Potion", 50).expect("add 50");
    items.add("Potion", 49).expect("add 49");
    assert_eq!(slot(&items, 0), Some(ItemSlot::new("Potion", 99)));

    let err = items.add("Potion", 1).expect_err("stack is full");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
    assert_eq!(items.quantity_of("Potion"), 99);

    for amount in [0, 100] {
        let err = items.add("Antidote", amount).expect_err("amount out of bounds");
        assert_eq!(err.code, CoreErrorCode::OutOfRange);
    }
    assert_eq!(items.num_items(), 1);
}

#[test]
fn rejects_items_from_other_pockets_and_games() {
    let mut items = pocket("Items", Game::Gold);
    for item in ["Great Ball", "Bicycle", "TM01", "Black Sludge", "TM51", "Lava Cookie"] {
        let err = items.add(item, 1).expect_err("item should be rejected");
        assert_eq!(err.code, CoreErrorCode::InvalidValue, "{item}");
    }
    assert!(items.is_empty());

    // Generation II keeps berries and mail with general items.
    items.add("Berry", 2).expect("berry");
    items.add("Flower Mail", 1).expect("mail");
    assert_eq!(items.num_items(), 2);
}

#[test]
fn removing_a_stack_packs_later_slots() {
    let mut items = pocket("Items", Game::Silver);
    items.add("Potion", 5).expect("potion");
    items.add("Antidote", 3).expect("antidote");
    items.add("Ether", 2).expect("ether");

    items.remove("Antidote", 1).expect("partial remove");
    assert_eq!(slot(&items, 1), Some(ItemSlot::new("Antidote", 2)));

    items.remove("Potion", 5).expect("remove whole stack");
    assert_eq!(slot(&items, 0), Some(ItemSlot::new("Antidote", 2)));
    assert_eq!(slot(&items, 1), Some(ItemSlot::new("Ether", 2)));
    assert_eq!(slot(&items, 2), None);
    assert_eq!(items.num_items(), 2);
}

#[test]
fn remove_reports_missing_and_excess_amounts() {
    let mut items = pocket("Items", Game::Emerald);
    items.add("Ether", 2).expect("ether");
    let before = items.clone();

    let err = items.remove("Ether", 3).expect_err("more than present");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
    let err = items.remove("Ether", 0).expect_err("zero amount");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
    let err = items.remove("Burn Heal", 1).expect_err("not present");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    let err = items.remove("Master Ball", 1).expect_err("wrong pocket");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    assert_eq!(items, before);
}

#[test]
fn add_then_remove_restores_pocket() {
    let mut items = pocket("Items", Game::FireRed);
    items.add("Potion", 4).expect("potion");
    items.add("Revive", 1).expect("revive");
    let before = items.clone();

    items.add("Rare Candy", 7).expect("add");
    items.remove("Rare Candy", 7).expect("remove");
    assert_eq!(items, before);

    items.add("Potion", 3).expect("stack");
    items.remove("Potion", 3).expect("unstack");
    assert_eq!(items, before);
}

#[test]
fn direct_assignment_follows_packing_rules() {
    let mut items = pocket("Items", Game::Ruby);

    items.set_item(0, "Potion", 1).expect("first slot");
    let err = items.set_item(2, "Antidote", 1).expect_err("gap");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    let err = items.set_item(1, "Potion", 2).expect_err("duplicate identity");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    let err = items.set(0, slot(&items, 0)).expect_err("self assignment");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    let err = items.set_item(20, "Potion", 1).expect_err("past capacity");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
    let err = items.set_item(1, "Antidote", 100).expect_err("above max stack");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);

    items.set_item(0, "Potion", 5).expect("quantity change");
    items.set_item(1, "Antidote", 1).expect("append");
    assert_eq!(items.num_items(), 2);

    let err = items.set(0, None).expect_err("interior clear");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    items.set(1, None).expect("clear last slot");
    assert_eq!(items.num_items(), 1);
    items.set_item(0, "Potion", 0).expect("zero quantity clears");
    assert!(items.is_empty());
}

#[test]
fn move_keeps_items_packed() {
    let mut items = pocket("Items", Game::Emerald);
    for item in ["Potion", "Antidote", "Ether"] {
        items.add(item, 1).expect("add");
    }

    items.move_item(0, 2).expect("move");
    let order: Vec<&str> = items.items().map(|slot| slot.item.as_str()).collect();
    assert_eq!(order, vec!["Antidote", "Ether", "Potion"]);

    let err = items.move_item(0, 5).expect_err("past occupied slots");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
    let err = items.move_item(0, 30).expect_err("past capacity");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);
}

#[test]
fn generation_two_key_items_hold_single_copies() {
    let mut keys = pocket("KeyItems", Game::Crystal);
    assert_eq!(keys.max_stack(), 1);

    keys.add("Bicycle", 1).expect("bicycle");
    let err = keys.add("Bicycle", 1).expect_err("second copy");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    assert_eq!(keys.quantity_of("Bicycle"), 1);
    assert_eq!(keys.num_items(), 1);
    let err = keys.add("SquirtBottle", 2).expect_err("stack of two");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);

    keys.add("Clear Bell", 1).expect("crystal-only key item");
    let err = pocket("KeyItems", Game::Gold)
        .add("Clear Bell", 1)
        .expect_err("not in Gold");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn generation_two_machines_have_fixed_slots() {
    let mut machines = pocket("TM/HM", Game::Gold);
    assert_eq!(machines.capacity(), 57);
    assert_eq!(machines.layout(), PocketLayout::Fixed);

    machines.add("TM05", 3).expect("tm05");
    machines.add("HM02", 1).expect("hm02");
    assert_eq!(slot(&machines, 4), Some(ItemSlot::new("TM05", 3)));
    assert_eq!(slot(&machines, 51), Some(ItemSlot::new("HM02", 1)));
    assert_eq!(slot(&machines, 0), None);
    assert_eq!(machines.num_items(), 2);

    assert_eq!(
        machines.designated_item(56).expect("valid index"),
        Some("HM07".to_string())
    );
    let err = machines.set_item(0, "TM02", 1).expect_err("wrong slot");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    machines.set_item(1, "TM02", 1).expect("designated slot");

    let err = machines.move_item(4, 1).expect_err("fixed layout");
    assert_eq!(err.code, CoreErrorCode::Unsupported);

    machines.remove("TM05", 3).expect("remove");
    assert_eq!(slot(&machines, 4), None);
    assert_eq!(slot(&machines, 51), Some(ItemSlot::new("HM02", 1)));

    let err = machines.add("HM08", 1).expect_err("not in Generation II");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn pc_item_list_accepts_every_category() {
    let mut pc = pocket("PC", Game::Ruby);
    assert_eq!(pc.capacity(), 50);
    for item in ["Potion", "Mach Bike", "Master Ball", "TM10", "Oran Berry"] {
        pc.add(item, 1).expect("pc item");
    }
    assert_eq!(pc.num_items(), 5);

    assert_eq!(pocket("PC", Game::Colosseum).capacity(), 235);
    assert_eq!(pocket("PC", Game::XD).capacity(), 235);
}

#[test]
fn gamecube_pockets() {
    let mut colognes = pocket("Colognes", Game::Colosseum);
    assert_eq!(colognes.capacity(), 3);
    for scent in ["Joy Scent", "Excite Scent", "Vivid Scent"] {
        colognes.add(scent, 10).expect("scent");
    }
    assert_eq!(colognes.num_items(), 3);

    let mut discs = pocket("Battle CDs", Game::XD);
    assert_eq!(discs.capacity(), 60);
    discs.add("Battle CD 01", 1).expect("disc");
    let err = discs.add("Battle CD 01", 1).expect_err("single copy");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    let err = discs.add("Battle CD 02", 2).expect_err("stack of two");
    assert_eq!(err.code, CoreErrorCode::OutOfRange);

    let machines = pocket("TMs", Game::Colosseum);
    let valid = machines.valid_items();
    assert_eq!(valid.len(), 50);
    assert!(valid.iter().all(|item| item.starts_with("TM")));
}

#[test]
fn unknown_pocket_name_is_key_not_found() {
    let err = Engine::new()
        .new_item_pocket("Berries", Game::Red)
        .expect_err("Red has no berry pocket");
    assert_eq!(err.code, CoreErrorCode::KeyNotFound);
}
