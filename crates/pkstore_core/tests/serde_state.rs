use pkstore_core::core_api::{Entry, Game, Generation};
use pkstore_core::gender::Gender;
use pkstore_core::items::ItemSlot;
use pkstore_core::pokemon::Pokemon;
use serde_json::json;

#[test]
fn entries_serialize_as_tagged_values() {
    let item = Entry::Item(ItemSlot {
        item: "Potion".to_string(),
        quantity: 3,
    });
    assert_eq!(
        serde_json::to_value(&item).expect("serialize item"),
        json!({ "Item": { "item": "Potion", "quantity": 3 } })
    );
    assert_eq!(
        serde_json::to_value(&Entry::None).expect("serialize none"),
        json!("None")
    );
}

#[test]
fn game_tags_use_variant_names() {
    assert_eq!(
        serde_json::to_value(Game::FireRed).expect("serialize game"),
        json!("FireRed")
    );
    let generation: Generation = serde_json::from_value(json!("III")).expect("generation");
    assert_eq!(generation, Generation::III);
    let gender: Gender = serde_json::from_value(json!("Genderless")).expect("gender");
    assert_eq!(gender, Gender::Genderless);
}

#[test]
fn pokemon_survives_a_json_round_trip() {
    let mut pokemon = Pokemon::new("Treecko", Game::Ruby, 16).expect("treecko");
    pokemon.set_nickname("LEAFY").expect("nickname");
    pokemon.set_held_item("Oran Berry").expect("held item");

    let text = serde_json::to_string(&pokemon).expect("serialize pokemon");
    let restored: Pokemon = serde_json::from_str(&text).expect("deserialize pokemon");
    assert_eq!(restored, pokemon);
    assert_eq!(restored.uid(), pokemon.uid());
    assert_eq!(restored.held_item(), Some("Oran Berry"));
}
