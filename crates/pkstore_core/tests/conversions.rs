use pkstore_core::conversion::{convert, convert_bag, convert_pokemon};
use pkstore_core::core_api::{CoreErrorCode, Engine, Entry, Game, Generation};
use pkstore_core::gender::Gender;
use pkstore_core::items::{ItemBag, ItemSlot};
use pkstore_core::pokemon::{ContestStats, DEFAULT_BALL, DEFAULT_FRIENDSHIP, Markings, NO_ITEM, Pokemon};

const MOVES: [&str; 4] = ["Tackle", "Growl", "Scratch", "Ember"];

/// Fills every field `pokemon`'s game stores with non-default values.
fn populate(pokemon: &mut Pokemon, dest: Game) {
    let origin = pokemon.game();
    let min_generation = origin.generation().min(dest.generation());

    for (index, name) in MOVES.iter().enumerate() {
        pokemon
            .set_move(index, name, 10 + index as u8)
            .expect("move");
    }
    pokemon.set_trainer_public_id(12345);

    if origin.generation() >= Generation::III {
        pokemon.set_trainer_secret_id(54321).expect("secret id");
        pokemon.set_personality(0xDEAD_BEEF).expect("personality");
        pokemon.set_ball("Great Ball").expect("ball");
        pokemon
            .set_marking(Markings::CIRCLE | Markings::HEART, true)
            .expect("markings");
        pokemon.set_ribbon("Champion", true).expect("ribbon");
        pokemon
            .set_contest_stats(ContestStats {
                cool: 10,
                beauty: 20,
                cute: 30,
                smart: 40,
                tough: 50,
                feel: 60,
            })
            .expect("contest stats");
    }
    if min_generation >= Generation::II {
        pokemon.set_held_item("Potion").expect("held item");
    }
    if origin.generation() >= Generation::II {
        pokemon.set_gender(Gender::Female).expect("gender");
        pokemon.set_shininess(true).expect("shininess");
        pokemon.set_friendship(200).expect("friendship");
        if origin != Game::Gold && origin != Game::Silver {
            pokemon.set_trainer_gender(Gender::Female).expect("trainer gender");
        }
        let level_met = if origin.generation() >= Generation::III { 40 } else { 30 };
        pokemon.set_level_met(level_met).expect("level met");
    }

    pokemon.set_nickname("Sparkplug").expect("nickname");
    pokemon.set_trainer_name("Ash").expect("trainer name");
    let level = if origin.generation() >= Generation::III { 77 } else { 42 };
    pokemon.set_level(level).expect("level");
}

fn check_conversion(species: &str, origin: Game, dest: Game) {
    let mut first = Pokemon::new(species, origin, 50).expect("source record");
    populate(&mut first, dest);

    let second = convert_pokemon(&first, dest)
        .unwrap_or_else(|e| panic!("{species} {origin} -> {dest}: {e}"));
    let min_generation = origin.generation().min(dest.generation());

    assert_eq!(second.species(), first.species());
    assert_eq!(second.game(), dest);
    assert_ne!(second.uid(), first.uid());
    assert_eq!(second.nickname(), first.nickname());
    assert_eq!(second.trainer_name(), first.trainer_name());
    assert_eq!(second.trainer_id(), first.trainer_id());
    assert_eq!(second.trainer_public_id(), first.trainer_public_id());
    assert_eq!(second.experience(), first.experience());
    assert_eq!(second.level(), first.level());
    assert_eq!(second.moves(), first.moves());

    if min_generation >= Generation::III {
        assert_eq!(second.trainer_secret_id(), first.trainer_secret_id());
        assert_eq!(second.ability(), first.ability());
        assert_eq!(second.ball(), first.ball());
        assert_eq!(second.original_game(), first.original_game());
        assert_eq!(second.personality(), first.personality());
        assert_eq!(second.markings(), first.markings());
        assert_eq!(second.contest_stats(), first.contest_stats());
        assert_eq!(second.ribbons(), first.ribbons());
    }

    if min_generation >= Generation::II {
        if first.trainer_gender().is_some() && second.trainer_gender().is_some() {
            assert_eq!(second.trainer_gender(), first.trainer_gender());
        }
        assert_eq!(second.gender(), first.gender());
        assert_eq!(second.is_shiny(), first.is_shiny());
        assert_eq!(second.held_item(), first.held_item());
        assert_eq!(second.friendship(), first.friendship());
        assert_eq!(second.level_met(), Some(first.level()));
    }
}

#[test]
fn conversions_preserve_shared_fields() {
    let cases = [
        ("Bulbasaur", Game::Red, Game::Yellow),
        ("Squirtle", Game::Blue, Game::Gold),
        ("Cyndaquil", Game::Gold, Game::Crystal),
        ("Totodile", Game::Crystal, Game::Gold),
        ("Charmander", Game::Silver, Game::Blue),
        ("Torchic", Game::Ruby, Game::Sapphire),
        ("Mudkip", Game::Ruby, Game::Emerald),
        ("Treecko", Game::Ruby, Game::FireRed),
        ("Torchic", Game::Emerald, Game::Sapphire),
        ("Mudkip", Game::Emerald, Game::Emerald),
        ("Treecko", Game::Emerald, Game::FireRed),
        ("Charmander", Game::FireRed, Game::Sapphire),
        ("Squirtle", Game::FireRed, Game::Emerald),
        ("Bulbasaur", Game::FireRed, Game::FireRed),
        ("Eevee", Game::Ruby, Game::Colosseum),
        ("Espeon", Game::Emerald, Game::Colosseum),
        ("Umbreon", Game::FireRed, Game::Colosseum),
        ("Eevee", Game::Ruby, Game::XD),
        ("Espeon", Game::Emerald, Game::XD),
        ("Umbreon", Game::FireRed, Game::XD),
        ("Eevee", Game::Colosseum, Game::Sapphire),
        ("Espeon", Game::Colosseum, Game::Emerald),
        ("Umbreon", Game::Colosseum, Game::LeafGreen),
        ("Eevee", Game::XD, Game::Sapphire),
        ("Espeon", Game::XD, Game::Emerald),
        ("Umbreon", Game::XD, Game::LeafGreen),
        ("Vaporeon", Game::Colosseum, Game::Colosseum),
        ("Jolteon", Game::Colosseum, Game::XD),
        ("Vaporeon", Game::XD, Game::XD),
        ("Jolteon", Game::XD, Game::Colosseum),
    ];

    for (species, origin, dest) in cases {
        check_conversion(species, origin, dest);
    }
}

#[test]
fn generation_one_records_gain_generation_two_defaults() {
    let mut pikachu = Pokemon::new("Pikachu", Game::Red, 30).expect("pikachu");
    pikachu.set_nickname("Pika").expect("nickname");

    let converted = convert_pokemon(&pikachu, Game::Gold).expect("convert");
    assert_eq!(converted.held_item(), Some(NO_ITEM));
    assert_eq!(converted.friendship(), Some(DEFAULT_FRIENDSHIP));
    assert_eq!(converted.gender(), Some(Gender::Male));
    assert_eq!(converted.is_shiny(), Some(false));
    assert_eq!(converted.level_met(), Some(30));
    assert_eq!(converted.trainer_gender(), None);
    assert_eq!(converted.personality(), None);
}

#[test]
fn older_records_gain_generation_three_defaults() {
    let bulbasaur = Pokemon::new("Bulbasaur", Game::Red, 12).expect("bulbasaur");

    let ruby = convert_pokemon(&bulbasaur, Game::Ruby).expect("to Ruby");
    assert_eq!(ruby.personality(), Some(0));
    assert_eq!(ruby.ability(), Some("Overgrow"));
    assert_eq!(ruby.ball(), Some(DEFAULT_BALL));
    assert_eq!(ruby.original_game(), Some(Game::Ruby));
    assert_eq!(ruby.markings(), Some(Markings::empty()));

    // Colosseum and XD share one original-game tag.
    let xd = convert_pokemon(&bulbasaur, Game::XD).expect("to XD");
    assert_eq!(xd.original_game(), Some(Game::Colosseum));
}

#[test]
fn newer_fields_are_dropped_going_back() {
    let mut pikachu = Pokemon::new("Pikachu", Game::Emerald, 20).expect("pikachu");
    pikachu.set_personality(1234).expect("personality");
    pikachu.set_held_item("Lava Cookie").expect("held item");

    let gold = convert_pokemon(&pikachu, Game::Gold).expect("to Gold");
    assert_eq!(gold.personality(), None);
    assert_eq!(gold.ability(), None);
    assert_eq!(gold.ball(), None);
    assert_eq!(gold.ribbons(), None);
    // Lava Cookie does not exist in Gold.
    assert_eq!(gold.held_item(), Some(NO_ITEM));

    let red = convert_pokemon(&gold, Game::Red).expect("to Red");
    assert_eq!(red.held_item(), None);
    assert_eq!(red.friendship(), None);
    assert_eq!(red.level(), 20);
}

#[test]
fn species_missing_from_destination_is_rejected() {
    let torchic = Pokemon::new("Torchic", Game::Ruby, 5).expect("torchic");
    let err = convert_pokemon(&torchic, Game::Crystal).expect_err("not in Generation II");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    let togepi = Pokemon::new("Togepi", Game::Gold, 5).expect("togepi");
    let err = convert_pokemon(&togepi, Game::Yellow).expect_err("not in Generation I");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn entries_convert_by_kind() {
    let engine = Engine::new();

    let none = engine
        .convert(&Entry::None, Game::Red, Game::Ruby)
        .expect("none");
    assert_eq!(none, Entry::None);

    let potion = Entry::Item(ItemSlot::new("Potion", 3));
    assert_eq!(
        engine.convert(&potion, Game::Red, Game::Ruby).expect("potion"),
        potion
    );

    let bicycle = Entry::Item(ItemSlot::new("Bicycle", 1));
    let err = engine
        .convert(&bicycle, Game::Red, Game::Ruby)
        .expect_err("Ruby has no Bicycle");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    let empty_stack = Entry::Item(ItemSlot::new("Potion", 0));
    assert_eq!(
        convert(&empty_stack, Game::Red, Game::Gold).expect("empty stack"),
        Entry::None
    );

    let mew = Pokemon::new("Mew", Game::Yellow, 50).expect("mew");
    let creature = Entry::Creature(mew.clone());
    match convert(&creature, Game::Yellow, Game::FireRed).expect("mew") {
        Entry::Creature(converted) => {
            assert_eq!(converted.species(), "Mew");
            assert_eq!(converted.gender(), Some(Gender::Genderless));
        }
        other => panic!("expected a creature, got {other:?}"),
    }

    let err = convert(&creature, Game::Red, Game::FireRed).expect_err("wrong source game");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    let sentinel = Entry::Creature(Pokemon::none(Game::Gold));
    assert_eq!(
        convert(&sentinel, Game::Gold, Game::Emerald).expect("sentinel"),
        Entry::None
    );
}

#[test]
fn bags_reroute_into_destination_pockets() {
    let mut gold = ItemBag::new(Game::Gold);
    gold.add("Potion", 5).expect("potion");
    gold.add("Great Ball", 2).expect("ball");
    gold.add("TM05", 1).expect("tm");
    gold.add("Lucky Egg", 1).expect("egg");

    let emerald = convert_bag(&gold, Game::Emerald).expect("convert");
    assert_eq!(emerald.game(), Game::Emerald);
    let items = emerald.pocket("Items").expect("items");
    assert_eq!(items.quantity_of("Potion"), 5);
    assert_eq!(items.quantity_of("Lucky Egg"), 1);
    assert_eq!(emerald.pocket("Poké Balls").expect("balls").quantity_of("Great Ball"), 2);
    assert_eq!(emerald.pocket("TMs & HMs").expect("tms").quantity_of("TM05"), 1);

    gold.add("Berry", 1).expect("gen 2 berry");
    let err = convert_bag(&gold, Game::Ruby).expect_err("Berry is Generation II only");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}
