use std::process;

use clap::Parser;
use log::debug;
use pkstore_core::core_api::{CoreError, Engine, Game};
use pkstore_core::items::ItemBag;
use pkstore_core::pokemon::{Pokemon, PokemonParty, StoragePc};
use pkstore_render::{
    FieldSelection, JsonStyle, TextRenderOptions, render_bag_json, render_bag_text,
    render_layout_json, render_layout_text, render_party_json, render_party_text, render_pc_json,
    render_pc_text, render_pocket_json, render_pocket_text, render_pokemon_json_full,
    render_pokemon_json_selected, render_pokemon_text, selected_pairs,
};
use serde_json::Value as JsonValue;

const DEFAULT_LEVEL: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemArg {
    name: String,
    quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CreatureArg {
    species: String,
    level: u8,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(long, value_name = "GAME", value_parser = parse_game)]
    game: Game,
    /// Convert the built bag or creatures into this game before printing.
    #[arg(long, value_name = "GAME", value_parser = parse_game)]
    to: Option<Game>,
    /// List every item the named pocket accepts.
    #[arg(
        long = "valid-items",
        value_name = "POCKET",
        conflicts_with_all = ["items", "creatures"]
    )]
    valid_items: Option<String>,
    /// Add a stack to the bag, e.g. `--item Potion=5`.
    #[arg(
        long = "item",
        value_name = "NAME=QTY",
        value_parser = parse_item_arg,
        conflicts_with = "creatures"
    )]
    items: Vec<ItemArg>,
    /// Print only this pocket of the filled bag.
    #[arg(long, value_name = "POCKET", requires = "items")]
    pocket: Option<String>,
    /// Add a creature to the party, e.g. `--pokemon Pikachu:25`.
    #[arg(long = "pokemon", value_name = "SPECIES[:LEVEL]", value_parser = parse_creature_arg)]
    creatures: Vec<CreatureArg>,
    /// Store creatures in the PC instead of the party.
    #[arg(long, requires = "creatures")]
    pc: bool,
    #[arg(long = "show-empty")]
    show_empty: bool,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    species: bool,
    #[arg(long)]
    nickname: bool,
    #[arg(long)]
    level: bool,
    #[arg(long)]
    experience: bool,
    #[arg(long)]
    trainer: bool,
    #[arg(long)]
    moves: bool,
    #[arg(long = "held-item")]
    held_item: bool,
    #[arg(long)]
    friendship: bool,
    #[arg(long)]
    gender: bool,
    #[arg(long)]
    shiny: bool,
    #[arg(long = "level-met")]
    level_met: bool,
    #[arg(long)]
    personality: bool,
    #[arg(long)]
    ability: bool,
    #[arg(long)]
    ball: bool,
    #[arg(long = "original-game")]
    original_game: bool,
    #[arg(long)]
    markings: bool,
    #[arg(long)]
    ribbons: bool,
    #[arg(long = "contest-stats")]
    contest_stats: bool,
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            species: self.species,
            nickname: self.nickname,
            level: self.level,
            experience: self.experience,
            trainer: self.trainer,
            moves: self.moves,
            held_item: self.held_item,
            friendship: self.friendship,
            gender: self.gender,
            shiny: self.shiny,
            level_met: self.level_met,
            personality: self.personality,
            ability: self.ability,
            ball: self.ball,
            original_game: self.original_game,
            markings: self.markings,
            ribbons: self.ribbons,
            contest_stats: self.contest_stats,
        }
    }

    fn text_options(&self) -> TextRenderOptions {
        TextRenderOptions {
            show_empty: self.show_empty,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let engine = Engine::new();
    let fields = cli.field_selection();

    if fields.is_any_selected() && cli.creatures.is_empty() {
        eprintln!("field flags require at least one --pokemon");
        process::exit(2);
    }
    if cli.to.is_some() && cli.items.is_empty() && cli.creatures.is_empty() {
        eprintln!("--to requires --item or --pokemon");
        process::exit(2);
    }

    if let Some(pocket_name) = &cli.valid_items {
        let pocket = engine
            .new_item_pocket(pocket_name, cli.game)
            .unwrap_or_else(|e| fail("Error opening pocket", e));
        let names = pocket.valid_items();
        if cli.json {
            print_json(&JsonValue::from(names));
        } else {
            for name in names {
                println!("{name}");
            }
        }
        return;
    }

    if !cli.items.is_empty() {
        let bag = build_bag(&engine, cli.game, &cli.items)
            .unwrap_or_else(|e| fail("Error filling bag", e));
        let bag = match cli.to {
            Some(dest) => engine
                .convert_bag(&bag, dest)
                .unwrap_or_else(|e| fail("Error converting bag", e)),
            None => bag,
        };
        if let Some(pocket_name) = &cli.pocket {
            let pocket = bag
                .pocket(pocket_name)
                .unwrap_or_else(|e| fail("Error opening pocket", e));
            if cli.json {
                print_json(&render_pocket_json(pocket, JsonStyle::CanonicalV1));
            } else {
                print!("{}", render_pocket_text(pocket, cli.text_options()));
            }
            return;
        }
        if cli.json {
            print_json(&render_bag_json(&bag, JsonStyle::CanonicalV1));
        } else {
            print!("{}", render_bag_text(&bag, cli.text_options()));
        }
        return;
    }

    if !cli.creatures.is_empty() {
        let creatures = build_creatures(&engine, cli.game, cli.to, &cli.creatures)
            .unwrap_or_else(|e| fail("Error building Pokémon", e));
        let game = cli.to.unwrap_or(cli.game);

        if fields.is_any_selected() {
            print_selected(&creatures, &fields, cli.json);
            return;
        }
        if cli.pc {
            let pc = fill_pc(&engine, game, creatures)
                .unwrap_or_else(|e| fail("Error storing Pokémon", e));
            if cli.json {
                print_json(&render_pc_json(&pc, JsonStyle::CanonicalV1));
            } else {
                print!("{}", render_pc_text(&pc, cli.text_options()));
            }
            return;
        }
        if creatures.len() == 1 && !cli.show_empty {
            if cli.json {
                print_json(&render_pokemon_json_full(&creatures[0], JsonStyle::CanonicalV1));
            } else {
                print!("{}", render_pokemon_text(&creatures[0]));
            }
            return;
        }
        let party = fill_party(&engine, game, creatures)
            .unwrap_or_else(|e| fail("Error filling party", e));
        if cli.json {
            print_json(&render_party_json(&party, JsonStyle::CanonicalV1));
        } else {
            print!("{}", render_party_text(&party, cli.text_options()));
        }
        return;
    }

    if cli.json {
        print_json(&render_layout_json(cli.game, JsonStyle::CanonicalV1));
    } else {
        print!("{}", render_layout_text(cli.game));
    }
}

// ---------------------------------------------------------------------------
// Building containers
// ---------------------------------------------------------------------------

fn build_bag(engine: &Engine, game: Game, items: &[ItemArg]) -> Result<ItemBag, CoreError> {
    let mut bag = engine.new_item_bag(game);
    for item in items {
        bag.add(&item.name, item.quantity)?;
    }
    Ok(bag)
}

fn build_creatures(
    engine: &Engine,
    game: Game,
    dest: Option<Game>,
    creatures: &[CreatureArg],
) -> Result<Vec<Pokemon>, CoreError> {
    creatures
        .iter()
        .map(|arg| {
            let pokemon = engine.new_pokemon(&arg.species, game, arg.level)?;
            match dest {
                Some(dest) => pkstore_core::conversion::convert_pokemon(&pokemon, dest),
                None => Ok(pokemon),
            }
        })
        .collect()
}

fn fill_party(
    engine: &Engine,
    game: Game,
    creatures: Vec<Pokemon>,
) -> Result<PokemonParty, CoreError> {
    let mut party = engine.new_pokemon_party(game);
    for pokemon in creatures {
        party.add(pokemon)?;
    }
    Ok(party)
}

/// Fills boxes in order, moving on when one is full.
fn fill_pc(engine: &Engine, game: Game, creatures: Vec<Pokemon>) -> Result<StoragePc, CoreError> {
    let mut pc = engine.new_storage_system(game);
    let mut index = 0;
    for pokemon in creatures {
        while pc.box_at(index)?.num_pokemon() == pc.box_at(index)?.capacity() {
            debug!("box {index} is full");
            index += 1;
        }
        pc.box_at_mut(index)?.add(pokemon)?;
    }
    Ok(pc)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_selected(creatures: &[Pokemon], fields: &FieldSelection, json: bool) {
    if json {
        let values: Vec<JsonValue> = creatures
            .iter()
            .map(|pokemon| render_pokemon_json_selected(pokemon, fields, JsonStyle::CanonicalV1))
            .collect();
        if values.len() == 1 {
            print_json(&values[0]);
        } else {
            print_json(&JsonValue::Array(values));
        }
        return;
    }

    for (index, pokemon) in creatures.iter().enumerate() {
        if index > 0 {
            println!();
        }
        for (key, value) in selected_pairs(pokemon, fields) {
            println!("{key}={value}");
        }
    }
}

fn print_json(value: &JsonValue) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn fail(context: &str, error: CoreError) -> ! {
    eprintln!("{context}: {error}");
    process::exit(1);
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

fn parse_game(value: &str) -> Result<Game, String> {
    value.parse::<Game>().map_err(|_| {
        let names: Vec<&str> = Game::ALL.iter().map(|game| game.as_str()).collect();
        format!("unknown game '{value}'; expected one of {}", names.join(", "))
    })
}

fn parse_item_arg(value: &str) -> Result<ItemArg, String> {
    let (name, quantity) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=QTY, got '{value}'"))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity '{quantity}'"))?;
    Ok(ItemArg {
        name: name.trim().to_string(),
        quantity,
    })
}

fn parse_creature_arg(value: &str) -> Result<CreatureArg, String> {
    let (species, level) = match value.rsplit_once(':') {
        Some((species, level)) => {
            let level = level
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid level '{level}'"))?;
            (species, level)
        }
        None => (value, DEFAULT_LEVEL),
    };
    Ok(CreatureArg {
        species: species.trim().to_string(),
        level,
    })
}
