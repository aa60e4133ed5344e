use std::fmt::Write as _;

use pkstore_core::core_api::Game;
use pkstore_core::database::{
    PocketPolicy, box_capacity, box_count, box_discipline, box_name_max_len, game_policy,
    party_capacity,
};
use pkstore_core::items::{ItemBag, ItemPocket};
use pkstore_core::pokemon::{Markings, Pokemon, PokemonBox, PokemonList, PokemonParty, StoragePc};
use serde_json::{Map as JsonMap, Value as JsonValue};

const NAME_COL_WIDTH: usize = 16;
const SLOT_COL_WIDTH: usize = 4;
const NICKNAME_COL_WIDTH: usize = 12;
const TITLE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// List empty slots as well as occupied ones.
    pub show_empty: bool,
}

/// Creature fields a caller asked for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub species: bool,
    pub nickname: bool,
    pub level: bool,
    pub experience: bool,
    pub trainer: bool,
    pub moves: bool,
    pub held_item: bool,
    pub friendship: bool,
    pub gender: bool,
    pub shiny: bool,
    pub level_met: bool,
    pub personality: bool,
    pub ability: bool,
    pub ball: bool,
    pub original_game: bool,
    pub markings: bool,
    pub ribbons: bool,
    pub contest_stats: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.species
            || self.nickname
            || self.level
            || self.experience
            || self.trainer
            || self.moves
            || self.held_item
            || self.friendship
            || self.gender
            || self.shiny
            || self.level_met
            || self.personality
            || self.ability
            || self.ball
            || self.original_game
            || self.markings
            || self.ribbons
            || self.contest_stats
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn render_layout_json(game: Game, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(layout_json(game)),
    }
}

pub fn render_pocket_json(pocket: &ItemPocket, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(pocket_json(pocket)),
    }
}

pub fn render_bag_json(bag: &ItemBag, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => {
            let mut out = JsonMap::new();
            out.insert(
                "game".to_string(),
                JsonValue::String(bag.game().to_string()),
            );
            out.insert(
                "pockets".to_string(),
                JsonValue::Array(
                    bag.pockets()
                        .map(|pocket| JsonValue::Object(pocket_json(pocket)))
                        .collect(),
                ),
            );
            JsonValue::Object(out)
        }
    }
}

pub fn render_pokemon_json_full(pokemon: &Pokemon, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(pokemon_json(pokemon)),
    }
}

pub fn render_pokemon_json_selected(
    pokemon: &Pokemon,
    fields: &FieldSelection,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_pokemon_json(pokemon, fields)),
    }
}

pub fn render_party_json(party: &PokemonParty, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => {
            let mut out = JsonMap::new();
            out.insert(
                "game".to_string(),
                JsonValue::String(party.game().to_string()),
            );
            out.insert("capacity".to_string(), JsonValue::from(party.capacity()));
            out.insert("pokemon".to_string(), slots_json(party));
            JsonValue::Object(out)
        }
    }
}

pub fn render_pc_json(pc: &StoragePc, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => {
            let mut out = JsonMap::new();
            out.insert("game".to_string(), JsonValue::String(pc.game().to_string()));
            out.insert(
                "boxes".to_string(),
                JsonValue::Array(pc.iter().enumerate().map(box_json).collect()),
            );
            JsonValue::Object(out)
        }
    }
}

fn layout_json(game: Game) -> JsonMap<String, JsonValue> {
    let policy = game_policy(game);
    let mut out = JsonMap::new();

    out.insert("game".to_string(), JsonValue::String(game.to_string()));
    out.insert(
        "generation".to_string(),
        JsonValue::from(game.generation().number()),
    );
    out.insert(
        "pockets".to_string(),
        JsonValue::Array(policy.pockets.iter().map(pocket_policy_json).collect()),
    );
    out.insert("pc_items".to_string(), pocket_policy_json(&policy.pc_items));
    out.insert(
        "party_capacity".to_string(),
        JsonValue::from(party_capacity(game)),
    );

    let mut boxes = JsonMap::new();
    boxes.insert("count".to_string(), JsonValue::from(box_count(game)));
    boxes.insert("capacity".to_string(), JsonValue::from(box_capacity(game)));
    boxes.insert(
        "discipline".to_string(),
        JsonValue::String(box_discipline(game).as_str().to_string()),
    );
    boxes.insert(
        "name_max_len".to_string(),
        match box_name_max_len(game) {
            Some(v) => JsonValue::from(v),
            None => JsonValue::Null,
        },
    );
    out.insert("boxes".to_string(), JsonValue::Object(boxes));

    out
}

fn pocket_policy_json(policy: &PocketPolicy) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(policy.name.to_string()));
    m.insert("capacity".to_string(), JsonValue::from(policy.capacity));
    m.insert("max_stack".to_string(), JsonValue::from(policy.max_stack));
    JsonValue::Object(m)
}

fn pocket_json(pocket: &ItemPocket) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert(
        "name".to_string(),
        JsonValue::String(pocket.name().to_string()),
    );
    out.insert("capacity".to_string(), JsonValue::from(pocket.capacity()));
    out.insert("max_stack".to_string(), JsonValue::from(pocket.max_stack()));
    out.insert(
        "items".to_string(),
        JsonValue::Array(
            pocket
                .iter()
                .enumerate()
                .filter_map(|(index, slot)| slot.map(|slot| (index, slot)))
                .map(|(index, slot)| {
                    let mut m = JsonMap::new();
                    m.insert("slot".to_string(), JsonValue::from(index));
                    m.insert("item".to_string(), JsonValue::String(slot.item.clone()));
                    m.insert("quantity".to_string(), JsonValue::from(slot.quantity));
                    JsonValue::Object(m)
                })
                .collect(),
        ),
    );
    out
}

fn slots_json(list: &PokemonList) -> JsonValue {
    JsonValue::Array(
        list.occupied()
            .map(|(index, pokemon)| {
                let mut m = JsonMap::new();
                m.insert("slot".to_string(), JsonValue::from(index));
                m.extend(pokemon_json(pokemon));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn box_json((index, pc_box): (usize, &PokemonBox)) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("index".to_string(), JsonValue::from(index));
    m.insert(
        "name".to_string(),
        match pc_box.name() {
            Ok(name) => JsonValue::String(name.to_string()),
            Err(_) => JsonValue::Null,
        },
    );
    m.insert("capacity".to_string(), JsonValue::from(pc_box.capacity()));
    m.insert("pokemon".to_string(), slots_json(pc_box));
    JsonValue::Object(m)
}

fn pokemon_json(pokemon: &Pokemon) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    out.insert(
        "game".to_string(),
        JsonValue::String(pokemon.game().to_string()),
    );
    out.insert(
        "species".to_string(),
        JsonValue::String(pokemon.species().to_string()),
    );
    out.insert(
        "nickname".to_string(),
        JsonValue::String(pokemon.nickname().to_string()),
    );
    out.insert("level".to_string(), JsonValue::from(pokemon.level()));
    out.insert(
        "experience".to_string(),
        JsonValue::from(pokemon.experience()),
    );
    out.insert("trainer".to_string(), trainer_json(pokemon));
    out.insert("moves".to_string(), moves_json(pokemon));

    // Generation-dependent fields appear only when the record stores them.
    if let Some(item) = pokemon.held_item() {
        out.insert("held_item".to_string(), JsonValue::String(item.to_string()));
    }
    if let Some(v) = pokemon.friendship() {
        out.insert("friendship".to_string(), JsonValue::from(v));
    }
    if let Some(gender) = pokemon.gender() {
        out.insert("gender".to_string(), JsonValue::String(gender.to_string()));
    }
    if let Some(v) = pokemon.is_shiny() {
        out.insert("shiny".to_string(), JsonValue::Bool(v));
    }
    if let Some(v) = pokemon.level_met() {
        out.insert("level_met".to_string(), JsonValue::from(v));
    }
    if let Some(v) = pokemon.personality() {
        out.insert("personality".to_string(), JsonValue::from(v));
    }
    if let Some(ability) = pokemon.ability() {
        out.insert("ability".to_string(), JsonValue::String(ability.to_string()));
    }
    if let Some(ball) = pokemon.ball() {
        out.insert("ball".to_string(), JsonValue::String(ball.to_string()));
    }
    if let Some(game) = pokemon.original_game() {
        out.insert(
            "original_game".to_string(),
            JsonValue::String(game.to_string()),
        );
    }
    if let Some(markings) = pokemon.markings() {
        out.insert("markings".to_string(), markings_json(markings));
    }
    if pokemon.ribbons().is_some() {
        out.insert("ribbons".to_string(), ribbons_json(pokemon));
    }
    if pokemon.contest_stats().is_some() {
        out.insert("contest_stats".to_string(), contest_stats_json(pokemon));
    }

    out
}

fn selected_pokemon_json(pokemon: &Pokemon, fields: &FieldSelection) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    if fields.species {
        out.insert(
            "species".to_string(),
            JsonValue::String(pokemon.species().to_string()),
        );
    }
    if fields.nickname {
        out.insert(
            "nickname".to_string(),
            JsonValue::String(pokemon.nickname().to_string()),
        );
    }
    if fields.level {
        out.insert("level".to_string(), JsonValue::from(pokemon.level()));
    }
    if fields.experience {
        out.insert(
            "experience".to_string(),
            JsonValue::from(pokemon.experience()),
        );
    }
    if fields.trainer {
        out.insert("trainer".to_string(), trainer_json(pokemon));
    }
    if fields.moves {
        out.insert("moves".to_string(), moves_json(pokemon));
    }
    if fields.held_item {
        out.insert("held_item".to_string(), optional_str(pokemon.held_item()));
    }
    if fields.friendship {
        out.insert(
            "friendship".to_string(),
            optional_number(pokemon.friendship()),
        );
    }
    if fields.gender {
        out.insert(
            "gender".to_string(),
            match pokemon.gender() {
                Some(gender) => JsonValue::String(gender.to_string()),
                None => JsonValue::Null,
            },
        );
    }
    if fields.shiny {
        out.insert(
            "shiny".to_string(),
            match pokemon.is_shiny() {
                Some(v) => JsonValue::Bool(v),
                None => JsonValue::Null,
            },
        );
    }
    if fields.level_met {
        out.insert("level_met".to_string(), optional_number(pokemon.level_met()));
    }
    if fields.personality {
        out.insert(
            "personality".to_string(),
            optional_number(pokemon.personality()),
        );
    }
    if fields.ability {
        out.insert("ability".to_string(), optional_str(pokemon.ability()));
    }
    if fields.ball {
        out.insert("ball".to_string(), optional_str(pokemon.ball()));
    }
    if fields.original_game {
        out.insert(
            "original_game".to_string(),
            match pokemon.original_game() {
                Some(game) => JsonValue::String(game.to_string()),
                None => JsonValue::Null,
            },
        );
    }
    if fields.markings {
        out.insert(
            "markings".to_string(),
            match pokemon.markings() {
                Some(markings) => markings_json(markings),
                None => JsonValue::Null,
            },
        );
    }
    if fields.ribbons {
        out.insert("ribbons".to_string(), ribbons_json(pokemon));
    }
    if fields.contest_stats {
        out.insert("contest_stats".to_string(), contest_stats_json(pokemon));
    }

    out
}

fn optional_str(value: Option<&str>) -> JsonValue {
    match value {
        Some(v) => JsonValue::String(v.to_string()),
        None => JsonValue::Null,
    }
}

fn optional_number<T: Into<JsonValue>>(value: Option<T>) -> JsonValue {
    match value {
        Some(v) => v.into(),
        None => JsonValue::Null,
    }
}

fn trainer_json(pokemon: &Pokemon) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert(
        "name".to_string(),
        JsonValue::String(pokemon.trainer_name().to_string()),
    );
    m.insert(
        "public_id".to_string(),
        JsonValue::from(pokemon.trainer_public_id()),
    );
    if let Some(secret) = pokemon.trainer_secret_id() {
        m.insert("secret_id".to_string(), JsonValue::from(secret));
    }
    if let Some(gender) = pokemon.trainer_gender() {
        m.insert("gender".to_string(), JsonValue::String(gender.to_string()));
    }
    JsonValue::Object(m)
}

fn moves_json(pokemon: &Pokemon) -> JsonValue {
    JsonValue::Array(
        pokemon
            .moves()
            .iter()
            .map(|slot| {
                let mut m = JsonMap::new();
                m.insert("name".to_string(), JsonValue::String(slot.name.clone()));
                m.insert("pp".to_string(), JsonValue::from(slot.pp));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn markings_json(markings: Markings) -> JsonValue {
    JsonValue::Array(
        markings
            .iter_names()
            .map(|(name, _)| JsonValue::String(name.to_ascii_lowercase()))
            .collect(),
    )
}

fn ribbons_json(pokemon: &Pokemon) -> JsonValue {
    match pokemon.ribbons() {
        Some(ribbons) => JsonValue::Array(
            ribbons
                .iter()
                .map(|name| JsonValue::String(name.clone()))
                .collect(),
        ),
        None => JsonValue::Null,
    }
}

fn contest_stats_json(pokemon: &Pokemon) -> JsonValue {
    let Some(stats) = pokemon.contest_stats() else {
        return JsonValue::Null;
    };
    let mut m = JsonMap::new();
    m.insert("cool".to_string(), JsonValue::from(stats.cool));
    m.insert("beauty".to_string(), JsonValue::from(stats.beauty));
    m.insert("cute".to_string(), JsonValue::from(stats.cute));
    m.insert("smart".to_string(), JsonValue::from(stats.smart));
    m.insert("tough".to_string(), JsonValue::from(stats.tough));
    m.insert("feel".to_string(), JsonValue::from(stats.feel));
    JsonValue::Object(m)
}

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

/// `key=value` lines for the selected creature fields, in canonical order.
/// Fields the record's generation does not store are reported as `n/a`.
pub fn selected_pairs(pokemon: &Pokemon, fields: &FieldSelection) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();

    if fields.species {
        out.push(("species", pokemon.species().to_string()));
    }
    if fields.nickname {
        out.push(("nickname", pokemon.nickname().to_string()));
    }
    if fields.level {
        out.push(("level", pokemon.level().to_string()));
    }
    if fields.experience {
        out.push(("experience", pokemon.experience().to_string()));
    }
    if fields.trainer {
        out.push((
            "trainer",
            format!("{} {:05}", pokemon.trainer_name(), pokemon.trainer_public_id()),
        ));
    }
    if fields.moves {
        for slot in pokemon.moves() {
            out.push(("move", format!("{} ({})", slot.name, slot.pp)));
        }
    }
    if fields.held_item {
        out.push(("held_item", or_na(pokemon.held_item())));
    }
    if fields.friendship {
        out.push(("friendship", or_na(pokemon.friendship())));
    }
    if fields.gender {
        out.push(("gender", or_na(pokemon.gender())));
    }
    if fields.shiny {
        out.push(("shiny", or_na(pokemon.is_shiny())));
    }
    if fields.level_met {
        out.push(("level_met", or_na(pokemon.level_met())));
    }
    if fields.personality {
        out.push((
            "personality",
            pokemon
                .personality()
                .map(|v| format!("{v:08X}"))
                .unwrap_or_else(|| "n/a".to_string()),
        ));
    }
    if fields.ability {
        out.push(("ability", or_na(pokemon.ability())));
    }
    if fields.ball {
        out.push(("ball", or_na(pokemon.ball())));
    }
    if fields.original_game {
        out.push(("original_game", or_na(pokemon.original_game())));
    }
    if fields.markings {
        out.push((
            "markings",
            pokemon
                .markings()
                .map(format_markings)
                .unwrap_or_else(|| "n/a".to_string()),
        ));
    }
    if fields.ribbons {
        out.push((
            "ribbons",
            pokemon
                .ribbons()
                .map(|ribbons| join_or_none(ribbons.iter().map(String::as_str)))
                .unwrap_or_else(|| "n/a".to_string()),
        ));
    }
    if fields.contest_stats {
        out.push((
            "contest_stats",
            pokemon
                .contest_stats()
                .map(|s| {
                    format!(
                        "cool={} beauty={} cute={} smart={} tough={} feel={}",
                        s.cool, s.beauty, s.cute, s.smart, s.tough, s.feel
                    )
                })
                .unwrap_or_else(|| "n/a".to_string()),
        ));
    }

    out
}

pub fn render_layout_text(game: Game) -> String {
    let policy = game_policy(game);
    let mut out = String::new();

    let title = format!("{game} (Generation {})", game.generation());
    writeln!(out, "{}", centered_no_trailing(&title, TITLE_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(out).expect("writing to String cannot fail");

    writeln!(out, " ::: Bag :::").expect("writing to String cannot fail");
    for pocket in policy.pockets {
        write_policy_line(&mut out, pocket);
    }
    writeln!(out).expect("writing to String cannot fail");
    writeln!(out, " ::: PC Items :::").expect("writing to String cannot fail");
    write_policy_line(&mut out, &policy.pc_items);
    writeln!(out).expect("writing to String cannot fail");

    writeln!(out, " ::: Pokémon :::").expect("writing to String cannot fail");
    writeln!(
        out,
        "  {:<w$}{} slots",
        "Party",
        party_capacity(game),
        w = NAME_COL_WIDTH
    )
    .expect("writing to String cannot fail");
    let names = match box_name_max_len(game) {
        Some(max) => format!("names up to {max} characters"),
        None => "unnamed".to_string(),
    };
    writeln!(
        out,
        "  {:<w$}{} x {}  {}  {}",
        "Boxes",
        box_count(game),
        box_capacity(game),
        box_discipline(game).as_str().to_ascii_lowercase(),
        names,
        w = NAME_COL_WIDTH
    )
    .expect("writing to String cannot fail");

    out
}

fn write_policy_line(out: &mut String, policy: &PocketPolicy) {
    writeln!(
        out,
        "  {:<w$}{:>3} slots  max {}",
        fit_column(policy.name, NAME_COL_WIDTH - 1),
        policy.capacity,
        policy.max_stack,
        w = NAME_COL_WIDTH
    )
    .expect("writing to String cannot fail");
}

pub fn render_pocket_text(pocket: &ItemPocket, options: TextRenderOptions) -> String {
    let mut out = String::new();
    write_pocket(&mut out, pocket, options);
    out
}

pub fn render_bag_text(bag: &ItemBag, options: TextRenderOptions) -> String {
    let mut out = String::new();
    writeln!(out, "{} bag", bag.game()).expect("writing to String cannot fail");
    for pocket in bag.pockets() {
        writeln!(out).expect("writing to String cannot fail");
        write_pocket(&mut out, pocket, options);
    }
    out
}

fn write_pocket(out: &mut String, pocket: &ItemPocket, options: TextRenderOptions) {
    writeln!(
        out,
        " ::: {} ({}/{}) :::",
        pocket.name(),
        pocket.num_items(),
        pocket.capacity()
    )
    .expect("writing to String cannot fail");

    if pocket.is_empty() && !options.show_empty {
        writeln!(out, "  none").expect("writing to String cannot fail");
        return;
    }
    for (index, slot) in pocket.iter().enumerate() {
        match slot {
            Some(slot) => writeln!(
                out,
                "  {:>w$}  {} x{}",
                index,
                slot.item,
                slot.quantity,
                w = SLOT_COL_WIDTH
            )
            .expect("writing to String cannot fail"),
            None if options.show_empty => {
                writeln!(out, "  {:>w$}  -", index, w = SLOT_COL_WIDTH)
                    .expect("writing to String cannot fail")
            }
            None => {}
        }
    }
}

pub fn render_pokemon_text(pokemon: &Pokemon) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{} ({})  Lv. {}",
        pokemon.nickname(),
        pokemon.species(),
        pokemon.level()
    )
    .expect("writing to String cannot fail");
    writeln!(
        out,
        "  Game: {}  Exp: {}",
        pokemon.game(),
        format_number_with_commas(pokemon.experience())
    )
    .expect("writing to String cannot fail");
    writeln!(
        out,
        "  OT: {}  ID: {:05}",
        pokemon.trainer_name(),
        pokemon.trainer_public_id()
    )
    .expect("writing to String cannot fail");

    let moves: Vec<String> = pokemon
        .moves()
        .iter()
        .map(|slot| format!("{} ({})", slot.name, slot.pp))
        .collect();
    writeln!(out, "  Moves: {}", moves.join(", ")).expect("writing to String cannot fail");

    for (key, value) in selected_pairs(pokemon, &generation_fields()) {
        if value != "n/a" {
            writeln!(out, "  {}: {}", label(key), value).expect("writing to String cannot fail");
        }
    }

    out
}

fn generation_fields() -> FieldSelection {
    FieldSelection {
        held_item: true,
        friendship: true,
        gender: true,
        shiny: true,
        level_met: true,
        personality: true,
        ability: true,
        ball: true,
        original_game: true,
        markings: true,
        ribbons: true,
        contest_stats: true,
        ..FieldSelection::default()
    }
}

fn label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_party_text(party: &PokemonParty, options: TextRenderOptions) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} party ({}/{})",
        party.game(),
        party.num_pokemon(),
        party.capacity()
    )
    .expect("writing to String cannot fail");
    write_creature_slots(&mut out, party, options);
    out
}

pub fn render_pc_text(pc: &StoragePc, options: TextRenderOptions) -> String {
    let mut out = String::new();
    writeln!(out, "{} PC ({} stored)", pc.game(), pc.num_pokemon())
        .expect("writing to String cannot fail");

    for (index, pc_box) in pc.iter().enumerate() {
        if pc_box.num_pokemon() == 0 && !options.show_empty {
            continue;
        }
        let title = match pc_box.name() {
            Ok(name) if !name.is_empty() => format!("Box {}: {name}", index + 1),
            _ => format!("Box {}", index + 1),
        };
        writeln!(out).expect("writing to String cannot fail");
        writeln!(
            out,
            " ::: {title} ({}/{}) :::",
            pc_box.num_pokemon(),
            pc_box.capacity()
        )
        .expect("writing to String cannot fail");
        write_creature_slots(&mut out, pc_box, options);
    }
    out
}

fn write_creature_slots(out: &mut String, list: &PokemonList, options: TextRenderOptions) {
    if list.num_pokemon() == 0 && !options.show_empty {
        writeln!(out, "  none").expect("writing to String cannot fail");
        return;
    }
    for (index, slot) in list.iter().enumerate() {
        match slot {
            Some(pokemon) => writeln!(
                out,
                "  {:>w$}  {:<n$}{} Lv. {}",
                index,
                fit_column(pokemon.nickname(), NICKNAME_COL_WIDTH - 1),
                pokemon.species(),
                pokemon.level(),
                w = SLOT_COL_WIDTH,
                n = NICKNAME_COL_WIDTH
            )
            .expect("writing to String cannot fail"),
            None if options.show_empty => {
                writeln!(out, "  {:>w$}  -", index, w = SLOT_COL_WIDTH)
                    .expect("writing to String cannot fail")
            }
            None => {}
        }
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

fn format_markings(markings: Markings) -> String {
    let names: Vec<String> = markings
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect();
    join_or_none(names.iter().map(String::as_str))
}

fn join_or_none<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = names.collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined.join(",")
    }
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}

fn format_number_with_commas(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
