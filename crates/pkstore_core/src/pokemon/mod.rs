mod container;
mod record;
mod storage;

pub use container::{PokemonBox, PokemonList, PokemonParty};
pub use record::{
    ContestStats, DEFAULT_BALL, DEFAULT_FRIENDSHIP, GEN2_MAX_LEVEL_MET, MAX_LEVEL,
    MAX_NICKNAME_LEN, MAX_TRAINER_NAME_LEN, Markings, MoveSlot, NO_ITEM, NO_MOVE, Pokemon,
    PokemonField, RIBBON_NAMES, RecordId, experience_at_level, game_supports,
};
pub(crate) use record::is_holdable_in;
pub use storage::StoragePc;
