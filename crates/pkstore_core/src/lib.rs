pub mod conversion;
pub mod core_api;
pub mod database;
pub mod gender;
pub mod items;
pub mod pokemon;
pub mod slots;
