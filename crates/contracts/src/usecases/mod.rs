pub mod common;
pub mod u001_load_pokedex;
pub mod u002_open_detail;
