pub mod buff;
pub mod csgoapi;
