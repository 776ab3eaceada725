pub mod wear;
pub mod web;
