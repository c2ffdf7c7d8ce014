
pub mod logging;
pub mod config;
pub mod canvas;
pub mod rand;
pub mod face;
pub mod team;
pub mod catalog;
pub mod generate;
