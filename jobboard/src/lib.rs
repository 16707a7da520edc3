pub mod commands;
pub mod environment;

mod database;
