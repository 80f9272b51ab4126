pub mod agent;
pub mod cli;
pub mod console;
pub mod error;
pub mod game_repr;
pub mod menu;
pub mod orchestrator;
pub mod renderer;
