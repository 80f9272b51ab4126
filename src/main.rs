use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use tictactoe_engine::cli::Cli;
use tictactoe_engine::console::Console;
use tictactoe_engine::error::GameError;
use tictactoe_engine::menu::Menu;
use tictactoe_engine::orchestrator::Orchestrator;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let console = Console::stdio().shared();

    let config = match Menu::new(console.clone()).configure(&cli) {
        Ok(config) => config,
        Err(GameError::InputClosed) => return Ok(()),
        Err(err) => return Err(err).context("failed to set up the game"),
    };

    let result = Orchestrator::from_config(&config, console)
        .run()
        .context("game loop failed")?;
    log::info!("final result: {:?}", result);

    Ok(())
}
