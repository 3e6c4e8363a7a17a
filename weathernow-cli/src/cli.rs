use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use weathernow_core::{Config, source_from_config};

use crate::app::App;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "City weather lookup")]
pub struct Cli {
    /// Without a subcommand the tool starts the interactive prompt.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up current weather for a city and exit.
    Show {
        /// City name, e.g. "Berlin".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut app = App::new(source_from_config(&config));

        match self.command {
            Some(Command::Show { city }) => run_lookup(&mut app, &city).await,
            None => interactive_loop(&mut app).await?,
        }

        Ok(())
    }
}

/// One full submit cycle: render the loading frame while the fetch is in
/// flight, then the settled outcome. A rejected (blank) submit renders its
/// error without ever entering the loading state.
async fn run_lookup(app: &mut App, city: &str) {
    if app.submit(city) {
        println!("{}", app.view());
        app.resolve().await;
    }
    println!("{}", app.view());
}

async fn interactive_loop(app: &mut App) -> anyhow::Result<()> {
    println!("{}", app.view());

    loop {
        match Text::new("Enter city name").prompt() {
            Ok(city) => run_lookup(app, &city).await,
            // Esc or Ctrl-C ends the session.
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
