use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use golfclub::utils::constraints::{game_violations, player_violations};
use golfclub::{ClubConfig, ClubErr, ClubState, ClubTable, SortDirection};

// Prints every game card in time order and flags stored records that break
// their declared field constraints.
async fn run() -> Result<(), ClubErr> {
    let config = ClubConfig::from_env()?;
    let state = ClubState::new(&config).await?;

    for player in state.players.get_all().await? {
        for violation in player_violations(&player) {
            warn!(target: "golfclub", "Player {}: {}", player.id, violation.message);
        }
    }

    let games = state
        .games
        .sort_tables_by("Game Time", SortDirection::Ascending)
        .await?
        .rows;
    for game in &games {
        for violation in game_violations(game) {
            warn!(target: "golfclub", "Game {}: {}", game.id, violation.message);
        }
        println!("{}\n", game.game_card);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load configuration
    dotenv::dotenv().ok();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GOLFCLUB_LOG"))
        .init();

    if let Err(err) = run().await {
        error!(target: "golfclub", "{}", err);
        std::process::exit(1);
    }
}
