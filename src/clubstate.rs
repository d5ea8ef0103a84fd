use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{debug, info};

use crate::club_errors::ClubErr;
use crate::config::ClubConfig;
use crate::orm::model::{game, player};
use crate::orm::{build_database_conn_string, create_tables, store};
use crate::service::{BookingEngine, PlayerRegistry};

/// One store connection and the two services working on it.
pub struct ClubState {
    pub database: Arc<DatabaseConnection>,
    pub players: PlayerRegistry,
    pub games: BookingEngine,
}

impl ClubState {
    pub async fn new(config: &ClubConfig) -> Result<Self, ClubErr> {
        let conn_string = build_database_conn_string(&config.database);
        debug!(target: "config", "Database connection string: {}", conn_string);

        let mut opt = ConnectOptions::new(conn_string);
        opt.sqlx_logging(false);
        if let Some(max) = config.database.max_connections {
            opt.max_connections(max);
        }
        let db = Database::connect(opt).await?;
        Self::with_connection(db, config).await
    }

    pub async fn with_connection(db: DatabaseConnection, config: &ClubConfig) -> Result<Self, ClubErr> {
        if config.init_schemas {
            create_tables(&db).await?;
        }

        let n_players = store::count::<player::Entity, _>(&db).await?;
        let n_games = store::count::<game::Entity, _>(&db).await?;
        info!(target: "store", "Store ready with {} player(s) and {} game(s)", n_players, n_games);

        let database = Arc::new(db);
        Ok(Self {
            players: PlayerRegistry::new(database.clone(), config.id_attempts),
            games: BookingEngine::new(database.clone(), config.id_attempts, config.edit_cascade),
            database,
        })
    }
}
