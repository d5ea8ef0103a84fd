use std::sync::Arc;

use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use crate::club_errors::{ClubErr, Rejection};
use crate::orm::model::game;
use crate::orm::model::player::{self, NewPlayer};
use crate::orm::store::insert_with_next_id;
use crate::outcome::Outcome;
use crate::service::booking_engine::{participant_condition, store_card};
use crate::service::ClubTable;
use crate::utils::data_validation::email::email_validate;
use crate::utils::data_validation::gender::gender_validate;
use crate::utils::data_validation::handicap::handicap_validate;
use crate::utils::data_validation::name::name_validate;
use crate::utils::sorting::{PlayerColumn, TableSorter};

pub struct PlayerRegistry {
    database: Arc<DatabaseConnection>,
    sorter: TableSorter<PlayerColumn>,
    id_attempts: u32,
}

impl PlayerRegistry {
    pub fn new(database: Arc<DatabaseConnection>, id_attempts: u32) -> Self {
        Self {
            database,
            sorter: TableSorter::new(),
            id_attempts,
        }
    }

    fn reject(rejection: Rejection) -> Outcome<player::Model> {
        debug!(target: "players", "Registration refused: {}", rejection);
        Outcome::Rejected(rejection)
    }

    async fn email_in_use(&self, email: &str) -> Result<bool, ClubErr> {
        let n_players = player::Entity::find()
            .filter(player::Column::Email.eq(email))
            .count(&*self.database)
            .await?;
        Ok(n_players > 0)
    }

    /// Registers `new_player` under the next free id. Checks run in order and
    /// stop at the first failure: names, email shape, email not taken,
    /// gender picked, handicap picked.
    pub async fn create(&self, new_player: NewPlayer) -> Result<Outcome<player::Model>, ClubErr> {
        if let Err(rejection) = name_validate(&new_player.firstname)
            .and_then(|_| name_validate(&new_player.surname))
            .and_then(|_| email_validate(&new_player.email))
        {
            return Ok(Self::reject(rejection));
        }

        if self.email_in_use(&new_player.email).await? {
            return Ok(Self::reject(Rejection::EmailInUse));
        }

        if let Err(rejection) =
            gender_validate(&new_player.gender).and_then(|_| handicap_validate(new_player.handicap))
        {
            return Ok(Self::reject(rejection));
        }

        let inserted = insert_with_next_id::<player::Entity, _, _, _>(
            &*self.database,
            player::Column::Id,
            self.id_attempts,
            |id| new_player.clone().into_active_model(id),
        )
        .await;
        let id = match inserted {
            Ok(id) => id,
            // The email column is unique too; someone may have registered it
            // since the check above.
            Err(err @ ClubErr::IdAllocationExhausted { .. }) => {
                if self.email_in_use(&new_player.email).await? {
                    return Ok(Self::reject(Rejection::EmailInUse));
                }
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        let player = new_player.into_model(id);
        let message = format!("{} added.", player.full_name());
        info!(target: "players", "Player {} registered as id {}", player.full_name(), player.id);
        Ok(Outcome::Accepted {
            record: player,
            message,
        })
    }

    /// Writes the player back and refreshes the card of every game they play
    /// in, in one transaction. Fields are stored as given, without the
    /// registration checks. Returns the number of cards refreshed.
    pub async fn edit(&self, player: player::Model) -> Result<usize, ClubErr> {
        let player_id = player.id;
        let txn = self.database.begin().await?;

        player.into_full_update().update(&txn).await?;

        let players_games = game::Entity::find()
            .filter(participant_condition(player_id))
            .all(&txn)
            .await?;
        let players = player::Entity::find().all(&txn).await?;

        let refreshed = players_games.len();
        for db_game in players_games {
            store_card(&txn, db_game, &players).await?;
        }

        txn.commit().await?;
        info!(target: "players", "Player {} edited, {} card(s) refreshed", player_id, refreshed);
        Ok(refreshed)
    }

    /// Deletes every game the player takes part in, then the player.
    /// Returns the number of games removed.
    pub async fn delete(&self, player: &player::Model) -> Result<u64, ClubErr> {
        let txn = self.database.begin().await?;

        let removed = game::Entity::delete_many()
            .filter(participant_condition(player.id))
            .exec(&txn)
            .await?
            .rows_affected;
        player::Entity::delete_by_id(player.id).exec(&txn).await?;

        txn.commit().await?;
        info!(target: "players", "Player {} deleted along with {} game(s)", player.id, removed);
        Ok(removed)
    }

    pub async fn get(&self, id: i32) -> Result<Option<player::Model>, ClubErr> {
        Ok(player::Entity::find_by_id(id).one(&*self.database).await?)
    }
}

#[async_trait::async_trait]
impl ClubTable for PlayerRegistry {
    type Row = player::Model;
    type Column = PlayerColumn;

    async fn get_all(&self) -> Result<Vec<player::Model>, ClubErr> {
        Ok(player::Entity::find().all(&*self.database).await?)
    }

    fn sorter(&self) -> &TableSorter<PlayerColumn> {
        &self.sorter
    }
}
