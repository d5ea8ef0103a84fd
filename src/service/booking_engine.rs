use std::str::FromStr;
use std::sync::Arc;

use chrono::{Duration, NaiveTime};
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::{Condition, ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::club_errors::{BookingErr, ClubErr, Rejection};
use crate::orm::model::game::{self, NewGame};
use crate::orm::model::player;
use crate::orm::store::insert_with_next_id;
use crate::outcome::Outcome;
use crate::service::ClubTable;
use crate::utils::constraints::GAME_CARD_MAX_CHARS;
use crate::utils::data_validation::booking::{game_time_validate, slots_validate};
use crate::utils::game_card::render_game_card;
use crate::utils::sorting::{GameColumn, TableSorter};

/// Which games get their card recomputed when a game is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CascadeMatch {
    /// Same value in the same slot: Captain against Captain, Player2 against
    /// Player2, and so on.
    SlotAligned,
    /// Any participant of the edited game in any slot.
    #[default]
    AnyParticipant,
}

impl CascadeMatch {
    pub fn matches(self, edited: &game::Model, other: &game::Model) -> bool {
        match self {
            CascadeMatch::SlotAligned => edited
                .slots()
                .iter()
                .zip(other.slots())
                .any(|(a, b)| *a == b),
            CascadeMatch::AnyParticipant => edited.slots().iter().any(|id| other.has_participant(*id)),
        }
    }

    pub fn condition(self, edited: &game::Model) -> Condition {
        match self {
            CascadeMatch::SlotAligned => Condition::any()
                .add(game::Column::Captain.eq(edited.captain))
                .add(game::Column::Player2.eq(edited.player2))
                .add(game::Column::Player3.eq(edited.player3))
                .add(game::Column::Player4.eq(edited.player4)),
            CascadeMatch::AnyParticipant => {
                let ids = edited.slots();
                Condition::any()
                    .add(game::Column::Captain.is_in(ids))
                    .add(game::Column::Player2.is_in(ids))
                    .add(game::Column::Player3.is_in(ids))
                    .add(game::Column::Player4.is_in(ids))
            }
        }
    }
}

impl FromStr for CascadeMatch {
    type Err = ClubErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slot-aligned" => Ok(CascadeMatch::SlotAligned),
            "any-participant" => Ok(CascadeMatch::AnyParticipant),
            _ => Err(ClubErr::ConfigError(format!("unknown edit cascade {:?}", s))),
        }
    }
}

/// Games in which `player_id` holds any of the four slots.
pub(crate) fn participant_condition(player_id: i32) -> Condition {
    Condition::any()
        .add(game::Column::Captain.eq(player_id))
        .add(game::Column::Player2.eq(player_id))
        .add(game::Column::Player3.eq(player_id))
        .add(game::Column::Player4.eq(player_id))
}

fn checked_card(game: &game::Model, players: &[player::Model]) -> String {
    let card = render_game_card(game, players);
    let len = card.chars().count();
    if len > GAME_CARD_MAX_CHARS {
        warn!(target: "booking", "Card for game {} is {} chars, over the {} char bound", game.id, len, GAME_CARD_MAX_CHARS);
    }
    card
}

/// Re-renders and stores the card of an already persisted game.
pub(crate) async fn store_card<C: ConnectionTrait>(
    db: &C,
    game: game::Model,
    players: &[player::Model],
) -> Result<(), DbErr> {
    let card = checked_card(&game, players);
    let mut db_game = game.into_active_model();
    db_game.game_card = Set(card);
    db_game.update(db).await?;
    Ok(())
}

pub struct BookingEngine {
    database: Arc<DatabaseConnection>,
    sorter: TableSorter<GameColumn>,
    id_attempts: u32,
    cascade: CascadeMatch,
}

impl BookingEngine {
    pub fn new(database: Arc<DatabaseConnection>, id_attempts: u32, cascade: CascadeMatch) -> Self {
        Self {
            database,
            sorter: TableSorter::new(),
            id_attempts,
            cascade,
        }
    }

    pub fn cascade(&self) -> CascadeMatch {
        self.cascade
    }

    fn reject(rejection: Rejection) -> Outcome<game::Model> {
        debug!(target: "booking", "Booking refused: {}", rejection);
        Outcome::Rejected(rejection)
    }

    /// Books `new_game` if it passes the booking rules, checked in order; the
    /// first one broken decides the message. On success the outcome message
    /// is the new game's card.
    pub async fn create(&self, new_game: NewGame) -> Result<Outcome<game::Model>, ClubErr> {
        let db = &*self.database;

        if let Err(rejection) = slots_validate(&new_game.slots()) {
            return Ok(Self::reject(rejection));
        }
        if let Err(rejection) = game_time_validate(&new_game.game_time) {
            return Ok(Self::reject(rejection));
        }

        // Slot already taken
        if game::Entity::find()
            .filter(game::Column::GameTime.eq(new_game.game_time))
            .count(db)
            .await?
            > 0
        {
            return Ok(Self::reject(
                BookingErr::TimeUnavailable(new_game.game_time).into(),
            ));
        }

        // One game per captain per day
        let date = new_game.game_time.date();
        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        if let Some(booked) = game::Entity::find()
            .filter(game::Column::Captain.eq(new_game.captain))
            .filter(game::Column::GameTime.gte(day_start))
            .filter(game::Column::GameTime.lt(day_end))
            .order_by_asc(game::Column::Id)
            .one(db)
            .await?
        {
            return Ok(Self::reject(
                BookingErr::CaptainAlreadyBooked {
                    date,
                    game_id: booked.id,
                }
                .into(),
            ));
        }

        let players = player::Entity::find().all(db).await?;
        let booked_model = |id: i32| {
            let mut game = new_game.clone().into_model(id, String::new());
            game.game_card = checked_card(&game, &players);
            game
        };

        let id = insert_with_next_id::<game::Entity, _, _, _>(
            db,
            game::Column::Id,
            self.id_attempts,
            |id| booked_model(id).into_insert(),
        )
        .await?;
        let mut game = new_game.into_model(id, String::new());
        game.game_card = render_game_card(&game, &players);

        info!(target: "booking", "Game {} booked for {} (captain {})", game.id, game.game_time, game.captain);
        Ok(Outcome::Accepted {
            message: game.game_card.clone(),
            record: game,
        })
    }

    /// Stores the edited game with a fresh card, then refreshes the cards of
    /// the games picked out by the cascade rule. Booking rules are not
    /// re-checked. Returns the number of cards written.
    pub async fn edit(&self, game: game::Model) -> Result<usize, ClubErr> {
        let txn = self.database.begin().await?;
        let players = player::Entity::find().all(&txn).await?;

        let mut edited = game;
        edited.game_card = checked_card(&edited, &players);
        edited.clone().into_full_update().update(&txn).await?;

        let related = game::Entity::find()
            .filter(self.cascade.condition(&edited))
            .filter(game::Column::Id.ne(edited.id))
            .all(&txn)
            .await?;
        let refreshed = related.len() + 1;
        for other in related {
            store_card(&txn, other, &players).await?;
        }

        txn.commit().await?;
        info!(target: "booking", "Game {} edited, {} card(s) refreshed", edited.id, refreshed);
        Ok(refreshed)
    }

    /// Removes the game and nothing else. Returns the rows removed.
    pub async fn delete(&self, game: &game::Model) -> Result<u64, ClubErr> {
        let res = game::Entity::delete_by_id(game.id)
            .exec(&*self.database)
            .await?;
        info!(target: "booking", "Game {} deleted", game.id);
        Ok(res.rows_affected)
    }

    pub async fn get(&self, id: i32) -> Result<Option<game::Model>, ClubErr> {
        Ok(game::Entity::find_by_id(id).one(&*self.database).await?)
    }

    /// Renders the card for `game` against the current Player table.
    pub async fn generate_card(&self, game: &game::Model) -> Result<String, ClubErr> {
        let players = player::Entity::find().all(&*self.database).await?;
        Ok(checked_card(game, &players))
    }
}

#[async_trait::async_trait]
impl ClubTable for BookingEngine {
    type Row = game::Model;
    type Column = GameColumn;

    async fn get_all(&self) -> Result<Vec<game::Model>, ClubErr> {
        Ok(game::Entity::find().all(&*self.database).await?)
    }

    fn sorter(&self) -> &TableSorter<GameColumn> {
        &self.sorter
    }
}
