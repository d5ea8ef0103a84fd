use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Game")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id")]
    pub id: i32,
    #[sea_orm(column_name = "captain")]
    pub captain: i32,
    #[sea_orm(column_name = "player2")]
    pub player2: i32,
    #[sea_orm(column_name = "player3")]
    pub player3: i32,
    #[sea_orm(column_name = "player4")]
    pub player4: i32,
    #[sea_orm(column_name = "game_time")]
    pub game_time: chrono::NaiveDateTime,
    // Derived from the slots and the Player table, see utils::game_card
    #[sea_orm(column_name = "game_card")]
    pub game_card: String,
}

// Slots reference Player ids without a foreign key: games may name players
// that are not (or no longer) registered.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Participant ids in slot order: Captain, Player2, Player3, Player4.
    pub fn slots(&self) -> [i32; 4] {
        [self.captain, self.player2, self.player3, self.player4]
    }

    pub fn has_participant(&self, player_id: i32) -> bool {
        self.slots().contains(&player_id)
    }

    pub fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            captain: Set(self.captain),
            player2: Set(self.player2),
            player3: Set(self.player3),
            player4: Set(self.player4),
            game_time: Set(self.game_time),
            game_card: Set(self.game_card),
        }
    }

    pub fn into_full_update(self) -> ActiveModel {
        ActiveModel {
            id: Unchanged(self.id),
            captain: Set(self.captain),
            player2: Set(self.player2),
            player3: Set(self.player3),
            player4: Set(self.player4),
            game_time: Set(self.game_time),
            game_card: Set(self.game_card),
        }
    }
}

/// A game as submitted for booking. Id and card are filled in by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGame {
    pub captain: i32,
    pub player2: i32,
    pub player3: i32,
    pub player4: i32,
    pub game_time: chrono::NaiveDateTime,
}

impl NewGame {
    pub fn slots(&self) -> [i32; 4] {
        [self.captain, self.player2, self.player3, self.player4]
    }

    pub fn into_model(self, id: i32, game_card: String) -> Model {
        Model {
            id,
            captain: self.captain,
            player2: self.player2,
            player3: self.player3,
            player4: self.player4,
            game_time: self.game_time,
            game_card,
        }
    }
}
