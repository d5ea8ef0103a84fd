use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{Set, Unchanged};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id")]
    pub id: i32,
    #[sea_orm(column_name = "firstname")]
    pub firstname: String,
    #[sea_orm(column_name = "surname")]
    pub surname: String,
    #[sea_orm(column_name = "email", unique)]
    pub email: String,
    #[sea_orm(column_name = "gender")]
    pub gender: String,
    #[sea_orm(column_name = "handicap")]
    pub handicap: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }

    // Every column but the key is written back on update
    pub fn into_full_update(self) -> ActiveModel {
        ActiveModel {
            id: Unchanged(self.id),
            firstname: Set(self.firstname),
            surname: Set(self.surname),
            email: Set(self.email),
            gender: Set(self.gender),
            handicap: Set(self.handicap),
        }
    }
}

/// A player as submitted for registration. The id is assigned by the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPlayer {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub gender: String,
    pub handicap: f64,
}

impl NewPlayer {
    pub fn into_model(self, id: i32) -> Model {
        Model {
            id,
            firstname: self.firstname,
            surname: self.surname,
            email: self.email,
            gender: self.gender,
            handicap: self.handicap,
        }
    }

    pub fn into_active_model(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            firstname: Set(self.firstname),
            surname: Set(self.surname),
            email: Set(self.email),
            gender: Set(self.gender),
            handicap: Set(self.handicap),
        }
    }
}
