use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DbErr;

use crate::utils::data_validation::email::EmailErr;
use crate::utils::data_validation::gender::GenderErr;
use crate::utils::data_validation::handicap::HandicapErr;
use crate::utils::data_validation::name::NameErr;

/// Failures of the store or the setup around it. These abort the operation.
#[derive(Debug, thiserror::Error)]
pub enum ClubErr {
    #[error("database error: {0}")]
    DBError(#[from] DbErr),

    #[error("no free id in table {table} after {attempts} attempts")]
    IdAllocationExhausted { table: String, attempts: u32 },

    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Why a create was refused. The display text is the message handed back to
/// the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("Incorrect firstname or surname - max length 10 each.")]
    ValidationNameError(NameErr),

    #[error("Invalid email address - max length 30.")]
    ValidationEmailError(EmailErr),

    #[error("A player with this email already exists.")]
    EmailInUse,

    #[error("Select gender.")]
    ValidationGenderError(GenderErr),

    #[error("Select handicap")]
    ValidationHandicapError(HandicapErr),

    #[error("{0}")]
    BookingError(BookingErr),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingErr {
    #[error("Players must be unique.")]
    PlayersNotUnique,

    #[error("Select a valid time.")]
    InvalidTime,

    #[error(
        "Game time of {} on {} is unavailable.",
        .0.format("%-I.%M %p"),
        .0.format("%d/%m/%Y")
    )]
    TimeUnavailable(NaiveDateTime),

    #[error(
        "Captain has existing booking on {}.(Game Id: {})",
        .date.format("%d/%m/%Y"),
        .game_id
    )]
    CaptainAlreadyBooked { date: NaiveDate, game_id: i32 },
}

impl From<BookingErr> for Rejection {
    fn from(e: BookingErr) -> Self {
        Self::BookingError(e)
    }
}
