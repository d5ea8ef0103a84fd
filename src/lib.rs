pub mod club_errors;
pub mod clubstate;
pub mod config;
pub mod orm;
pub mod outcome;
pub mod service;
pub mod utils;

pub use club_errors::{BookingErr, ClubErr, Rejection};
pub use clubstate::ClubState;
pub use config::ClubConfig;
pub use orm::model::game::{self, NewGame};
pub use orm::model::player::{self, NewPlayer};
pub use outcome::Outcome;
pub use service::{BookingEngine, CascadeMatch, ClubTable, PlayerRegistry};
pub use utils::sorting::{SortDirection, SortedRows};
