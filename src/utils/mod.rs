pub mod constraints;
pub mod data_validation;
pub mod game_card;
pub mod sorting;
