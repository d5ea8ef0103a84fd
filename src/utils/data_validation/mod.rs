pub mod booking;
pub mod email;
pub mod gender;
pub mod handicap;
pub mod name;
