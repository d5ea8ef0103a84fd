//! Declared per-field constraints on the stored records.
//!
//! Unlike the create-time checks in `data_validation`, these run every rule
//! and report all violations. Registration does not call them; the booking
//! engine uses the game card bound to flag oversized cards.

use crate::orm::model::{game, player};
use crate::utils::data_validation::email::{is_mailbox, EMAIL_MAX_CHARS, EMAIL_MIN_CHARS};
use crate::utils::data_validation::name::NAME_MAX_CHARS;

pub const GAME_CARD_MAX_CHARS: usize = 250;
pub const HANDICAP_MIN: f64 = 1.0;
pub const HANDICAP_MAX: f64 = 50.0;
pub const GENDER_CODES: [&str; 3] = ["M", "F", "O"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn name_in_bounds(name: &str) -> bool {
    (1..=NAME_MAX_CHARS).contains(&name.chars().count())
}

pub fn player_violations(player: &player::Model) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !name_in_bounds(&player.firstname) {
        violations.push(FieldViolation::new(
            "firstname",
            "First name must be 1 to 10 characters.",
        ));
    }
    if !name_in_bounds(&player.surname) {
        violations.push(FieldViolation::new(
            "surname",
            "Surname must be 1 to 10 characters.",
        ));
    }

    let email_len = player.email.chars().count();
    if !(EMAIL_MIN_CHARS..=EMAIL_MAX_CHARS).contains(&email_len) {
        violations.push(FieldViolation::new(
            "email",
            "Email must be 5 to 30 characters.",
        ));
    }
    if !is_mailbox(&player.email) {
        violations.push(FieldViolation::new("email", "Invalid email address."));
    }

    if !GENDER_CODES.contains(&player.gender.as_str()) {
        violations.push(FieldViolation::new(
            "gender",
            "Gender must be either M, F or O",
        ));
    }

    if !(HANDICAP_MIN..=HANDICAP_MAX).contains(&player.handicap) {
        violations.push(FieldViolation::new(
            "handicap",
            "Handicap must be between 1 and 50.",
        ));
    }

    violations
}

pub fn game_violations(game: &game::Model) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if game.game_card.chars().count() > GAME_CARD_MAX_CHARS {
        violations.push(FieldViolation::new(
            "game_card",
            "Game card must be at most 250 characters.",
        ));
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_player() -> player::Model {
        player::Model {
            id: 1,
            firstname: "Ann".to_string(),
            surname: "Lee".to_string(),
            email: "ann@club.com".to_string(),
            gender: "F".to_string(),
            handicap: 12.5,
        }
    }

    #[test]
    fn valid_player_has_no_violations() {
        assert!(player_violations(&valid_player()).is_empty());
    }

    #[test]
    fn violations_accumulate() {
        let player = player::Model {
            surname: String::new(),
            gender: "X".to_string(),
            handicap: 51.0,
            ..valid_player()
        };
        let fields: Vec<&str> = player_violations(&player).iter().map(|v| v.field).collect();
        assert_eq!(fields, ["surname", "gender", "handicap"]);
    }

    #[test]
    fn bad_email_reports_both_rules() {
        let player = player::Model {
            email: "nope".to_string(),
            ..valid_player()
        };
        let violations = player_violations(&player);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.field == "email"));
    }

    #[test]
    fn game_card_bound() {
        let mut game = game::Model {
            id: 1,
            captain: 1,
            player2: 2,
            player3: 3,
            player4: 4,
            game_time: NaiveDate::from_ymd_opt(2023, 7, 15)
                .unwrap()
                .and_hms_opt(13, 30, 0)
                .unwrap(),
            game_card: "Short game card content".to_string(),
        };
        assert!(game_violations(&game).is_empty());
        game.game_card = "X".repeat(251);
        assert_eq!(game_violations(&game)[0].field, "game_card");
    }
}
