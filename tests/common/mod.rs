#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use golfclub::config::DatabaseConfig;
use golfclub::{CascadeMatch, ClubConfig, ClubState, NewGame, NewPlayer};

pub async fn club_with(edit_cascade: CascadeMatch) -> ClubState {
    let config = ClubConfig {
        database: DatabaseConfig {
            url: Some("sqlite::memory:".to_string()),
            max_connections: Some(1),
            ..Default::default()
        },
        edit_cascade,
        ..Default::default()
    };
    ClubState::new(&config).await.expect("in-memory store")
}

pub async fn club() -> ClubState {
    club_with(CascadeMatch::default()).await
}

/// A time in January 2029.
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2029, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn new_player(firstname: &str, surname: &str, email: &str) -> NewPlayer {
    NewPlayer {
        firstname: firstname.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        gender: "F".to_string(),
        handicap: 12.5,
    }
}

pub fn new_game(slots: [i32; 4], game_time: NaiveDateTime) -> NewGame {
    NewGame {
        captain: slots[0],
        player2: slots[1],
        player3: slots[2],
        player4: slots[3],
        game_time,
    }
}

pub async fn book(club: &ClubState, slots: [i32; 4], game_time: NaiveDateTime) -> golfclub::game::Model {
    let outcome = club.games.create(new_game(slots, game_time)).await.unwrap();
    assert!(outcome.is_accepted(), "booking refused: {}", outcome.message());
    outcome.record().cloned().unwrap()
}

pub async fn register(club: &ClubState, firstname: &str, surname: &str, email: &str) -> golfclub::player::Model {
    let outcome = club
        .players
        .create(new_player(firstname, surname, email))
        .await
        .unwrap();
    assert!(outcome.is_accepted(), "registration refused: {}", outcome.message());
    outcome.record().cloned().unwrap()
}
