use crate::orm::model::{game, player};

const SLOT_LABELS: [&str; 4] = ["Captain Id", "Player2 Id", "Player3 Id", "Player4 Id"];

fn slot_line(label: &str, player_id: i32, player: Option<&player::Model>, last: bool) -> String {
    let (firstname, surname, gender, handicap) = match player {
        Some(p) => (
            p.firstname.as_str(),
            p.surname.as_str(),
            p.gender.as_str(),
            p.handicap.to_string(),
        ),
        None => ("", "", "", String::new()),
    };
    // The Player4 row has no gap between label and id
    let gap = if last { "" } else { " " };
    format!(
        "{:<10}{}{:<10} {} {:<10} {}/{}",
        label, gap, player_id, firstname, surname, gender, handicap
    )
}

/// Renders the fixed-layout card for `game`, resolving each slot against
/// `players`. Slots naming an unknown player keep the raw id and leave the
/// rest blank.
pub fn render_game_card(game: &game::Model, players: &[player::Model]) -> String {
    let mut card = format!("{:<10}{}\n", "Game Id ", game.id);
    card.push_str(&format!(
        "{:<10}{} at {}\n\n",
        "Game Time ",
        game.game_time.format("%A %d/%m/%Y at %H:%M"),
        game.game_time.format("%-I.%M %p")
    ));

    let lines: Vec<String> = game
        .slots()
        .iter()
        .zip(SLOT_LABELS)
        .enumerate()
        .map(|(i, (id, label))| {
            let player = players.iter().find(|p| p.id == *id);
            slot_line(label, *id, player, i == SLOT_LABELS.len() - 1)
        })
        .collect();
    card.push_str(&lines.join("\n"));

    card
}
