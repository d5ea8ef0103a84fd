mod common;

use common::{at, book, club, new_player, register};
use golfclub::{ClubTable, NewPlayer, Rejection, SortDirection};

#[tokio::test]
async fn first_player_gets_id_one() {
    let club = club().await;

    let outcome = club
        .players
        .create(new_player("Ann", "Lee", "ann@club.com"))
        .await
        .unwrap();

    assert_eq!(outcome.message(), "Ann Lee added.");
    let ann = outcome.record().unwrap();
    assert_eq!(ann.id, 1);
    assert_eq!(club.players.get(1).await.unwrap().as_ref(), Some(ann));

    let bob = register(&club, "Bob", "Moss", "bob@club.com").await;
    assert_eq!(bob.id, 2);
}

async fn refused(player: NewPlayer) -> String {
    let club = club().await;
    let outcome = club.players.create(player).await.unwrap();
    assert!(!outcome.is_accepted());
    assert!(club.players.get_all().await.unwrap().is_empty());
    outcome.message()
}

#[tokio::test]
async fn bad_names_are_refused() {
    let expected = "Incorrect firstname or surname - max length 10 each.";
    assert_eq!(refused(new_player("", "Lee", "ann@club.com")).await, expected);
    assert_eq!(refused(new_player("Ann", "Abcdefghijk", "ann@club.com")).await, expected);
    assert_eq!(refused(new_player("Ann2", "Lee", "ann@club.com")).await, expected);
}

#[tokio::test]
async fn bad_emails_are_refused() {
    let expected = "Invalid email address - max length 30.";
    assert_eq!(refused(new_player("Ann", "Lee", "")).await, expected);
    assert_eq!(refused(new_player("Ann", "Lee", "ann.club.com")).await, expected);
    assert_eq!(
        refused(new_player("Ann", "Lee", "annabelle.lee.longname@club.com")).await,
        expected
    );
}

#[tokio::test]
async fn gender_and_handicap_must_be_picked() {
    let no_gender = NewPlayer {
        gender: String::new(),
        ..new_player("Ann", "Lee", "ann@club.com")
    };
    assert_eq!(refused(no_gender).await, "Select gender.");

    let no_handicap = NewPlayer {
        handicap: 0.0,
        ..new_player("Ann", "Lee", "ann@club.com")
    };
    assert_eq!(refused(no_handicap).await, "Select handicap");
}

#[tokio::test]
async fn first_failed_check_wins() {
    // Bad name and bad email: the name is reported
    let both = new_player("A1", "Lee", "nope");
    assert_eq!(
        refused(both).await,
        "Incorrect firstname or surname - max length 10 each."
    );

    // Bad email and no gender: the email is reported
    let both = NewPlayer {
        gender: String::new(),
        ..new_player("Ann", "Lee", "nope")
    };
    assert_eq!(refused(both).await, "Invalid email address - max length 30.");
}

#[tokio::test]
async fn handicap_range_is_not_checked_on_create() {
    let club = club().await;
    let outcome = club
        .players
        .create(NewPlayer {
            handicap: 75.0,
            ..new_player("Ann", "Lee", "ann@club.com")
        })
        .await
        .unwrap();
    assert!(outcome.is_accepted());
}

#[tokio::test]
async fn email_must_be_unique() {
    let club = club().await;
    register(&club, "Ann", "Lee", "ann@club.com").await;

    let outcome = club
        .players
        .create(new_player("Bob", "Moss", "ann@club.com"))
        .await
        .unwrap();

    assert_eq!(outcome.rejection(), Some(&Rejection::EmailInUse));
    assert_eq!(outcome.message(), "A player with this email already exists.");
    assert_eq!(club.players.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn edit_refreshes_the_players_games() {
    let club = club().await;
    let mut ann = register(&club, "Ann", "Lee", "ann@club.com").await;
    let bob = register(&club, "Bob", "Moss", "bob@club.com").await;
    let g1 = book(&club, [ann.id, bob.id, 20, 21], at(29, 10, 0)).await;
    let g2 = book(&club, [bob.id, 22, 23, ann.id], at(30, 10, 0)).await;
    let g3 = book(&club, [30, 31, 32, 33], at(31, 10, 0)).await;

    ann.surname = "Stone".to_string();
    ann.handicap = 9.0;
    let refreshed = club.players.edit(ann.clone()).await.unwrap();

    assert_eq!(refreshed, 2);
    assert_eq!(club.players.get(ann.id).await.unwrap(), Some(ann));
    for id in [g1.id, g2.id] {
        let card = club.games.get(id).await.unwrap().unwrap().game_card;
        assert!(card.contains("Ann Stone"));
        assert!(card.contains("F/9"));
        assert!(!card.contains("Ann Lee"));
    }
    assert_eq!(club.games.get(g3.id).await.unwrap().unwrap(), g3);
}

#[tokio::test]
async fn edit_does_not_rerun_registration_checks() {
    let club = club().await;
    let mut ann = register(&club, "Ann", "Lee", "ann@club.com").await;

    ann.firstname = "Annabelle-Jo".to_string();
    club.players.edit(ann.clone()).await.unwrap();

    let stored = club.players.get(ann.id).await.unwrap().unwrap();
    assert_eq!(stored.firstname, "Annabelle-Jo");
}

#[tokio::test]
async fn edit_of_unknown_player_fails() {
    let club = club().await;
    let ghost = new_player("Ann", "Lee", "ann@club.com").into_model(42);
    assert!(club.players.edit(ghost).await.is_err());
}

#[tokio::test]
async fn delete_takes_the_players_games_along() {
    let club = club().await;
    let ann = register(&club, "Ann", "Lee", "ann@club.com").await;
    book(&club, [ann.id, 2, 3, 4], at(29, 10, 0)).await;
    book(&club, [5, 6, ann.id, 7], at(30, 10, 0)).await;
    let other = book(&club, [8, 9, 10, 11], at(31, 10, 0)).await;

    let removed = club.players.delete(&ann).await.unwrap();

    assert_eq!(removed, 2);
    assert!(club.players.get(ann.id).await.unwrap().is_none());
    let games = club.games.get_all().await.unwrap();
    assert_eq!(games, vec![other]);
    assert!(games.iter().all(|g| !g.has_participant(ann.id)));
}

#[tokio::test]
async fn players_sort_by_each_column() {
    let club = club().await;
    register(&club, "Cy", "Hart", "cy@club.com").await;
    club.players
        .create(NewPlayer {
            handicap: 30.0,
            gender: "M".to_string(),
            ..new_player("Al", "Stone", "al@club.com")
        })
        .await
        .unwrap();
    club.players
        .create(NewPlayer {
            handicap: 4.0,
            ..new_player("Bo", "Moss", "bo@club.com")
        })
        .await
        .unwrap();

    let asc = club.players.sort_tables("Firstname").await.unwrap();
    assert_eq!(asc.direction, Some(SortDirection::Ascending));
    let names: Vec<&str> = asc.rows.iter().map(|p| p.firstname.as_str()).collect();
    assert_eq!(names, ["Al", "Bo", "Cy"]);

    let desc = club.players.sort_tables("Handicap").await.unwrap();
    assert_eq!(desc.direction, Some(SortDirection::Descending));
    let handicaps: Vec<f64> = desc.rows.iter().map(|p| p.handicap).collect();
    assert_eq!(handicaps, [30.0, 12.5, 4.0]);

    let by_email = club
        .players
        .sort_tables_by("Email", SortDirection::Ascending)
        .await
        .unwrap();
    let ids: Vec<i32> = by_email.rows.iter().map(|p| p.id).collect();
    assert_eq!(ids, [2, 3, 1]);

    let unknown = club.players.sort_tables("Nickname").await.unwrap();
    assert_eq!(unknown.direction, None);
    assert_eq!(unknown.rows.len(), 3);
}
