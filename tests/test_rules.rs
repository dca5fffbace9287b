use tennis_engine::player::{Player, PlayerState};
use tennis_engine::rules::{
    has_advantage, has_won_game, has_won_match, is_deuce, is_tiebreak, Mode,
};

fn player(name: &str, games: u32, points: u32) -> Player {
    Player::with_state(name, PlayerState { games, points })
}

#[test]
fn deuce_at_forty_all_and_beyond() {
    let p1 = player("Player 1", 0, 3);
    let p2 = player("Player 2", 0, 3);
    assert!(is_deuce(Mode::Normal, &p1, &p2));

    // Advantage counts as deuce territory
    let p1 = player("Player 1", 0, 4);
    let p2 = player("Player 2", 0, 3);
    assert!(is_deuce(Mode::Normal, &p1, &p2));

    // So does deuce regained after advantage
    let p1 = player("Player 1", 0, 4);
    let p2 = player("Player 2", 0, 4);
    assert!(is_deuce(Mode::Normal, &p1, &p2));
}

#[test]
fn no_deuce_below_forty_all() {
    let p1 = player("Player 1", 0, 3);
    let p2 = player("Player 2", 0, 2);
    assert!(!is_deuce(Mode::Normal, &p1, &p2));

    let p1 = player("Player 1", 0, 2);
    let p2 = player("Player 2", 0, 3);
    assert!(!is_deuce(Mode::Normal, &p1, &p2));
}

#[test]
fn no_deuce_in_tiebreak_mode() {
    let p1 = player("Player 1", 6, 3);
    let p2 = player("Player 2", 6, 3);
    assert!(!is_deuce(Mode::Tiebreak, &p1, &p2));
}

#[test]
fn tiebreak_only_at_six_games_all() {
    assert!(is_tiebreak(&player("Player 1", 6, 0), &player("Player 2", 6, 0)));
    assert!(!is_tiebreak(&player("Player 1", 6, 0), &player("Player 2", 5, 0)));
    assert!(!is_tiebreak(&player("Player 1", 0, 0), &player("Player 2", 0, 0)));
}

#[test]
fn advantage_goes_to_the_leader() {
    let p1 = player("Player 1", 0, 4);
    let p2 = player("Player 2", 0, 3);
    assert_eq!(has_advantage(Mode::Deuce, &p1, &p2), Some("Player 1"));
    assert_eq!(has_advantage(Mode::Deuce, &p2, &p1), Some("Player 1"));
}

#[test]
fn no_advantage_when_level_or_in_tiebreak() {
    let p1 = player("Player 1", 0, 3);
    let p2 = player("Player 2", 0, 3);
    assert_eq!(has_advantage(Mode::Deuce, &p1, &p2), None);
    assert_eq!(has_advantage(Mode::Tiebreak, &p1, &p2), None);
}

#[test]
fn normal_game_won_at_four_points_clear() {
    let p1 = player("Player 1", 0, 4);
    let p2 = player("Player 2", 0, 0);
    assert_eq!(has_won_game(Mode::Normal, &p1, &p2), Some("Player 1"));

    let p1 = player("Player 1", 0, 2);
    let p2 = player("Player 2", 0, 4);
    assert_eq!(has_won_game(Mode::Normal, &p1, &p2), Some("Player 2"));
}

#[test]
fn normal_game_not_won_in_deuce_territory() {
    // Both at forty is a mode transition, not a win
    let p1 = player("Player 1", 0, 3);
    let p2 = player("Player 2", 0, 3);
    assert_eq!(has_won_game(Mode::Normal, &p1, &p2), None);

    let p1 = player("Player 1", 0, 4);
    let p2 = player("Player 2", 0, 3);
    assert_eq!(has_won_game(Mode::Normal, &p1, &p2), None);
}

#[test]
fn deuce_game_needs_two_point_margin() {
    let p1 = player("Player 1", 0, 5);
    let p2 = player("Player 2", 0, 3);
    assert_eq!(has_won_game(Mode::Deuce, &p1, &p2), Some("Player 1"));
    assert_eq!(has_won_game(Mode::Deuce, &p2, &p1), Some("Player 1"));

    let level = (player("Player 1", 0, 4), player("Player 2", 0, 4));
    assert_eq!(has_won_game(Mode::Deuce, &level.0, &level.1), None);

    let ahead_by_one = (player("Player 1", 0, 4), player("Player 2", 0, 3));
    assert_eq!(has_won_game(Mode::Deuce, &ahead_by_one.0, &ahead_by_one.1), None);
}

#[test]
fn tiebreak_game_needs_minimum_and_margin() {
    let p1 = player("Player 1", 6, 7);
    let p2 = player("Player 2", 6, 5);
    assert_eq!(has_won_game(Mode::Tiebreak, &p1, &p2), Some("Player 1"));

    let p1 = player("Player 1", 6, 7);
    let p2 = player("Player 2", 6, 9);
    assert_eq!(has_won_game(Mode::Tiebreak, &p1, &p2), Some("Player 2"));

    // Below the minimum nobody wins, whatever the margin
    let p1 = player("Player 1", 6, 5);
    let p2 = player("Player 2", 6, 5);
    assert_eq!(has_won_game(Mode::Tiebreak, &p1, &p2), None);

    // At the minimum the two point margin still applies
    let p1 = player("Player 1", 6, 7);
    let p2 = player("Player 2", 6, 6);
    assert_eq!(has_won_game(Mode::Tiebreak, &p1, &p2), None);
}

#[test]
fn match_won_at_six_games_two_clear() {
    assert_eq!(
        has_won_match(&player("Player 1", 6, 0), &player("Player 2", 4, 0)),
        Some("Player 1")
    );
    assert_eq!(
        has_won_match(&player("Player 1", 7, 0), &player("Player 2", 5, 0)),
        Some("Player 1")
    );
    assert_eq!(
        has_won_match(&player("Player 1", 5, 0), &player("Player 2", 7, 0)),
        Some("Player 2")
    );
}

#[test]
fn match_not_won_without_minimum_or_margin() {
    assert_eq!(
        has_won_match(&player("Player 1", 0, 0), &player("Player 2", 0, 0)),
        None
    );
    assert_eq!(
        has_won_match(&player("Player 1", 6, 0), &player("Player 2", 5, 0)),
        None
    );
    // Six all pends the tiebreak
    assert_eq!(
        has_won_match(&player("Player 1", 6, 0), &player("Player 2", 6, 0)),
        None
    );
    // One game clear is still not enough, even past six
    assert_eq!(
        has_won_match(&player("Player 1", 7, 0), &player("Player 2", 6, 0)),
        None
    );
}
