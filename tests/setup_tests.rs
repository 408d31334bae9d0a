//! Setup-phase integration tests.
//!
//! These drive the engine through the public API the way a hosting service
//! would: validate first, apply only on success.

use std::borrow::Cow;

use homeworlds::core::{Action, Color, GameState, PhaseTag, Player, Size, SystemValidity};
use homeworlds::rules::{RulesEngine, SetupRules, ValidationError};

fn star(color: Color, size: Size, player: Player) -> Action {
    Action::TakeStar { color, size, player }
}

fn ship(color: Color, size: Size, player: Player) -> Action {
    Action::TakeShip { color, size, player }
}

fn play(rules: &SetupRules, state: GameState, actions: &[Action]) -> GameState {
    actions.iter().fold(state, |state, action| {
        rules
            .submit(&state, action)
            .unwrap_or_else(|e| panic!("{action} rejected: {e}"))
    })
}

// =============================================================================
// Turn Discipline
// =============================================================================

/// Test that a successful take flips the active player and shrinks the bank.
#[test]
fn test_take_flips_player_and_uses_bank() {
    let rules = SetupRules::default();
    let state = GameState::initial();

    let next = rules.apply(&state, &star(Color::Blue, Size::Large, Player::Player1));

    assert_eq!(next.bank.size(), state.bank.size() - 1);
    assert_eq!(next.active_player, Player::Player2);

    let after = rules.apply(&next, &star(Color::Red, Size::Small, Player::Player2));
    assert_eq!(after.bank.size(), 34);
    assert_eq!(after.active_player, Player::Player1);
}

/// Test that applying with no matching piece returns the very same state.
#[test]
fn test_apply_without_piece_returns_same_reference() {
    let rules = SetupRules::default();
    let mut state = GameState::initial();
    for player in [Player::Player1, Player::Player2, Player::Player1] {
        state = play(&rules, state, &[star(Color::Yellow, Size::Medium, player)]);
    }
    // All three medium yellows are gone; Player 2 is to move.
    assert!(!state.bank.has_piece_of(Color::Yellow, Size::Medium));

    let action = star(Color::Yellow, Size::Medium, Player::Player2);
    assert_eq!(
        rules.validate(&state, &action),
        Err(ValidationError::PieceNotInBank {
            color: Color::Yellow,
            size: Size::Medium,
        })
    );

    let result = rules.apply(&state, &action);
    assert!(matches!(result, Cow::Borrowed(_)));
    assert!(std::ptr::eq(result.as_ref(), &state));
    assert_eq!(result.active_player, Player::Player2);
}

/// Test that the non-active player is rejected with both players named.
#[test]
fn test_wrong_player_reports_expected_and_actual() {
    let rules = SetupRules::default();
    let state = play(
        &rules,
        GameState::initial(),
        &[star(Color::Green, Size::Small, Player::Player1)],
    );

    assert_eq!(
        rules.validate(&state, &star(Color::Green, Size::Small, Player::Player1)),
        Err(ValidationError::WrongPlayer {
            expected: Player::Player2,
            actual: Player::Player1,
        })
    );
}

/// Test that a rejected submit leaves the caller's state intact.
#[test]
fn test_rejected_submit_changes_nothing() {
    let rules = SetupRules::default();
    let state = GameState::initial();

    let result = rules.submit(&state, &ship(Color::Red, Size::Large, Player::Player1));

    assert_eq!(
        result,
        Err(ValidationError::HomeSystemNeedsTwoStars {
            player: Player::Player1,
            required: 2,
        })
    );
    assert_eq!(state, GameState::initial());
}

// =============================================================================
// Phase Transition
// =============================================================================

/// Test the canonical six-action setup ending in the normal phase.
#[test]
fn test_setup_transitions_to_normal() {
    let rules = SetupRules::default();
    let stars = play(
        &rules,
        GameState::initial(),
        &[
            star(Color::Yellow, Size::Small, Player::Player1),
            star(Color::Green, Size::Small, Player::Player2),
            star(Color::Blue, Size::Medium, Player::Player1),
            star(Color::Red, Size::Large, Player::Player2),
        ],
    );

    for player in Player::ALL {
        let home = stars.home_system(player);
        assert_eq!(home.stars.len(), 2);
        assert!(matches!(home.validate(), SystemValidity::Invalid { .. }));
    }

    let one_ship = play(&rules, stars, &[ship(Color::Green, Size::Large, Player::Player1)]);
    assert_eq!(one_ship.tag(), PhaseTag::Setup);
    assert!(one_ship.home_system(Player::Player1).is_valid());

    let done = play(&rules, one_ship, &[ship(Color::Yellow, Size::Large, Player::Player2)]);
    assert_eq!(done.tag(), PhaseTag::Normal);
    assert_eq!(done.active_player, Player::Player1);
    assert_eq!(done.winner(), None);
    assert!(done.systems().unwrap().is_empty());

    let p2_home = done.home_system(Player::Player2);
    assert_eq!(p2_home.ships.len(), 1);
    assert_eq!(p2_home.ships[0].owner, Player::Player2);
    assert_eq!(p2_home.ships[0].color(), Color::Yellow);
}

/// Test that every setup action is refused once play has started.
#[test]
fn test_setup_actions_rejected_in_normal_phase() {
    let rules = SetupRules::default();
    let state = play(
        &rules,
        GameState::initial(),
        &[
            star(Color::Yellow, Size::Small, Player::Player1),
            star(Color::Green, Size::Small, Player::Player2),
            star(Color::Blue, Size::Medium, Player::Player1),
            star(Color::Red, Size::Large, Player::Player2),
            ship(Color::Green, Size::Large, Player::Player1),
            ship(Color::Yellow, Size::Large, Player::Player2),
        ],
    );

    for action in [
        star(Color::Blue, Size::Small, Player::Player1),
        ship(Color::Blue, Size::Small, Player::Player1),
    ] {
        assert_eq!(
            rules.validate(&state, &action),
            Err(ValidationError::WrongPhase {
                expected: PhaseTag::Setup,
                actual: PhaseTag::Normal,
            })
        );
    }
}

/// Test that a player may not claim a third star.
#[test]
fn test_third_star_rejected() {
    let rules = SetupRules::default();
    let state = play(
        &rules,
        GameState::initial(),
        &[
            star(Color::Yellow, Size::Small, Player::Player1),
            star(Color::Green, Size::Small, Player::Player2),
            star(Color::Blue, Size::Medium, Player::Player1),
            star(Color::Red, Size::Large, Player::Player2),
        ],
    );

    assert_eq!(
        rules.validate(&state, &star(Color::Red, Size::Small, Player::Player1)),
        Err(ValidationError::HomeSystemAlreadyHasTwoStars {
            player: Player::Player1,
            required: 2,
        })
    );
}

/// Test that a ship after a single star is rejected.
#[test]
fn test_ship_with_one_star_rejected() {
    let rules = SetupRules::default();
    let state = play(
        &rules,
        GameState::initial(),
        &[
            star(Color::Yellow, Size::Small, Player::Player1),
            star(Color::Green, Size::Small, Player::Player2),
        ],
    );

    assert_eq!(
        rules.validate(&state, &ship(Color::Red, Size::Small, Player::Player1)),
        Err(ValidationError::HomeSystemNeedsTwoStars {
            player: Player::Player1,
            required: 2,
        })
    );
}

/// Test that states from the same actions compare equal and older states
/// are left as they were.
#[test]
fn test_states_are_values() {
    let rules = SetupRules::default();
    let initial = GameState::initial();
    let action = star(Color::Blue, Size::Small, Player::Player1);

    let a = rules.submit(&initial, &action).unwrap();
    let b = rules.submit(&initial, &action).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, initial);
    assert_eq!(initial, GameState::initial());
}

/// Test a full setup round trip through JSON.
#[test]
fn test_state_json_round_trip() {
    let rules = SetupRules::default();
    let state = play(
        &rules,
        GameState::initial(),
        &[
            star(Color::Yellow, Size::Small, Player::Player1),
            star(Color::Green, Size::Small, Player::Player2),
            star(Color::Blue, Size::Medium, Player::Player1),
        ],
    );

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert_eq!(
        rules.legal_actions(&restored),
        rules.legal_actions(&state)
    );
}
