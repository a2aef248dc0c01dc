//! End-to-end turns through `GameState`

use dg_core::action::{Action, Direction, Outcome, Severity};
use dg_core::dungeon::{DoorState, Position};
use dg_core::object::ItemKind;
use dg_core::{GameConfig, GameState, DEFAULT_MAP};

const KEY_ROOM: &str = "\
######
#.2.1.
######";

fn game(layout: &str) -> GameState {
    GameState::new(&GameConfig::default(), layout).unwrap()
}

fn step(game: &mut GameState, dir: Direction) -> Outcome {
    let target = game.target(dir);
    game.perform(&Action::Move { target }).clone()
}

#[test]
fn test_unlock_open_then_key_fails() {
    let mut game = game(KEY_ROOM);
    step(&mut game, Direction::East);
    let here = game.player().pos;
    game.perform(&Action::PickUp { target: here });
    step(&mut game, Direction::East);

    let door = game.target(Direction::East);
    let key = *game.player().inventory.select(2).unwrap();
    assert_eq!(key.kind, ItemKind::Key);

    let outcome = game.perform(&Action::Use { target: door, item: key }).clone();
    assert_eq!(outcome.message, "You use the key on the door: door is unlocked");
    assert_eq!(
        game.grid().tile(door).and_then(|t| t.door_state()),
        Some(DoorState::Closed)
    );

    let outcome = game.perform(&Action::Open { target: door }).clone();
    assert_eq!(outcome, Outcome::normal("You open the door"));

    let outcome = game.perform(&Action::Use { target: door, item: key }).clone();
    assert_eq!(outcome.severity, Severity::Warning);
    assert!(outcome.message.ends_with("door is open"));

    step(&mut game, Direction::East);
    assert_eq!(game.player().pos, door);
}

#[test]
fn test_pick_up_key_scenario() {
    let mut game = game(KEY_ROOM);
    step(&mut game, Direction::East);
    let here = game.player().pos;

    let outcome = game.perform(&Action::PickUp { target: here }).clone();
    assert_eq!(outcome, Outcome::normal("You pick up the key"));
    assert!(game.grid().tile(here).unwrap().item().is_none());
    assert_eq!(game.player().inventory.listing(), "1: knife, 2: key");
}

#[test]
fn test_move_into_wall_scenario() {
    let mut game = game(KEY_ROOM);
    let outcome = step(&mut game, Direction::North);
    assert_eq!(
        outcome,
        Outcome::warning("You can't go that way: a wall blocks your way")
    );
    assert_eq!(game.player().pos, Position::new(1, 1));
}

#[test]
fn test_drop_then_walk_back_over_it() {
    let mut game = game(KEY_ROOM);
    let knife = *game.player().inventory.select(1).unwrap();
    let here = game.player().pos;

    let outcome = game.perform(&Action::Drop { target: here, item: Some(knife) }).clone();
    assert_eq!(outcome.message, "You drop the knife");
    assert!(game.player().inventory.is_empty());

    step(&mut game, Direction::East);
    let outcome = step(&mut game, Direction::West);
    assert_eq!(outcome.message, "You walk. There is a knife on the floor.");
}

#[test]
fn test_help_and_wait_spend_turns() {
    let mut game = game(KEY_ROOM);
    game.perform(&Action::help());
    assert!(game.status().message.starts_with("<arrows>: walk"));
    game.perform(&Action::wait());
    assert_eq!(game.status().message, "You wait");
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_default_map_is_playable() {
    let mut game = GameState::new(&GameConfig::default(), DEFAULT_MAP).unwrap();
    let start = game.player().pos;
    step(&mut game, Direction::East);
    assert_ne!(game.player().pos, start);
}
