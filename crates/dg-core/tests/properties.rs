//! Property tests for doors, movement and item conservation

use std::collections::HashSet;

use proptest::prelude::*;

use dg_core::action::{Action, Direction};
use dg_core::dungeon::{DoorState, Grid, Position, Tile, TileKind};
use dg_core::object::{ItemIds, ItemKind};
use dg_core::{GameConfig, GameState};

#[derive(Debug, Clone, Copy)]
enum DoorOp {
    Open,
    Close,
    UseKey,
    UseKnife,
}

fn door_op() -> impl Strategy<Value = DoorOp> {
    prop_oneof![
        Just(DoorOp::Open),
        Just(DoorOp::Close),
        Just(DoorOp::UseKey),
        Just(DoorOp::UseKnife),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
    ]
}

/// Expected state after an op, or `None` if the op must fail
fn model(state: DoorState, lockable: bool, op: DoorOp) -> Option<DoorState> {
    match (op, state) {
        (DoorOp::Open, DoorState::Closed) => Some(DoorState::Open),
        (DoorOp::Open, _) => None,
        (DoorOp::Close, DoorState::Open) => Some(DoorState::Closed),
        (DoorOp::Close, _) => None,
        (DoorOp::UseKey, DoorState::Locked) if lockable => Some(DoorState::Closed),
        (DoorOp::UseKey, DoorState::Closed) if lockable => Some(DoorState::Locked),
        (DoorOp::UseKey, DoorState::Open) if lockable => None,
        (DoorOp::UseKey, s) | (DoorOp::UseKnife, s) => Some(s),
    }
}

proptest! {
    #[test]
    fn prop_door_follows_state_machine(
        lockable in any::<bool>(),
        ops in prop::collection::vec(door_op(), 0..40),
    ) {
        let mut ids = ItemIds::new();
        let key = ids.spawn(ItemKind::Key);
        let knife = ids.spawn(ItemKind::Knife);
        let kind = if lockable { TileKind::locked_door() } else { TileKind::door() };
        let mut door = Tile::new(Position::new(0, 0), kind);

        for op in ops {
            let before = door.door_state().unwrap();
            let result = match op {
                DoorOp::Open => door.open(),
                DoorOp::Close => door.close(),
                DoorOp::UseKey => door.use_item(&key).map(|_| ()),
                DoorOp::UseKnife => door.use_item(&knife).map(|_| ()),
            };
            let after = door.door_state().unwrap();

            match model(before, lockable, op) {
                Some(expected) => {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(after, expected);
                }
                None => {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(after, before);
                }
            }
            prop_assert_eq!(door.passable(), after == DoorState::Open);
            if !lockable {
                prop_assert_ne!(after, DoorState::Locked);
            }
        }
    }

    #[test]
    fn prop_open_then_close_returns_to_closed(rounds in 1usize..10) {
        let mut door = Tile::new(Position::new(0, 0), TileKind::door());
        for _ in 0..rounds {
            prop_assert!(door.open().is_ok());
            prop_assert!(door.close().is_ok());
            prop_assert_eq!(door.door_state(), Some(DoorState::Closed));
        }
    }

    #[test]
    fn prop_blocked_moves_never_move(dirs in prop::collection::vec(direction(), 1..60)) {
        let layout = "#######\n#..+..#\n#.#1#.#\n#..2..#\n#######";
        let mut game = GameState::new(&GameConfig::default(), layout).unwrap();

        for dir in dirs {
            let before = game.player().pos;
            let target = game.target(dir);
            let passable = game.grid().tile(target).is_some_and(|t| t.passable());
            let outcome = game.perform(&Action::Move { target }).clone();

            if passable {
                prop_assert_eq!(game.player().pos, target);
                prop_assert!(!outcome.is_warning());
            } else {
                prop_assert_eq!(game.player().pos, before);
                prop_assert!(outcome.is_warning());
            }
        }
    }

    #[test]
    fn prop_items_are_conserved(
        steps in prop::collection::vec((direction(), 0u8..4, 0usize..4), 1..80),
    ) {
        let layout = "#######\n#.2.2.#\n#.....#\n#2...2#\n#######";
        let mut game = GameState::new(&GameConfig::default(), layout).unwrap();
        let total = game.item_count();

        for (dir, choice, slot) in steps {
            let here = game.player().pos;
            let action = match choice {
                0 => Action::Move { target: game.target(dir) },
                1 => Action::PickUp { target: here },
                _ => Action::Drop {
                    target: here,
                    item: game.player().inventory.select(slot).copied(),
                },
            };
            game.perform(&action);

            prop_assert_eq!(game.item_count(), total);

            let mut seen = HashSet::new();
            for item in game.grid().tiles().filter_map(Tile::item) {
                prop_assert!(seen.insert(item.id));
            }
            for item in game.player().inventory.iter() {
                prop_assert!(seen.insert(item.id));
            }
        }
    }
}

#[test]
fn test_grid_parse_of_every_legend_char() {
    let mut ids = ItemIds::new();
    let grid = Grid::parse(".#+12", &mut ids).unwrap();
    assert_eq!(grid.tiles().count(), 5);
}
