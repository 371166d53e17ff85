//! Property-based tests for the action pipeline.
//!
//! Random boards and random requests, checked against the guarantees every
//! dispatch must keep whether it succeeds or not.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use game_core::{
    ActionKind, ActionOutcome, Coordinate, Env, Faction, GameEngine, GameMap, GameRules,
    GameState, Player, PlayerId, Resource, Terrain, Tile, UnitAction, UnitId, UnitKind,
    UnitOracle, UnitRegistry,
};

const WIDTH: u32 = 5;
const HEIGHT: u32 = 5;
const ACTORS: [&str; 5] = ["worker", "archer", "rider", "catapult", "enemy"];

fn terrain() -> impl Strategy<Value = Terrain> {
    prop::sample::select(vec![
        Terrain::Plains,
        Terrain::Plains,
        Terrain::Grassland,
        Terrain::Forest,
        Terrain::Hills,
        Terrain::Mountain,
        Terrain::Water,
    ])
}

fn resource() -> impl Strategy<Value = Option<Resource>> {
    prop::option::of(prop::sample::select(vec![
        Resource::Fruit,
        Resource::Game,
        Resource::Fish,
    ]))
}

fn board(tiles: &[(Terrain, Option<Resource>)], stars: u32, registry: &UnitRegistry) -> GameState {
    let mut map = GameMap::new(WIDTH, HEIGHT);
    for (index, (terrain, resource)) in tiles.iter().enumerate() {
        let index = index as i32;
        let at = Coordinate::from_offset(index % WIDTH as i32, index / WIDTH as i32);
        let mut tile = Tile::new(at, *terrain);
        if let Some(resource) = resource {
            tile = tile.with_resource(*resource);
        }
        map.insert_tile(tile).unwrap();
    }

    let mut state = GameState::new(map);
    state
        .add_player(Player::new(PlayerId(1), Faction::Highland).with_stars(stars))
        .unwrap();
    state
        .add_player(Player::new(PlayerId(2), Faction::Coastal).with_stars(stars))
        .unwrap();

    let roster = [
        (UnitKind::Worker, ACTORS[0], PlayerId(1), (1, 1)),
        (UnitKind::Archer, ACTORS[1], PlayerId(1), (2, 2)),
        (UnitKind::Rider, ACTORS[2], PlayerId(1), (0, 3)),
        (UnitKind::Catapult, ACTORS[3], PlayerId(1), (4, 0)),
        (UnitKind::Swordsman, ACTORS[4], PlayerId(2), (3, 2)),
    ];
    for (kind, id, player, (column, row)) in roster {
        let unit = registry
            .lookup(kind)
            .unwrap()
            .spawn(id, player, Coordinate::from_offset(column, row));
        state.add_unit(unit).unwrap();
    }
    state
}

fn request() -> impl Strategy<Value = UnitAction> {
    (
        0..ACTORS.len(),
        0..ActionKind::ALL.len(),
        prop::option::of((-1i32..=WIDTH as i32, -1i32..=HEIGHT as i32)),
        prop::option::of(0..ACTORS.len()),
    )
        .prop_map(|(actor, kind, target, target_unit)| UnitAction {
            actor: UnitId::from(ACTORS[actor]),
            kind: ActionKind::ALL[kind],
            target: target.map(|(column, row)| Coordinate::from_offset(column, row)),
            target_unit: target_unit.map(|index| UnitId::from(ACTORS[index])),
        })
}

fn scenario() -> impl Strategy<Value = (Vec<(Terrain, Option<Resource>)>, u32, UnitAction)> {
    (
        prop::collection::vec((terrain(), resource()), (WIDTH * HEIGHT) as usize),
        0u32..12,
        request(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// The caller's snapshot is identical after any dispatch.
    #[test]
    fn input_state_is_never_mutated((tiles, stars, action) in scenario()) {
        let registry = UnitRegistry::standard();
        let rules = GameRules::standard();
        let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
        let state = board(&tiles, stars, &registry);
        let before = state.clone();

        let _ = engine.dispatch(&state, &action);

        prop_assert_eq!(&state, &before);
        #[cfg(feature = "serde")]
        prop_assert_eq!(state.digest(), before.digest());
    }

    /// Failures carry no state; successes carry a consistent one.
    #[test]
    fn outcome_is_atomic((tiles, stars, action) in scenario()) {
        let registry = UnitRegistry::standard();
        let rules = GameRules::standard();
        let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
        let state = board(&tiles, stars, &registry);

        let report = engine.execute_unit_action(
            &state,
            action.actor.clone(),
            action.kind,
            action.target_unit.clone(),
            action.target,
        );

        prop_assert_eq!(report.success, report.new_state.is_some());
        prop_assert_eq!(report.success, report.outcome.is_some());
        if let Some(next) = &report.new_state {
            prop_assert!(next.check_invariants().is_ok());
            prop_assert_eq!(next.units.len() + usize::from(matches!(
                report.outcome,
                Some(ActionOutcome::Attacked { defeated: true, .. })
            )), state.units.len());
        }
    }

    /// Movement is spent exactly once and never beyond the budget.
    #[test]
    fn movement_budget_holds((tiles, stars, action) in scenario()) {
        let registry = UnitRegistry::standard();
        let rules = GameRules::standard();
        let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
        let state = board(&tiles, stars, &registry);

        if let Ok(transition) = engine.dispatch(&state, &action) {
            let before = state.unit(&action.actor).unwrap();
            let after = transition.state.unit(&action.actor).unwrap();
            prop_assert!(after.remaining_movement <= before.remaining_movement);
            prop_assert!(after.remaining_movement <= after.movement);
            if let ActionOutcome::Moved { movement_spent, .. } = transition.outcome {
                prop_assert_eq!(after.remaining_movement, before.remaining_movement - movement_spent);
            }
        }
    }

    /// Building debits exactly the improvement cost and never overdraws.
    #[test]
    fn building_conserves_stars((tiles, stars, action) in scenario()) {
        let registry = UnitRegistry::standard();
        let rules = GameRules::standard();
        let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
        let state = board(&tiles, stars, &registry);

        if let Ok(transition) = engine.dispatch(&state, &action)
            && let ActionOutcome::Built { stars_spent, .. } = transition.outcome
        {
            let owner = state.unit(&action.actor).unwrap().player;
            let before = state.player(owner).unwrap().resources.stars;
            let after = transition.state.player(owner).unwrap().resources.stars;
            prop_assert!(stars_spent <= before);
            prop_assert_eq!(after, before - stars_spent);
        }
    }

    /// The same illegal request is refused for the same reason every time.
    #[test]
    fn rejection_is_repeatable((tiles, stars, action) in scenario()) {
        let registry = UnitRegistry::standard();
        let rules = GameRules::standard();
        let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
        let state = board(&tiles, stars, &registry);

        let first = engine.dispatch(&state, &action).err();
        let second = engine.dispatch(&state, &action).err();

        prop_assert_eq!(first, second);
    }
}
