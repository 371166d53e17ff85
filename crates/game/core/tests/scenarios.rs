use game_core::{
    ActionKind, ActorFault, Coordinate, Env, ExecuteError, Faction, GameEngine, GameMap, GameRules,
    GameState, ImprovementKind, Player, PlayerId, Rejection, TargetFault, Terrain, Tile,
    UnitAction, UnitId, UnitKind, UnitOracle, UnitRegistry,
};

/// Two-player board: a worker and a warrior for player 1, a warrior for
/// player 2 next to them. Player 1 moves first and holds 5 stars.
fn board(registry: &UnitRegistry) -> GameState {
    let mut state = GameState::new(GameMap::filled(4, 4, Terrain::Plains));
    state
        .add_player(Player::new(PlayerId(1), Faction::Riverfolk).with_stars(5))
        .unwrap();
    state
        .add_player(Player::new(PlayerId(2), Faction::Steppe).with_stars(5))
        .unwrap();

    let spawn = |kind, id: &str, player, at| registry.lookup(kind).unwrap().spawn(id, player, at);
    state
        .add_unit(spawn(UnitKind::Worker, "worker", PlayerId(1), Coordinate::ORIGIN))
        .unwrap();
    state
        .add_unit(spawn(
            UnitKind::Warrior,
            "warrior",
            PlayerId(1),
            Coordinate::from_offset(1, 1),
        ))
        .unwrap();
    state
        .add_unit(spawn(
            UnitKind::Warrior,
            "raider",
            PlayerId(2),
            Coordinate::from_offset(2, 1),
        ))
        .unwrap();
    state.validate_setup().unwrap();
    state
}

fn rejection_of(result: Result<game_core::Transition, ExecuteError>) -> Rejection {
    match result {
        Err(ExecuteError::Rejected(inner)) => inner.error,
        other => panic!("expected a rejection, got {other:?}"),
    }
}

// ============================================================================
// Worker actions
// ============================================================================

#[test]
fn worker_builds_road_on_adjacent_plains() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);
    let target = Coordinate::new(1, 0, -1);

    let report = engine.execute_unit_action(&state, "worker", ActionKind::BuildRoad, None, Some(target));

    assert!(report.success, "{}", report.message);
    let next = report.new_state.expect("successful actions carry a state");
    assert_eq!(next.improvements.len(), 1);
    assert_eq!(next.improvements[0].coordinate, target);
    assert_eq!(next.improvements[0].kind, ImprovementKind::Road);
    assert_eq!(next.unit(&UnitId::from("worker")).unwrap().remaining_movement, 1);
    assert_eq!(next.player(PlayerId(1)).unwrap().resources.stars, 3);
    assert!(next.has_road(target));
}

#[test]
fn harvest_without_resource_is_terrain_mismatch() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);

    let report = engine.execute_unit_action(
        &state,
        "worker",
        ActionKind::Harvest,
        None,
        Some(Coordinate::new(1, 0, -1)),
    );

    assert!(!report.success);
    assert!(report.new_state.is_none());
    assert!(matches!(
        report.rejection,
        Some(Rejection::TerrainMismatch {
            action: ActionKind::Harvest,
            terrain: Terrain::Plains,
            ..
        })
    ));
}

#[test]
fn forest_clearing_pays_out_and_turns_plains() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let mut state = board(&registry);
    let forest = Coordinate::new(1, 0, -1);
    state
        .map
        .insert_tile(Tile::new(forest, Terrain::Forest))
        .unwrap();

    let transition = engine
        .dispatch(&state, &UnitAction::new("worker", ActionKind::ClearForest).at(forest))
        .unwrap();

    assert_eq!(transition.state.tile(forest).unwrap().terrain, Terrain::Plains);
    assert_eq!(transition.state.player(PlayerId(1)).unwrap().resources.stars, 6);
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn warrior_cannot_build_roads() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("warrior", ActionKind::BuildRoad).at(Coordinate::from_offset(1, 2)),
    ));

    assert_eq!(
        rejection,
        Rejection::UnsupportedAction {
            unit_kind: UnitKind::Warrior,
            action: ActionKind::BuildRoad,
        }
    );
}

#[test]
fn units_of_waiting_player_are_invalid_actors() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);
    assert_eq!(state.current_player_index, 0);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("raider", ActionKind::Attack).against(UnitId::from("warrior")),
    ));

    assert!(matches!(
        rejection,
        Rejection::InvalidActor {
            fault: ActorFault::NotCurrentPlayer { owner: PlayerId(2), .. },
            ..
        }
    ));
}

#[test]
fn second_attack_in_a_turn_is_already_acted() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let mut state = board(&registry);
    let warrior = state.unit(&UnitId::from("warrior")).unwrap().clone();
    state.units.insert(warrior.id.clone(), warrior.with_has_attacked(true));

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("warrior", ActionKind::Attack).against(UnitId::from("raider")),
    ));

    assert_eq!(rejection, Rejection::AlreadyActed(UnitId::from("warrior")));
}

#[test]
fn building_without_stars_is_refused() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let mut state = board(&registry);
    if let Some(player) = state.players.get_mut(0) {
        player.resources.stars = 1;
    }

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("worker", ActionKind::BuildRoad).at(Coordinate::new(1, 0, -1)),
    ));

    assert_eq!(
        rejection,
        Rejection::InsufficientResources {
            required: 2,
            available: 1,
        }
    );
}

#[test]
fn clearing_plains_is_terrain_mismatch() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);
    let plains = Coordinate::new(1, 0, -1);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("worker", ActionKind::ClearForest).at(plains),
    ));

    assert_eq!(
        rejection,
        Rejection::TerrainMismatch {
            action: ActionKind::ClearForest,
            terrain: Terrain::Plains,
            at: plains,
        }
    );
}

#[test]
fn move_beyond_movement_is_out_of_range() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("warrior", ActionKind::Move).at(Coordinate::from_offset(3, 1)),
    ));

    assert_eq!(rejection, Rejection::OutOfRange { distance: 2, range: 1 });
}

#[test]
fn attack_beyond_range_is_out_of_range() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("warrior", ActionKind::Attack).at(Coordinate::from_offset(1, 3)),
    ));

    assert_eq!(rejection, Rejection::OutOfRange { distance: 2, range: 1 });
}

#[test]
fn move_without_coordinate_is_missing_target() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);

    let rejection = rejection_of(
        engine.dispatch(&state, &UnitAction::new("worker", ActionKind::Move)),
    );

    assert_eq!(rejection, Rejection::InvalidTarget(TargetFault::Missing));
}

#[test]
fn move_off_the_map_is_out_of_bounds() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);
    let outside = Coordinate::from_offset(4, 0);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("worker", ActionKind::Move).at(outside),
    ));

    assert_eq!(
        rejection,
        Rejection::InvalidTarget(TargetFault::OutOfBounds(outside))
    );
}

#[test]
fn move_onto_a_unit_is_occupied() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);
    let taken = Coordinate::from_offset(1, 1);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("worker", ActionKind::Move).at(taken),
    ));

    assert_eq!(rejection, Rejection::InvalidTarget(TargetFault::Occupied(taken)));
}

#[test]
fn move_into_water_is_impassable() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let mut state = board(&registry);
    let water = Coordinate::new(1, 0, -1);
    state.map.insert_tile(Tile::new(water, Terrain::Water)).unwrap();

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("worker", ActionKind::Move).at(water),
    ));

    assert_eq!(rejection, Rejection::InvalidTarget(TargetFault::Impassable(water)));
}

#[test]
fn attack_on_empty_tile_has_no_target() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let state = board(&registry);
    let empty = Coordinate::from_offset(0, 1);

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("warrior", ActionKind::Attack).at(empty),
    ));

    assert_eq!(
        rejection,
        Rejection::NoTarget {
            unit: None,
            at: Some(empty),
        }
    );
}

#[test]
fn attack_on_friendly_unit_has_no_target() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let mut state = board(&registry);
    let beside = Coordinate::new(1, 0, -1);
    let archer = registry
        .lookup(UnitKind::Archer)
        .unwrap()
        .spawn("archer", PlayerId(1), beside);
    state.add_unit(archer).unwrap();

    let rejection = rejection_of(engine.dispatch(
        &state,
        &UnitAction::new("warrior", ActionKind::Attack).against(UnitId::from("archer")),
    ));

    assert_eq!(
        rejection,
        Rejection::NoTarget {
            unit: Some(UnitId::from("archer")),
            at: Some(beside),
        }
    );
}

// ============================================================================
// Combat
// ============================================================================

#[test]
fn lethal_attack_removes_defender() {
    let registry = UnitRegistry::standard();
    let rules = GameRules::standard();
    let engine = GameEngine::new(Env::new(&registry, &rules).into_game_env());
    let mut state = board(&registry);
    let catapult = registry.lookup(UnitKind::Catapult).unwrap().spawn(
        "catapult",
        PlayerId(1),
        Coordinate::from_offset(0, 3),
    );
    state.add_unit(catapult).unwrap();
    let raider = state.unit(&UnitId::from("raider")).unwrap().clone();
    state.units.insert(raider.id.clone(), raider.with_hp(2));

    let transition = engine
        .dispatch(
            &state,
            &UnitAction::new("catapult", ActionKind::Attack).against(UnitId::from("raider")),
        )
        .unwrap();

    assert!(transition.state.unit(&UnitId::from("raider")).is_none());
    assert!(transition.state.unit(&UnitId::from("catapult")).unwrap().has_attacked);
    assert!(state.unit(&UnitId::from("raider")).is_some());
}
