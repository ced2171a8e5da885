//! Round flow tests: draws, takes, resets, and rotation across table sizes.

mod common;

use common::{game, init_logging, setup, stacked};
use ra_engine::{
    EffectEvent, EffectLog, Game, GameStatus, PlayerId, RaError, TakeOutcome, Tile, TileKind,
    Track,
};

/// Three players: the eighth Ra ends the round exactly once.
#[test]
fn test_three_player_round_ends_on_eighth_ra() {
    let mut kinds = vec![TileKind::Ra; 7];
    kinds.extend([TileKind::Gold, TileKind::Ra, TileKind::Ra]);
    let mut game = game(3, &kinds);

    for _ in 0..7 {
        let outcome = game.draw_tile().unwrap();
        assert_eq!(outcome.track, Track::Ra);
        assert!(!outcome.round_ended);
    }
    assert_eq!(game.ra_track().len(), 7);

    game.draw_tile().unwrap(); // Gold
    let outcome = game.draw_tile().unwrap();
    assert!(outcome.round_ended);
    assert_eq!(game.round(), 2);
    assert!(game.ra_track().is_empty());
    assert!(game.chest_track().is_empty());

    let outcome = game.draw_tile().unwrap();
    assert!(!outcome.round_ended);
    assert_eq!(game.ra_track().len(), 1);
}

/// Ra track capacity follows the player count.
#[test]
fn test_max_ra_per_table_size() {
    for (players, expected) in [(2, 6), (3, 8), (4, 9), (5, 10)] {
        let game = game(players, &[]);
        assert_eq!(game.max_ra(), expected, "{players} players");
        assert_eq!(game.snapshot().ra_slots_left(), expected);
    }
}

/// Reset prunes every hand to permanent tiles and reactivates everyone.
#[test]
fn test_reset_prunes_hands() {
    let mut kinds = vec![
        TileKind::Pharaoh,
        TileKind::Flood,
        TileKind::Temple,
        TileKind::Gold,
        TileKind::Nile,
        TileKind::War,
    ];
    kinds.extend([TileKind::Ra; 8]);
    let mut game = game(3, &kinds);

    for _ in 0..3 {
        game.draw_tile().unwrap();
    }
    game.player_takes(PlayerId::new(0)).unwrap();
    game.mark_inactive(PlayerId::new(0)).unwrap();

    for _ in 0..3 {
        game.draw_tile().unwrap();
    }
    game.player_takes(PlayerId::new(2)).unwrap();
    game.mark_inactive(PlayerId::new(2)).unwrap();

    for _ in 0..8 {
        game.draw_tile().unwrap();
    }

    let names = |p: usize| {
        game.players()[p]
            .tiles()
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(0), vec!["Pharaoh", "Temple"]);
    assert_eq!(names(1), Vec::<&str>::new());
    assert_eq!(names(2), vec!["Nile"]);
    assert!(game.players().iter().all(|p| p.is_active()));
}

/// Taking leaves the Ra track and other hands alone.
#[test]
fn test_take_isolation() {
    let mut game = game(
        4,
        &[TileKind::Ra, TileKind::Astronomy, TileKind::Ra, TileKind::Drought],
    );
    for _ in 0..4 {
        game.draw_tile().unwrap();
    }

    let before: Vec<_> = game.players().to_vec();
    let outcome = game.player_takes(PlayerId::new(3)).unwrap();

    assert_eq!(
        outcome,
        TakeOutcome::Taken(vec![Tile::new(TileKind::Astronomy), Tile::new(TileKind::Drought)])
    );
    assert_eq!(game.ra_track().len(), 2);
    for p in 0..3 {
        assert_eq!(game.players()[p], before[p]);
    }
    assert_eq!(game.players()[3].tiles().len(), 2);
}

/// Taking an empty chest succeeds with nothing taken.
#[test]
fn test_take_empty_chest() {
    let mut game = game(2, &[]);
    let outcome = game.player_takes(PlayerId::new(1)).unwrap();
    assert_eq!(outcome, TakeOutcome::Taken(Vec::new()));
    assert!(game.players()[1].tiles().is_empty());
}

/// An inactive player's take changes nothing but is still recorded.
#[test]
fn test_inactive_take_recorded() {
    let mut game = game(3, &[TileKind::Gold]);
    game.draw_tile().unwrap();
    game.mark_inactive(PlayerId::new(1)).unwrap();

    assert_eq!(game.player_takes(PlayerId::new(1)).unwrap(), TakeOutcome::Inactive);
    assert_eq!(game.chest_track().len(), 1);
    assert_eq!(game.history().len(), 3);
}

/// A driver loop: rotate until everyone but one has passed.
#[test]
fn test_rotation_driver_loop() {
    let mut game = game(4, &[]);

    let mut order = Vec::new();
    for _ in 0..3 {
        let next = game.next_player_index().unwrap();
        order.push(next.index());
        game.mark_inactive(next).unwrap();
        game.set_current_player(next).unwrap();
    }

    assert_eq!(order, vec![1, 2, 3]);
    // Player 0 is the only one still active, and player 3 is current.
    assert_eq!(game.next_player_index(), Some(PlayerId::new(0)));

    game.set_current_player(PlayerId::new(0)).unwrap();
    assert_eq!(game.next_player_index(), None);
}

/// Indices past the table are rejected without changing state.
#[test]
fn test_invalid_indices_rejected() {
    let mut game = game(2, &[TileKind::Gold]);
    game.draw_tile().unwrap();
    let before = game.snapshot();

    assert!(matches!(
        game.player_takes(PlayerId::new(2)),
        Err(RaError::InvalidPlayerIndex { index: 2, player_count: 2 })
    ));
    assert!(game.mark_inactive(PlayerId::new(7)).is_err());
    assert!(game.set_current_player(PlayerId::new(3)).is_err());
    assert!(game.player(PlayerId::new(2)).is_err());

    assert_eq!(game.snapshot(), before);
}

/// Playing out a whole bag always ends in the exhausted state.
#[test]
fn test_full_game_until_exhausted() {
    init_logging();
    let setup = setup(5).with_seed(2024);
    let mut game = Game::from_setup(&setup).unwrap();
    let mut draws = 0;

    loop {
        match game.draw_tile() {
            Ok(_) => draws += 1,
            Err(RaError::ExhaustedBag) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
        let next = game.next_player_index().unwrap_or(game.current_player());
        game.player_takes(next).unwrap();
        game.set_current_player(next).unwrap();
    }

    assert_eq!(draws, 180);
    assert_eq!(game.status(), GameStatus::Over);
    assert_eq!(game.bag_remaining(), 0);
    assert!(game.round() > 1);
}

/// The effect hook sees every tile added and every round end.
#[test]
fn test_effect_hook_observes() {
    init_logging();
    let mut kinds = vec![TileKind::Funeral, TileKind::Pharaoh];
    kinds.extend([TileKind::Ra; 6]);
    let mut game = Game::with_effect(&setup(2), stacked(&kinds), EffectLog::new()).unwrap();

    game.draw_tile().unwrap();
    game.draw_tile().unwrap();
    game.player_takes(PlayerId::new(0)).unwrap();
    for _ in 0..6 {
        game.draw_tile().unwrap();
    }

    let events = game.effect().events();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        EffectEvent::TileAdded {
            player: PlayerId::new(0),
            tile: Tile::new(TileKind::Funeral)
        }
    );
    assert_eq!(
        events[2],
        EffectEvent::RoundEnded {
            player: PlayerId::new(0),
            discarded: vec![Tile::new(TileKind::Funeral)]
        }
    );
    assert_eq!(
        events[3],
        EffectEvent::RoundEnded {
            player: PlayerId::new(1),
            discarded: Vec::new()
        }
    );
    assert_eq!(game.effect().disasters_added().count(), 1);
}

/// A driver can reset its hook between rounds.
#[test]
fn test_effect_log_cleared_between_rounds() {
    init_logging();
    let mut kinds = vec![TileKind::War];
    kinds.extend([TileKind::Ra; 6]);
    kinds.push(TileKind::Temple);
    let mut game = Game::with_effect(&setup(2), stacked(&kinds), EffectLog::new()).unwrap();

    game.draw_tile().unwrap();
    game.player_takes(PlayerId::new(1)).unwrap();
    for _ in 0..6 {
        game.draw_tile().unwrap();
    }
    assert_eq!(game.effect().events().len(), 3);

    game.effect_mut().clear();
    game.draw_tile().unwrap();
    game.player_takes(PlayerId::new(0)).unwrap();

    assert_eq!(
        game.effect().events(),
        &[EffectEvent::TileAdded {
            player: PlayerId::new(0),
            tile: Tile::new(TileKind::Temple)
        }]
    );
    assert_eq!(game.effect().disasters_added().count(), 0);
}

/// Tile categories drawn over a seeded game add up to the whole bag.
#[test]
fn test_drawn_categories_cover_bag() {
    use ra_engine::TileCategory;

    init_logging();
    let mut game = Game::from_setup(&setup(3).with_seed(31)).unwrap();
    let mut monuments = 0;
    let mut disasters = 0;
    let mut ra = 0;

    while let Ok(outcome) = game.draw_tile() {
        match outcome.tile.kind().category() {
            TileCategory::Monument => monuments += 1,
            TileCategory::Disaster => disasters += 1,
            TileCategory::Ra => {
                assert_eq!(outcome.track, Track::Ra);
                ra += 1;
            }
            _ => assert_eq!(outcome.track, Track::Chest),
        }
    }

    assert_eq!(monuments, 40);
    assert_eq!(disasters, 10);
    assert_eq!(ra, 30);
}
