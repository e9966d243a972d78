//! End-to-end sessions driven through the headless surface

use fisching::platform::{HeadlessSurface, InputEvent, MouseButton};
use fisching::sim::{Encounter, Fish, GamePhase, MotionKind, Rod, fish_catalog, rod_catalog};
use fisching::{GameLoop, GameMode, Outcome, Settings};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DT: f32 = 1.0 / 60.0;

#[test]
fn test_quit_on_first_frame_leaves_state_untouched() {
    let settings = Settings::default();
    let encounter = Encounter::catch(Fish::default(), Rod::default());
    let mut game = GameLoop::new(settings, encounter, 77).unwrap();
    let before = game.state().clone();

    let mut surface = HeadlessSurface::with_script(DT, vec![vec![InputEvent::Quit]]);
    let outcome = game.run(&mut surface);

    assert_eq!(outcome, Outcome::Quit { elapsed: 0.0 });
    let after = game.state();
    assert_eq!(after.player, before.player);
    assert_eq!(after.fish, before.fish);
    assert_eq!(after.progress, before.progress);
    assert_eq!(after.motion, before.motion);
    assert_eq!(after.rng, before.rng);
    assert_eq!(after.frames, 0);
    assert_eq!(surface.presented, 0);
}

#[test]
fn test_continuous_contact_catches_after_threshold() {
    // A rod wide enough to cover the whole track keeps contact every frame
    let fish = Fish::new("Bluegill", 0.5, 0.0, Default::default());
    let mut game = GameLoop::new(
        Settings::default(),
        Encounter::catch(fish, Rod::new("Net", 10.0)),
        3,
    )
    .unwrap();
    let mut surface = HeadlessSurface::new(DT);

    let outcome = game.run(&mut surface);

    match outcome {
        Outcome::Caught { fish, elapsed } => {
            assert_eq!(fish, "Bluegill");
            assert!(elapsed >= 6.0);
            assert!(elapsed < 6.1);
        }
        other => panic!("expected a catch, got {:?}", other),
    }
    assert_eq!(game.state().phase, GamePhase::Caught);
    assert!(surface.last_texts[0].starts_with("Caught"));
}

#[test]
fn test_idle_catch_session_keeps_invariants() {
    let settings = Settings::default();
    let track = settings.track_rect();
    let fish = fish_catalog().pop().unwrap();
    let rod = rod_catalog().remove(0);
    let mut game = GameLoop::new(settings, Encounter::catch(fish, rod), 2024).unwrap();

    // Alternate holding and releasing every half second, then close the window
    let mut script = Vec::new();
    for i in 0..1_200 {
        let mut frame = Vec::new();
        if i % 60 == 0 {
            frame.push(InputEvent::MouseDown(MouseButton::Left));
        } else if i % 60 == 30 {
            frame.push(InputEvent::MouseUp(MouseButton::Left));
        }
        script.push(frame);
    }
    script.push(vec![InputEvent::Quit]);
    let mut surface = HeadlessSurface::with_script(DT, script);

    while let fisching::FrameStatus::Running = game.frame(&mut surface, DT) {
        let state = game.state();
        let bar = state.player_rect();
        let fish = state.fish_rect();
        assert!(bar.left() >= track.left() && bar.right() <= track.right() + 1e-3);
        assert!(fish.left() >= track.left() && fish.right() <= track.right() + 1e-3);
        let meter = state.progress.as_ref().unwrap();
        assert!(meter.value >= 0.0 && meter.value <= meter.threshold);
    }
}

#[test]
fn test_free_roam_runs_until_quit() {
    let mut script = vec![vec![InputEvent::MouseDown(MouseButton::Left)]];
    script.extend(std::iter::repeat_with(Vec::new).take(599));
    script.push(vec![InputEvent::Quit]);
    let mut surface = HeadlessSurface::with_script(DT, script);
    let mut game = GameLoop::new(Settings::default(), Encounter::free_roam(), 9).unwrap();

    let outcome = game.run(&mut surface);

    assert!(matches!(outcome, Outcome::Quit { .. }));
    // Ten seconds of holding pins the bar to the right edge
    let track = game.settings().track_rect();
    assert_eq!(game.state().player_rect().right(), track.right());
}

/// Builds a session the way the binary does: mode from settings, encounter from the seed
fn session_for(settings: Settings, seed: u64) -> GameLoop {
    let mut rng = Pcg32::seed_from_u64(seed);
    let encounter = Encounter::for_mode(settings.mode, &mut rng);
    GameLoop::new(settings, encounter, seed).unwrap()
}

#[test]
fn test_settings_mode_selects_encounter() {
    let free_roam = session_for(
        Settings {
            mode: GameMode::FreeRoam,
            ..Default::default()
        },
        11,
    );
    let state = free_roam.state();
    assert!(state.progress.is_none());
    assert!(state.encounter.rod.is_none());
    assert_eq!(state.motion.kind(), MotionKind::Bounce);

    let catch = session_for(
        Settings {
            mode: GameMode::Catch,
            ..Default::default()
        },
        11,
    );
    let state = catch.state();
    assert!(state.progress.is_some());
    assert!(rod_catalog().contains(state.encounter.rod.as_ref().unwrap()));
    assert_eq!(state.motion.kind(), MotionKind::DampedWalk);
}

#[test]
fn test_free_roam_mode_never_finishes_on_its_own() {
    let settings = Settings {
        mode: GameMode::FreeRoam,
        ..Default::default()
    };
    let mut game = session_for(settings, 5);
    let mut surface = HeadlessSurface::with_script(DT, vec![Vec::new(); 900]);

    for _ in 0..900 {
        assert_eq!(game.frame(&mut surface, DT), fisching::FrameStatus::Running);
    }
    assert_eq!(game.state().phase, GamePhase::Playing);
}

#[test]
fn test_inverted_speed_range_is_rejected() {
    let settings = Settings {
        fish_speed_min: 300.0,
        fish_speed_max: 10.0,
        ..Default::default()
    };
    assert!(GameLoop::new(settings, Encounter::free_roam(), 1).is_err());
}
