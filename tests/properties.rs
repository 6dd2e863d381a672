use glam::Vec2;
use p0ng::Settings;
use p0ng::sim::{Axis, GameMode, GameState, PaddleIntent, TickInput, tick};
use proptest::prelude::*;

fn playing() -> GameState {
    let mut state = GameState::new(&Settings::default());
    state.confirm();
    state
}

fn intent() -> impl Strategy<Value = PaddleIntent> {
    (any::<bool>(), any::<bool>()).prop_map(|(up, down)| PaddleIntent { up, down })
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    (intent(), intent()).prop_map(|(a, b)| TickInput { paddles: [a, b] })
}

fn nonzero_speed() -> impl Strategy<Value = f32> {
    prop_oneof![-400.0f32..-1.0, 1.0f32..400.0]
}

proptest! {
    #[test]
    fn idle_paddles_never_move(dts in prop::collection::vec(0.0f32..2.0, 1..50)) {
        let mut state = playing();
        let start = state.paddles.clone();
        for dt in dts {
            tick(&mut state, &TickInput::default(), dt);
        }
        prop_assert_eq!(state.paddles, start);
    }

    #[test]
    fn collisions_flip_exactly_one_axis(
        x in -100.0f32..900.0,
        y in -100.0f32..700.0,
        vx in nonzero_speed(),
        vy in nonzero_speed(),
        dt in 0.0f32..0.1,
    ) {
        let mut state = playing();
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(vx, vy);

        let hit = tick(&mut state, &TickInput::default(), dt);
        let vel = state.ball.vel;
        prop_assert_eq!(vel.x.abs(), vx.abs());
        prop_assert_eq!(vel.y.abs(), vy.abs());

        match hit.map(|c| c.axis()) {
            Some(Axis::X) => prop_assert_eq!(vel, Vec2::new(-vx, vy)),
            Some(Axis::Y) => prop_assert_eq!(vel, Vec2::new(vx, -vy)),
            None => prop_assert_eq!(vel, Vec2::new(vx, vy)),
        }
    }

    #[test]
    fn multiplier_counts_collisions(
        steps in prop::collection::vec((tick_input(), 0.0f32..0.2), 1..200),
    ) {
        let mut state = playing();
        let mut hits = 0u32;
        let mut last = state.multiplier;

        for (input, dt) in &steps {
            if tick(&mut state, input, *dt).is_some() {
                hits += 1;
            }
            prop_assert!(state.multiplier >= last);
            last = state.multiplier;
        }
        prop_assert_eq!(state.multiplier, 1.0 + hits as f32 * 0.0625);
    }

    #[test]
    fn nothing_moves_unless_playing(
        paused in any::<bool>(),
        input in tick_input(),
        dt in 0.0f32..100.0,
    ) {
        let mut state = GameState::new(&Settings::default());
        if paused {
            state.confirm();
            state.confirm();
        }
        let before = state.clone();

        prop_assert_eq!(tick(&mut state, &input, dt), None);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn confirm_cycles_deterministically(presses in 0usize..20) {
        let mut state = GameState::new(&Settings::default());
        for _ in 0..presses {
            state.confirm();
        }

        let expected = match presses {
            0 => GameMode::Menu,
            n if n % 2 == 1 => GameMode::Playing,
            _ => GameMode::Paused,
        };
        prop_assert_eq!(state.mode, expected);

        let size = if presses == 0 { Vec2::ZERO } else { Vec2::splat(25.0) };
        prop_assert_eq!(state.ball.size, size);
    }
}
