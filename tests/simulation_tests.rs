mod common;

use cgmath::vec2;
use common::Script;
use gopher_swarm::simulation::step;
use gopher_swarm::{Config, Gopher, Gophers, SeededRandom, PALETTE};

fn swarm_of(gopher: Gopher) -> Gophers {
    let mut gophers = Gophers::new();
    gophers.push(gopher);
    gophers
}

fn only(gophers: &Gophers) -> Gopher {
    *gophers.get(0).expect("one gopher")
}

#[test]
fn free_flight_adds_gravity_then_integrates() {
    let config = Config::default();
    let before = Gopher::new(vec2(100.0, 100.0), vec2(1.5, -2.0), PALETTE[0]);
    let mut gophers = swarm_of(before);
    let mut rng = Script::new(&[]);

    step(&mut gophers, &config, &mut rng);

    let after = only(&gophers);
    let vel_y = before.vel.y + config.gravity;
    assert_eq!(after.vel, vec2(before.vel.x, vel_y));
    assert_eq!(after.pos, vec2(before.pos.x + before.vel.x, before.pos.y + vel_y));
    assert_eq!(after.color, before.color);
}

#[test]
fn floor_bounce_damps_without_kick() {
    let config = Config::default();
    let before = Gopher::new(vec2(200.0, 460.0), vec2(0.0, 2.0), PALETTE[1]);
    let mut gophers = swarm_of(before);
    // Coin flip at or below the threshold: no kick
    let mut rng = Script::new(&[0.25]);

    step(&mut gophers, &config, &mut rng);

    let after = only(&gophers);
    assert_eq!(after.vel.y, (2.0 + config.gravity) * config.floor_damping);
    assert_eq!(after.pos.y, 460.0 + (2.0 + config.gravity));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn floor_bounce_kicks_on_heads() {
    let config = Config::default();
    let before = Gopher::new(vec2(200.0, 460.0), vec2(0.0, 2.0), PALETTE[1]);
    let mut gophers = swarm_of(before);
    let mut rng = Script::new(&[0.75, 0.5]);

    step(&mut gophers, &config, &mut rng);

    let mut expected = (2.0 + config.gravity) * config.floor_damping;
    expected -= 0.5 * config.kick_strength;
    assert_eq!(only(&gophers).vel.y, expected);
    assert!(only(&gophers).vel.y < 0.0);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn landing_exactly_on_floor_counts_as_floor() {
    let config = Config::default();
    // Gravity cancels the velocity, so the gopher sits exactly on the floor line
    let before = Gopher::new(vec2(50.0, 451.0), vec2(0.0, -config.gravity), PALETTE[2]);
    let mut gophers = swarm_of(before);
    let mut rng = Script::new(&[0.0]);

    step(&mut gophers, &config, &mut rng);

    let after = only(&gophers);
    assert_eq!(after.pos.y, config.floor());
    assert_eq!(after.vel.y, 0.0);
    // The coin flip was drawn, so the floor branch ran
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn ceiling_bounce_flips_sign() {
    let config = Config::default();
    let before = Gopher::new(vec2(300.0, -10.0), vec2(0.0, -3.0), PALETTE[0]);
    let mut gophers = swarm_of(before);
    // Ceiling bounces never draw from the random source
    let mut rng = Script::new(&[]);

    step(&mut gophers, &config, &mut rng);

    let pre_bounce = before.vel.y + config.gravity;
    assert_eq!(only(&gophers).vel.y, -pre_bounce);
    assert!(only(&gophers).vel.y > 0.0);
}

#[test]
fn right_wall_forces_leftward() {
    let config = Config::default();
    for &vel_x in &[3.0f32, -3.0] {
        let mut gophers = swarm_of(Gopher::new(vec2(620.0, 100.0), vec2(vel_x, 0.0), PALETTE[0]));
        step(&mut gophers, &config, &mut Script::new(&[]));
        assert_eq!(only(&gophers).vel.x, -3.0);
    }
}

#[test]
fn left_wall_forces_rightward() {
    let config = Config::default();
    for &vel_x in &[3.0f32, -3.0] {
        let mut gophers = swarm_of(Gopher::new(vec2(-5.0, 100.0), vec2(vel_x, 0.0), PALETTE[0]));
        step(&mut gophers, &config, &mut Script::new(&[]));
        assert_eq!(only(&gophers).vel.x, 3.0);
    }
}

#[test]
fn corner_handles_both_axes() {
    let config = Config::default();
    let before = Gopher::new(vec2(-20.0, -20.0), vec2(-1.0, -1.0), PALETTE[0]);
    let mut gophers = swarm_of(before);

    step(&mut gophers, &config, &mut Script::new(&[]));

    let after = only(&gophers);
    assert_eq!(after.vel.x, 1.0);
    assert_eq!(after.vel.y, -(before.vel.y + config.gravity));
}

#[test]
fn gophers_are_stepped_in_store_order() {
    let config = Config::default();
    let mut gophers = Gophers::new();
    // Both on the floor; each consumes its own coin flip and kick in turn
    gophers.push(Gopher::new(vec2(10.0, 470.0), vec2(0.0, 0.0), PALETTE[0]));
    gophers.push(Gopher::new(vec2(20.0, 470.0), vec2(0.0, 0.0), PALETTE[1]));
    let mut rng = Script::new(&[0.9, 0.25, 0.1]);

    step(&mut gophers, &config, &mut rng);

    let damped = config.gravity * config.floor_damping;
    assert_eq!(gophers.get(0).map(|g| g.vel.y), Some(damped - 0.25 * config.kick_strength));
    assert_eq!(gophers.get(1).map(|g| g.vel.y), Some(damped));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn seeded_runs_are_deterministic() {
    let config = Config::default();
    let run = || {
        let mut gophers = Gophers::new();
        let mut rng = SeededRandom::from_seed(1234);
        gopher_swarm::spawner::seed(&mut gophers, &config, &mut rng);
        for _ in 0..600 {
            step(&mut gophers, &config, &mut rng);
        }
        gophers
    };

    let first = run();
    let second = run();
    assert_eq!(first.as_slice(), second.as_slice());
}
