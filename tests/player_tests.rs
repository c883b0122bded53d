#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::f32::consts::{FRAC_PI_4, TAU};

use forage::simulation::bounds::{BoundingBox, vec3};
use forage::simulation::collidable::Collidable;
use forage::simulation::food::FoodItem;
use forage::simulation::input::Controls;
use forage::simulation::params::Params;
use forage::simulation::player::{
    HUNGER_INTERVAL, INITIAL_FOOD, MAX_FOOD, Player, StatusFlag, StatusFlags,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_test_params() -> Params {
    Params {
        player_width: 1.0,
        player_height: 1.0,
        base_speed: 4.0,
        turn_speed: 1.0,
        ..Params::default()
    }
}

fn create_test_player() -> Player {
    Player::new(vec3(0.0, 0.0, 0.0), &create_test_params())
}

#[test]
fn test_player_creation() {
    let player = create_test_player();
    assert_eq!(player.food, INITIAL_FOOD);
    assert_eq!(player.status, StatusFlags::default());
    assert_eq!(player.angle, 0.0);
    assert_eq!(player.pos, player.last_valid);
    assert_eq!(player.extents(), vec3(1.0, 1.0, 1.0));
}

#[test]
fn test_overeating_makes_sick() {
    let mut player = create_test_player();

    for _ in 0..3 {
        player.add_food(15);
    }
    assert_eq!(player.food, 145);
    assert!(!player.status.starving);
    assert!(!player.status.sick);

    player.add_food(15);
    assert_eq!(player.food, 160);
    assert!(player.food > MAX_FOOD);
    assert!(player.status.sick);
}

#[test]
fn test_starving_threshold() {
    let mut player = create_test_player();
    player.food = 24;
    player.refresh_status();
    assert!(player.status.starving);

    player.add_food(5);
    assert_eq!(player.food, 29);
    assert!(!player.status.starving);
}

#[test]
fn test_starving_hysteresis_at_threshold() {
    let mut player = create_test_player();

    // exactly at the threshold the flag keeps its previous value
    player.food = 25;
    player.refresh_status();
    assert!(!player.status.starving);

    player.food = 20;
    player.refresh_status();
    assert!(player.status.starving);

    player.food = 25;
    player.refresh_status();
    assert!(player.status.starving);

    player.food = 26;
    player.refresh_status();
    assert!(!player.status.starving);
}

#[test]
fn test_hunger_clock_needs_full_interval() {
    let mut player = create_test_player();

    player.tick_hunger(HUNGER_INTERVAL * 0.5);
    assert_eq!(player.food, INITIAL_FOOD);

    player.tick_hunger(HUNGER_INTERVAL * 0.6);
    assert_eq!(player.food, INITIAL_FOOD - 1);
}

#[test]
fn test_hunger_clock_catches_up() {
    let mut player = create_test_player();

    // a single long frame drains every interval it covers
    player.tick_hunger(3.9);
    assert_eq!(player.food, INITIAL_FOOD - 3);
    assert!((player.hunger_clock() - 0.15).abs() < 1e-4);
}

#[test]
fn test_hunger_triggers_starving() {
    let mut player = create_test_player();
    player.food = 25;

    player.tick_hunger(1.3);
    assert_eq!(player.food, 24);
    assert!(player.status.starving);
}

#[test]
fn test_food_floors_at_zero() {
    let mut player = create_test_player();
    player.food = 2;

    player.tick_hunger(30.0);
    assert_eq!(player.food, 0);
    assert!(player.status.starving);
}

#[test]
fn test_status_speed_modifiers_stack() {
    let params = create_test_params();
    let mut player = create_test_player();
    assert_eq!(player.forward_speed(&params), 4.0);

    player.status.starving = true;
    assert!((player.forward_speed(&params) - 2.4).abs() < 1e-5);

    player.status.sick = true;
    assert!((player.forward_speed(&params) - 1.2).abs() < 1e-5);

    player.status.too_cold = true;
    player.status.too_hot = true;
    assert!((player.forward_speed(&params) - 4.0 * 0.6 * 0.5 * 0.75 * 0.8).abs() < 1e-5);

    // thirsty is reserved and does not slow the player
    player.status.thirsty = true;
    assert!((player.forward_speed(&params) - 4.0 * 0.6 * 0.5 * 0.75 * 0.8).abs() < 1e-5);
}

#[test]
fn test_backward_speed_ignores_status() {
    let params = create_test_params();
    let mut player = create_test_player();
    player.status.sick = true;
    player.status.starving = true;

    player.steer(
        &Controls {
            backward: true,
            ..Controls::default()
        },
        &params,
        1.0,
    );

    // 0.25 of the unmodified base speed
    assert!((player.pos[0] + 1.0).abs() < 1e-5);
    assert!(player.pos[2].abs() < 1e-5);
}

#[test]
fn test_forward_moves_along_facing() {
    let params = create_test_params();
    let mut player = create_test_player();
    player.angle = std::f32::consts::FRAC_PI_2;

    player.steer(&Controls::walking(), &params, 0.5);

    assert!(player.pos[0].abs() < 1e-5);
    assert!((player.pos[2] - 2.0).abs() < 1e-5);
    // not committed yet
    assert_eq!(player.last_valid, vec3(0.0, 0.0, 0.0));

    player.commit_move();
    assert_eq!(player.last_valid, player.pos);
}

#[test]
fn test_idle_does_not_move() {
    let params = create_test_params();
    let mut player = create_test_player();

    player.steer(&Controls::idle(), &params, 1.0);
    assert_eq!(player.pos, vec3(0.0, 0.0, 0.0));
}

#[test]
fn test_turning_wraps_angle() {
    let params = create_test_params();
    let mut player = create_test_player();

    player.steer(
        &Controls {
            turn_left: true,
            ..Controls::default()
        },
        &params,
        0.5,
    );
    assert!(player.angle >= 0.0 && player.angle < TAU);
    assert!((player.angle - (TAU - 0.5)).abs() < 1e-5);

    player.steer(
        &Controls {
            turn_right: true,
            ..Controls::default()
        },
        &params,
        1.0,
    );
    assert!((player.angle - 0.5).abs() < 1e-4);
}

#[test]
fn test_player_slides_along_wall() {
    let params = create_test_params();
    let mut player = create_test_player();
    player.angle = FRAC_PI_4;
    let wall = BoundingBox::new(&vec3(1.5, 0.0, -10.0), &vec3(1.0, 2.0, 20.0));

    player.steer(&Controls::walking(), &params, 0.25);
    assert!(player.resolve_against(&wall));

    assert_eq!(player.pos[0], 0.0);
    assert!(player.pos[2] > 0.5);
    assert!(!player.bounds().overlaps(&wall));
}

#[test]
fn test_resolve_without_contact_is_noop() {
    let params = create_test_params();
    let mut player = create_test_player();
    let far = BoundingBox::new(&vec3(20.0, 0.0, 20.0), &vec3(1.0, 1.0, 1.0));

    player.steer(&Controls::walking(), &params, 0.25);
    let proposed = player.pos.clone();
    assert!(!player.resolve_against(&far));
    assert_eq!(player.pos, proposed);
}

#[test]
fn test_clamp_to_world() {
    let mut player = create_test_player();
    player.pos = vec3(12.0, 0.0, -12.0);

    player.clamp_to(10.0);
    assert_eq!(player.pos, vec3(9.0, 0.0, -10.0));
}

#[test]
fn test_revert_move() {
    let params = create_test_params();
    let mut player = create_test_player();

    player.steer(&Controls::walking(), &params, 1.0);
    player.revert_move();
    assert_eq!(player.pos, player.last_valid);
}

#[test]
fn test_eating_fresh_food() {
    let mut player = create_test_player();
    let mut rng = StdRng::seed_from_u64(7);
    let item = FoodItem::new(vec3(0.0, 0.0, 0.0));

    let sickened = player.eat(&item, 1.0, &mut rng);
    assert!(!sickened);
    assert_eq!(player.food, INITIAL_FOOD + 15);
    assert!(!player.status.sick);
}

#[test]
fn test_eating_decaying_food() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut item = FoodItem::new(vec3(0.0, 0.0, 0.0));
    for _ in 0..11 {
        item.update(1);
    }
    assert!(item.decaying());

    let mut lucky = create_test_player();
    assert!(!lucky.eat(&item, 0.0, &mut rng));
    assert_eq!(lucky.food, INITIAL_FOOD + 8);
    assert!(!lucky.status.sick);

    let mut unlucky = create_test_player();
    assert!(unlucky.eat(&item, 1.0, &mut rng));
    assert!(unlucky.status.sick);

    // already sick players are not reported again
    assert!(!unlucky.eat(&item, 1.0, &mut rng));
}

#[test]
fn test_sickness_roll_rate() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut item = FoodItem::new(vec3(0.0, 0.0, 0.0));
    for _ in 0..12 {
        item.update(1);
    }

    let trials = 4000;
    let sick = (0..trials)
        .filter(|_| {
            let mut player = create_test_player();
            player.eat(&item, 1.0 / 8.0, &mut rng)
        })
        .count();

    // expected 500
    assert!(sick > 400 && sick < 600, "sick count {sick}");
}

#[test]
fn test_sickness_never_clears() {
    let mut player = create_test_player();
    player.status.sick = true;

    player.add_food(5);
    player.tick_hunger(10.0);
    player.refresh_status();
    assert!(player.status.sick);
}

#[test]
fn test_status_changes() {
    let before = StatusFlags::default();
    let after = StatusFlags {
        starving: true,
        sick: true,
        ..StatusFlags::default()
    };

    let changes = before.changes_to(&after);
    assert_eq!(
        changes,
        vec![(StatusFlag::Starving, true), (StatusFlag::Sick, true)]
    );
    assert!(after.changes_to(&after).is_empty());
}

#[test]
fn test_camera_follows_facing() {
    let params = create_test_params();
    let mut player = create_test_player();
    player.angle = std::f32::consts::FRAC_PI_2;

    let mut eye = vec3(0.0, 0.0, 0.0);
    let mut target = vec3(0.0, 0.0, 0.0);
    player.update_camera(&mut eye, &mut target, params.eye_height);

    assert_eq!(eye[1], params.eye_height);
    assert!((eye[0] - 0.5).abs() < 1e-5);
    let look = &target - &eye;
    assert!(look[0].abs() < 1e-5);
    assert!((look[2] - 1.0).abs() < 1e-5);
}
