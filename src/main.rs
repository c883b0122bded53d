use forage::simulation::input::Controls;
use forage::simulation::params::Params;
use forage::simulation::world::World;
use macroquad::prelude::*;
use ndarray::Array1;
use tracing_subscriber::EnvFilter;

mod graphics;
mod ui;

use graphics::ToWorld;

/// Loads parameters from the path given as first argument, if any.
fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };

    match Params::from_file(&path) {
        Ok(params) => {
            tracing::info!(%path, "loaded params");
            params
        }
        Err(err) => {
            tracing::warn!(%path, %err, "could not load params, using defaults");
            Params::default()
        }
    }
}

fn poll_controls() -> Controls {
    Controls {
        forward: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        backward: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        turn_left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        turn_right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
    }
}

#[macroquad::main("Forage")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let params = load_params();
    let seed = params.seed.unwrap_or_else(::rand::random);
    let mut world = match World::new(&params, seed) {
        Ok(world) => world,
        Err(err) => {
            tracing::error!(%err, "could not generate world");
            return;
        }
    };

    let mut ui_state = ui::UIState::new();
    let mut paused = false;

    let mut eye: Array1<f32> = Array1::zeros(3);
    let mut target: Array1<f32> = Array1::zeros(3);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            paused = !paused;
        }

        if !paused {
            let dt = get_frame_time();
            world.step(&poll_controls(), &params, dt);
        }

        world
            .player
            .update_camera(&mut eye, &mut target, params.eye_height);

        clear_background(SKYBLUE);

        set_camera(&Camera3D {
            position: eye.to_world(),
            target: target.to_world(),
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        });
        graphics::draw_world(&world, &params);

        set_default_camera();
        ui_state.update_history(&world);
        ui::draw_ui(&ui_state, &world, paused);
        ui::process_egui();

        next_frame().await
    }
}
