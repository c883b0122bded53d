use forage::simulation;
use forage::simulation::collidable::Collidable;
use forage::simulation::food::MAX_DECAY;
use forage::simulation::shrub::MAX_AGE;
use macroquad::prelude::*;
use ndarray::Array1;

pub trait ToWorld {
    fn to_world(&self) -> Vec3;
}

impl ToWorld for Array1<f32> {
    fn to_world(&self) -> Vec3 {
        vec3(self[0], self[1], self[2])
    }
}

const GROUND: Color = Color::new(0.25, 0.45, 0.2, 1.0);
const OBSTACLE: Color = Color::new(0.25, 0.25, 0.75, 1.0);
const FRESH_FOOD: Color = Color::new(0.95, 0.2, 0.2, 1.0);
const ROTTEN_FOOD: Color = Color::new(0.4, 0.3, 0.15, 1.0);
const YOUNG_SHRUB: Color = Color::new(0.2, 0.8, 0.25, 1.0);
const OLD_SHRUB: Color = Color::new(0.5, 0.45, 0.2, 1.0);

fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

pub fn draw_ground(params: &simulation::params::Params) {
    let half = params.world_half_size;
    draw_plane(vec3(0.0, 0.0, 0.0), vec2(half, half), None, GROUND);
    draw_grid(20, half * 2.0 / 20.0, DARKGREEN, DARKGREEN);
}

pub fn draw_obstacles(world: &simulation::world::World) {
    world.obstacles.iter().for_each(|obstacle| {
        let center = obstacle.center().to_world();
        let size = obstacle.extents().to_world();
        draw_cube(center, size, None, OBSTACLE);
        draw_cube_wires(center, size, DARKBLUE);
    });
}

pub fn draw_shrubs(world: &simulation::world::World) {
    world.plants.shrubs.iter().for_each(|shrub| {
        let center = shrub.center().to_world();
        let size = shrub.extents().to_world();
        let color = mix(YOUNG_SHRUB, OLD_SHRUB, shrub.age / MAX_AGE);
        draw_cube(center, size, None, color);

        // ripe fruit waiting on the branches
        if shrub.fruit_ready() {
            draw_sphere(center + vec3(0.0, size.y / 2.0, 0.0), 0.2, None, FRESH_FOOD);
        }
    });
}

pub fn draw_food(world: &simulation::world::World) {
    world.food.items.iter().for_each(|item| {
        let center = item.center().to_world();
        let size = item.extents().to_world();
        let color = mix(FRESH_FOOD, ROTTEN_FOOD, item.decay as f32 / MAX_DECAY as f32);
        draw_cube(center, size, None, color);
    });
}

pub fn draw_world(world: &simulation::world::World, params: &simulation::params::Params) {
    draw_ground(params);
    draw_obstacles(world);
    draw_shrubs(world);
    draw_food(world);
}
