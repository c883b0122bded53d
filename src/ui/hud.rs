use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use forage::simulation;
use forage::simulation::player::{MAX_FOOD, StatusFlag};
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub panel_width: f32,
    pub food_level_history: VecDeque<(f64, f64)>,
    pub food_count_history: VecDeque<(f64, f64)>,
    pub shrub_count_history: VecDeque<(f64, f64)>,
    last_update_time: f32,
    update_interval: f32,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            panel_width: 260.0,
            food_level_history: VecDeque::new(),
            food_count_history: VecDeque::new(),
            shrub_count_history: VecDeque::new(),
            last_update_time: 0.0,
            update_interval: 1.0, // Sample once per second of play time
        }
    }

    pub fn update_history(&mut self, world: &simulation::world::World) {
        if world.time - self.last_update_time < self.update_interval {
            return;
        }
        self.last_update_time = world.time;

        let t = world.time as f64;
        push_capped(&mut self.food_level_history, (t, world.player.food as f64));
        push_capped(&mut self.food_count_history, (t, world.food.len() as f64));
        push_capped(&mut self.shrub_count_history, (t, world.plants.len() as f64));
    }
}

fn push_capped(history: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    history.push_back(point);
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &UIState, world: &simulation::world::World, paused: bool) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        draw_status_panel(egui_ctx, state, world, paused);
        super::events::draw_events_panel(egui_ctx, world);
    });
}

fn draw_status_panel(
    egui_ctx: &egui::Context,
    state: &UIState,
    world: &simulation::world::World,
    paused: bool,
) {
    egui::SidePanel::right("status_panel")
        .default_width(state.panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Survival");
            if paused {
                ui.colored_label(egui::Color32::YELLOW, "PAUSED (Esc to resume)");
            }
            ui.separator();

            let player = &world.player;
            ui.label(format!("Food: {}/{}", player.food, MAX_FOOD));
            ui.add(egui::ProgressBar::new(
                (player.food as f32 / MAX_FOOD as f32).clamp(0.0, 1.0),
            ));

            ui.separator();
            for flag in [
                StatusFlag::Starving,
                StatusFlag::Sick,
                StatusFlag::TooCold,
                StatusFlag::TooHot,
                StatusFlag::Thirsty,
            ] {
                let active = player.status.get(flag);
                let color = if active {
                    egui::Color32::from_rgb(255, 100, 100)
                } else {
                    egui::Color32::from_rgb(120, 120, 120)
                };
                ui.colored_label(color, format!("{} {}", if active { "●" } else { "○" }, flag));
            }

            ui.separator();
            ui.label(format!("Time: {:.1}s", world.time));
            ui.label(format!("Shrubs: {}", world.plants.len()));
            ui.label(format!("Food on ground: {}", world.food.len()));
            ui.label(format!("Pending seeds: {}", world.food.seeds().len()));

            ui.collapsing("Totals", |ui| {
                ui.label(format!("Eaten: {}", world.stats.food_collected));
                ui.label(format!("Fruitings: {}", world.stats.fruitings));
                ui.label(format!("Rotted: {}", world.stats.seeds_dropped));
                ui.label(format!("Sprouted: {}", world.stats.germinated));
                ui.label(format!("Withered: {}", world.stats.shrubs_died));
            });

            ui.separator();
            ui.label("Food level");
            draw_history_plot(ui, "food_level_plot", &[(
                "Food",
                &state.food_level_history,
                egui::Color32::from_rgb(255, 200, 100),
            )]);

            ui.label("Population");
            draw_history_plot(ui, "population_plot", &[
                (
                    "Shrubs",
                    &state.shrub_count_history,
                    egui::Color32::from_rgb(100, 200, 100),
                ),
                (
                    "Food items",
                    &state.food_count_history,
                    egui::Color32::from_rgb(255, 120, 120),
                ),
            ]);
        });
}

fn draw_history_plot(
    ui: &mut egui::Ui,
    id: &str,
    series: &[(&str, &VecDeque<(f64, f64)>, egui::Color32)],
) {
    if series.iter().all(|(_, data, _)| data.is_empty()) {
        ui.label("Collecting data...");
        return;
    }

    Plot::new(id)
        .height(120.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| format!("{}\nTime: {:.1}s\nValue: {:.0}", name, value.x, value.y))
        .show(ui, |plot_ui| {
            for (name, data, color) in series {
                if data.is_empty() {
                    continue;
                }
                let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(Line::new(points).color(*color).name(*name));
            }
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
