use egui_macroquad::egui;
use egui_macroquad::egui::Color32;
use forage::simulation::event_log::{EventColor, LoggedEvent};
use forage::simulation::world::World;

const LOG_WIDTH: f32 = 300.0;
const LOG_HEIGHT: f32 = 220.0;
const MARGIN: f32 = 10.0;

fn tint(color: EventColor) -> Color32 {
    match color {
        EventColor::Food => Color32::from_rgb(255, 200, 100),
        EventColor::Growth => Color32::from_rgb(110, 230, 110),
        EventColor::Decay => Color32::from_rgb(190, 150, 90),
        EventColor::Death => Color32::from_rgb(150, 150, 150),
        EventColor::Status => Color32::from_rgb(255, 100, 100),
    }
}

fn entry_row(ui: &mut egui::Ui, entry: &LoggedEvent) {
    ui.horizontal(|ui| {
        ui.monospace(
            egui::RichText::new(format!("{:>6.1}s", entry.time))
                .color(Color32::from_rgb(170, 170, 190))
                .size(11.0),
        );
        ui.label(
            egui::RichText::new(&entry.description)
                .color(tint(entry.color))
                .size(11.0),
        );
    });
}

/// Survival log in the bottom-left corner, newest entry on top.
pub fn draw_events_panel(egui_ctx: &egui::Context, world: &World) {
    let bottom = egui_ctx.screen_rect().height();

    egui::Window::new("Survival log")
        .title_bar(false)
        .fixed_pos(egui::pos2(MARGIN, bottom - LOG_HEIGHT - MARGIN))
        .fixed_size(egui::vec2(LOG_WIDTH, LOG_HEIGHT))
        .frame(egui::Frame::window(&egui_ctx.style()).fill(Color32::from_black_alpha(170)))
        .show(egui_ctx, |ui| {
            let entries = world.event_log.events();
            if entries.is_empty() {
                ui.weak("Quiet so far.");
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in entries {
                    entry_row(ui, entry);
                }
            });
        });
}
