//! Drag-paintable availability grid.
//!
//! Pointer press on a cell begins a drag (toggling that cell), hovering
//! further cells extends the drag rectangle, and releasing the pointer
//! anywhere ends it (the release itself is observed at the app level,
//! since a drag can end outside the grid).

use egui::{Align2, Color32, CursorIcon, FontId, Rounding, Sense, Stroke, Vec2};

use crate::models::cell::CellId;
use crate::services::aggregation::cell_fill;
use crate::services::grid::Grid;
use crate::services::projection::tooltip_detail;
use crate::services::session::GuestSession;
use crate::utils::date::{format_date_label, format_hour_label};

use super::color::fill_to_color32;

const CELL_SIZE: Vec2 = Vec2::new(60.0, 32.0);
const TIME_GUTTER_WIDTH: f32 = 100.0;
const CELL_GAP: f32 = 4.0;

// Tailwind-ish greens matching the web styling of the grid.
const MINE_FILL: Color32 = Color32::from_rgb(74, 222, 128);
const MINE_BORDER: Color32 = Color32::from_rgb(34, 197, 94);
const VOTED_BORDER: Color32 = Color32::from_rgb(134, 239, 172);
const EMPTY_BORDER: Color32 = Color32::from_rgb(209, 213, 219);
const HOVER_FILL: Color32 = Color32::from_rgb(240, 253, 244);

/// Render the full grid: date headers, hour gutter, and one interactive
/// cell per (date, hour) pair.
pub fn render_availability_grid(
    ui: &mut egui::Ui,
    grid: &Grid,
    session: &mut GuestSession,
    status: &mut Option<String>,
) {
    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(CELL_GAP);

        ui.horizontal(|ui| {
            ui.allocate_exact_size(Vec2::new(TIME_GUTTER_WIDTH, CELL_SIZE.y), Sense::hover());
            for &date in grid.dates() {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(CELL_SIZE.x, CELL_SIZE.y), Sense::hover());
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    format_date_label(date),
                    FontId::proportional(10.0),
                    ui.visuals().strong_text_color(),
                );
            }
        });

        for (time_index, &hour) in grid.hours().iter().enumerate() {
            ui.horizontal(|ui| {
                let (rect, _) = ui
                    .allocate_exact_size(Vec2::new(TIME_GUTTER_WIDTH, CELL_SIZE.y), Sense::hover());
                ui.painter().text(
                    rect.right_center(),
                    Align2::RIGHT_CENTER,
                    format_hour_label(hour),
                    FontId::proportional(10.0),
                    ui.visuals().weak_text_color(),
                );

                for date_index in 0..grid.date_count() {
                    render_cell(ui, CellId::new(date_index, time_index), session, status);
                }
            });
        }
    });
}

fn render_cell(
    ui: &mut egui::Ui,
    cell: CellId,
    session: &mut GuestSession,
    status: &mut Option<String>,
) {
    let (rect, response) = ui.allocate_exact_size(CELL_SIZE, Sense::hover());

    let pointer_over = ui.rect_contains_pointer(rect);
    let pressed = ui.input(|input| input.pointer.primary_pressed());

    if pointer_over && pressed {
        if let Err(err) = session.begin_drag(cell) {
            *status = Some(err.to_string());
        }
    } else if pointer_over && session.selection().is_dragging() {
        session.extend_drag(cell);
    }

    let is_mine = session.selection().is_selected(cell);
    let confirmed = session.confirmed_name().is_some();
    let store = session.store();

    if is_mine {
        ui.painter()
            .rect(rect, Rounding::ZERO, MINE_FILL, Stroke::new(1.0, MINE_BORDER));
    } else if let Some(fill) = cell_fill(cell, store) {
        ui.painter().rect(
            rect,
            Rounding::ZERO,
            fill_to_color32(&fill),
            Stroke::new(1.0, VOTED_BORDER),
        );
    } else {
        let background = if pointer_over && confirmed {
            HOVER_FILL
        } else {
            ui.visuals().extreme_bg_color
        };
        ui.painter()
            .rect(rect, Rounding::ZERO, background, Stroke::new(1.0, EMPTY_BORDER));
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(if confirmed {
            CursorIcon::PointingHand
        } else {
            CursorIcon::NotAllowed
        });
    }

    if let Some(detail) = tooltip_detail(cell, store) {
        response.on_hover_ui(|ui| {
            ui.label(
                egui::RichText::new(format!("Available ({}):", detail.available_count()))
                    .strong()
                    .color(MINE_BORDER),
            );
            for name in &detail.available {
                ui.label(format!("✔ {name}"));
            }
            if detail.unavailable_count() > 0 {
                ui.label(
                    egui::RichText::new(format!("Not Available ({}):", detail.unavailable_count()))
                        .weak(),
                );
                for name in &detail.unavailable {
                    ui.label(egui::RichText::new(name).weak());
                }
            }
        });
    }
}
