//! Top-level eframe application.
//!
//! Owns the event metadata, the materialized grid, the guest session,
//! and the chat/polls collaborators, and lays them out the way the web
//! page does: availability on the left, participants/chat/polls on the
//! right.

use egui::RichText;

use crate::models::event_details::EventDetails;
use crate::services::chat::ChatLog;
use crate::services::grid::Grid;
use crate::services::polls::{PollBoard, MIN_OPTIONS};
use crate::services::session::GuestSession;
use crate::services::share;

use super::grid_view::render_availability_grid;
use super::panels::{render_chat, render_participants, render_polls};

/// Base used when building a shareable link for the clipboard.
const SHARE_BASE_URL: &str = "https://meetgrid.local";

pub struct MeetGridApp {
    details: EventDetails,
    grid: Grid,
    session: GuestSession,
    chat: ChatLog,
    polls: PollBoard,

    // Form state
    name_input: String,
    chat_input: String,
    poll_question: String,
    poll_options: Vec<String>,
    creating_poll: bool,

    /// Last user-visible prompt (rejected interactions, saves).
    status: Option<String>,
}

impl MeetGridApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, details: EventDetails) -> Self {
        let grid = Grid::build_for_today(&details.window);
        log::info!(
            "grid built: {} dates x {} hour slots",
            grid.date_count(),
            grid.hour_count()
        );

        Self {
            details,
            grid,
            session: GuestSession::new(),
            chat: ChatLog::new(),
            polls: PollBoard::new(),
            name_input: String::new(),
            chat_input: String::new(),
            poll_question: String::new(),
            poll_options: vec![String::new(); MIN_OPTIONS],
            creating_poll: false,
            status: None,
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(&self.details.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Share Event").clicked() {
                    let url = share::event_url(SHARE_BASE_URL, &self.details);
                    ui.ctx().output_mut(|output| output.copied_text = url);
                    self.status = Some("Event link copied to clipboard".to_string());
                }
            });
        });
        if let Some(description) = &self.details.description {
            ui.label(RichText::new(description).weak());
        }
    }

    fn show_name_card(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Your Information").strong());
            ui.add_space(4.0);

            match self.session.confirmed_name().map(str::to_string) {
                None => {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.name_input)
                                .hint_text("Enter your name"),
                        );
                        if ui.button("Confirm Name").clicked() {
                            match self.session.confirm_name(&self.name_input) {
                                Ok(()) => self.status = None,
                                Err(err) => self.status = Some(err.to_string()),
                            }
                        }
                    });
                }
                Some(name) => {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("✔ {name}")).strong());
                        if ui.button("Change").clicked() {
                            self.session.clear_name();
                            self.name_input.clear();
                        }
                    });
                    if ui.button("Save Availability").clicked() {
                        match self.session.submit() {
                            Ok(()) => self.status = Some("Availability saved!".to_string()),
                            Err(err) => self.status = Some(err.to_string()),
                        }
                    }
                }
            }
        });
    }

    fn show_grid_card(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Select Your Availability").strong());
            let hint = if self.session.confirmed_name().is_some() {
                "Click and drag to select your available times"
            } else {
                "Please confirm your name first to select availability"
            };
            ui.label(RichText::new(hint).weak());
            ui.add_space(8.0);

            render_availability_grid(ui, &self.grid, &mut self.session, &mut self.status);
        });
    }
}

impl eframe::App for MeetGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A drag can end anywhere on screen, not only over the grid, so
        // the release is observed here rather than per-cell.
        if ctx.input(|input| input.pointer.any_released()) {
            self.session.end_drag();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_header(ui);
            ui.add_space(4.0);
        });

        egui::SidePanel::right("sidebar")
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_participants(ui, self.session.store());
                    ui.separator();
                    render_chat(
                        ui,
                        &mut self.chat,
                        self.session.confirmed_name(),
                        &mut self.chat_input,
                    );
                    ui.separator();
                    render_polls(
                        ui,
                        &mut self.polls,
                        self.session.confirmed_name(),
                        &mut self.poll_question,
                        &mut self.poll_options,
                        &mut self.creating_poll,
                        &mut self.status,
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(status) = self.status.clone() {
                    ui.label(RichText::new(status).strong());
                    ui.add_space(4.0);
                }
                self.show_name_card(ui);
                ui.add_space(8.0);
                self.show_grid_card(ui);
            });
        });
    }
}
