//! Sidebar panels: participants, chat, and polls.
//!
//! All three read the confirmed name and the participant list from the
//! session; none of them can write into the availability store.

use egui::{Color32, RichText};

use crate::services::availability::AvailabilityStore;
use crate::services::chat::ChatLog;
use crate::services::polls::{PollBoard, MAX_OPTIONS, MIN_OPTIONS};
use crate::utils::date::format_clock_label;

const ACCENT: Color32 = Color32::from_rgb(34, 197, 94);

/// Participant list with per-guest slot counts.
pub fn render_participants(ui: &mut egui::Ui, store: &AvailabilityStore) {
    ui.heading(format!("Participants ({})", store.len()));
    ui.add_space(4.0);

    if store.is_empty() {
        ui.label(RichText::new("No one has submitted their availability yet.").weak());
        return;
    }

    for participant in store.list_all() {
        ui.horizontal(|ui| {
            ui.label(RichText::new("●").color(ACCENT));
            ui.vertical(|ui| {
                ui.label(RichText::new(&participant.name).strong());
                ui.label(
                    RichText::new(format!("{} time slots selected", participant.slot_count()))
                        .weak()
                        .small(),
                );
            });
        });
    }
}

/// Chat panel. Unavailable until a name is confirmed.
pub fn render_chat(
    ui: &mut egui::Ui,
    chat: &mut ChatLog,
    confirmed_name: Option<&str>,
    input: &mut String,
) {
    ui.heading("Chat");
    ui.add_space(4.0);

    let Some(sender) = confirmed_name else {
        ui.label(RichText::new("Please confirm your name to join the chat").weak());
        return;
    };

    egui::ScrollArea::vertical()
        .id_source("chat_messages")
        .max_height(180.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if chat.is_empty() {
                ui.label(RichText::new("No messages yet. Start the conversation!").weak());
            }
            for message in chat.messages() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&message.sender).strong().small());
                    ui.label(
                        RichText::new(format_clock_label(message.timestamp))
                            .weak()
                            .small(),
                    );
                });
                ui.label(&message.content);
                ui.add_space(4.0);
            }
        });

    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(input)
                .hint_text("Type a message...")
                .desired_width(180.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let send = ui
            .add_enabled(!input.trim().is_empty(), egui::Button::new("Send"))
            .clicked();

        if (send || submitted) && chat.post(sender, input).is_ok() {
            input.clear();
            edit.request_focus();
        }
    });
}

/// Polls panel: existing polls with vote buttons, plus a create form.
pub fn render_polls(
    ui: &mut egui::Ui,
    polls: &mut PollBoard,
    confirmed_name: Option<&str>,
    question: &mut String,
    options: &mut Vec<String>,
    creating: &mut bool,
    status: &mut Option<String>,
) {
    ui.heading("Polls");
    ui.add_space(4.0);

    let Some(voter) = confirmed_name else {
        ui.label(RichText::new("Please confirm your name to vote in polls").weak());
        return;
    };

    if polls.polls().is_empty() && !*creating {
        ui.label(RichText::new("No polls yet.").weak());
    }

    // Votes are applied after the loop; the list is borrowed while drawn.
    let mut pending_vote = None;
    for poll in polls.polls() {
        ui.group(|ui| {
            ui.label(RichText::new(&poll.question).strong());
            ui.label(RichText::new(format!("by {}", poll.creator)).weak().small());

            let total = poll.total_votes().max(1);
            let my_vote = poll.vote_of(voter).map(|option| option.id);
            for option in &poll.options {
                let chosen = my_vote == Some(option.id);
                ui.horizontal(|ui| {
                    let label = if chosen {
                        format!("✔ {}", option.text)
                    } else {
                        option.text.clone()
                    };
                    if ui.selectable_label(chosen, label).clicked() {
                        pending_vote = Some((poll.id, option.id));
                    }
                    ui.label(RichText::new(format!("{}", option.vote_count())).weak());
                });
                ui.add(
                    egui::ProgressBar::new(option.vote_count() as f32 / total as f32)
                        .desired_width(200.0),
                );
            }
        });
        ui.add_space(4.0);
    }
    if let Some((poll_id, option_id)) = pending_vote {
        if let Err(err) = polls.vote(poll_id, option_id, voter) {
            *status = Some(err.to_string());
        }
    }

    if *creating {
        ui.group(|ui| {
            ui.label(RichText::new("New Poll").strong());
            ui.add(egui::TextEdit::singleline(question).hint_text("Question"));

            let mut remove_at = None;
            for (index, option) in options.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(option)
                            .hint_text(format!("Option {}", index + 1))
                            .desired_width(160.0),
                    );
                    if ui.small_button("✕").clicked() {
                        remove_at = Some(index);
                    }
                });
            }
            if let Some(index) = remove_at {
                if options.len() > MIN_OPTIONS {
                    options.remove(index);
                }
            }

            ui.horizontal(|ui| {
                if options.len() < MAX_OPTIONS && ui.button("Add option").clicked() {
                    options.push(String::new());
                }
                if ui.button("Create").clicked() {
                    match polls.create(voter, question, options) {
                        Ok(_) => {
                            question.clear();
                            *options = vec![String::new(); MIN_OPTIONS];
                            *creating = false;
                        }
                        Err(err) => *status = Some(err.to_string()),
                    }
                }
                if ui.button("Cancel").clicked() {
                    question.clear();
                    *options = vec![String::new(); MIN_OPTIONS];
                    *creating = false;
                }
            });
        });
    } else if ui.button("➕ Create Poll").clicked() {
        *creating = true;
    }
}
