//! Main application UI and state management.
//! Handles the vocabulary screens, the add-word form and running quizzes.

use chrono::{DateTime, Local};
use eframe::egui;
use rand::rngs::ThreadRng;
use std::time::Duration;
use wordforge_core::config::AppConfig;
use wordforge_core::models::{AnswerOutcome, QuizResults};
use wordforge_core::services::Translator;
use wordforge_core::{QuestionGenerator, QuizMode, QuizSession, VocabularyStore};

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x28, 0xA7, 0x45);
const DANGER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x35, 0x45);

/// Application screen states
#[derive(Default, PartialEq)]
enum AppScreen {
    #[default]
    Main,
    AddWord,
    Quiz,
}

/// Feedback for the last answer, shown until the pause runs out
struct Feedback {
    outcome: AnswerOutcome,
    shown_at: f64,
}

/// Main application state
pub struct WordForgeApp {
    show_confirmation_dialog: bool,
    allowed_to_close: bool,

    config: AppConfig,
    store: VocabularyStore,
    translator: Option<Box<dyn Translator>>,
    generator: QuestionGenerator<ThreadRng>,

    current_screen: AppScreen,

    new_word: String,
    new_translation: String,
    new_transcription: String,

    quiz: Option<QuizSession>,
    answer: String,
    feedback: Option<Feedback>,
    finished_quiz: Option<(QuizResults, DateTime<Local>)>,

    message: Option<(String, String)>,
}

impl eframe::App for WordForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_screen {
            AppScreen::Main => self.render_main_screen(ctx),
            AppScreen::AddWord => self.render_add_word_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if let Some((results, finished_at)) = self.finished_quiz {
            egui::Window::new("Results")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Test finished!");
                    ui.add_space(10.0);
                    ui.label(format!(
                        "Correct answers: {}/{}",
                        results.score, results.total
                    ));
                    ui.label(format!("Success rate: {:.1}%", results.percentage()));
                    ui.label(format!("Completed at {}", finished_at.format("%H:%M")));
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.finished_quiz = None;
                    }
                });
        }

        if let Some((title, body)) = &self.message {
            let mut close = false;
            egui::Window::new(title.as_str())
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(body);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            if close {
                self.message = None;
            }
        }
    }
}

impl WordForgeApp {
    pub fn new(
        config: AppConfig,
        store: VocabularyStore,
        translator: Option<Box<dyn Translator>>,
    ) -> Self {
        Self {
            show_confirmation_dialog: false,
            allowed_to_close: false,
            config,
            store,
            translator,
            generator: QuestionGenerator::with_thread_rng(),
            current_screen: AppScreen::Main,
            new_word: String::new(),
            new_translation: String::new(),
            new_transcription: String::new(),
            quiz: None,
            answer: String::new(),
            feedback: None,
            finished_quiz: None,
            message: None,
        }
    }

    fn show_message(&mut self, title: &str, body: impl Into<String>) {
        self.message = Some((title.to_string(), body.into()));
    }

    /// Renders the main menu with the word list
    fn render_main_screen(&mut self, ctx: &egui::Context) {
        let mut action_add = false;
        let mut action_quiz: Option<QuizMode> = None;
        let mut action_import = false;
        let mut action_export = false;
        let mut action_remove: Option<String> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("WordForge").size(24.0).strong());
                ui.add_space(20.0);

                if ui.button("➕ Add word").clicked() {
                    action_add = true;
                }
                if ui.button("📝 Start word test").clicked() {
                    action_quiz = Some(QuizMode::Words);
                }
                if ui.button("📝 Start sentence test").clicked() {
                    action_quiz = Some(QuizMode::Sentences);
                }

                ui.horizontal(|ui| {
                    if ui.button("Import words").clicked() {
                        action_import = true;
                    }
                    if ui.button("Export words").clicked() {
                        action_export = true;
                    }
                });

                if ui.button("🚪 Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.separator();
            ui.heading(format!("Words ({})", self.store.all().len()));
            ui.label(format!("Dictionary file: {}", self.store.path().display()));

            egui::ScrollArea::vertical()
                .id_source("words_list")
                .max_height(300.0)
                .show(ui, |ui| {
                    for (word, entry) in self.store.all().iter() {
                        ui.horizontal(|ui| {
                            ui.label(format!(
                                "{}  {}  {}",
                                word, entry.transcription, entry.translation
                            ));
                            if ui.small_button("Remove").clicked() {
                                action_remove = Some(word.to_string());
                            }
                        });
                    }
                });
        });

        // Execute deferred actions
        if action_add {
            self.new_word.clear();
            self.new_translation.clear();
            self.new_transcription.clear();
            self.current_screen = AppScreen::AddWord;
        }
        if let Some(mode) = action_quiz {
            self.start_quiz(mode);
        }
        if action_import {
            self.handle_import();
        }
        if action_export {
            self.handle_export();
        }
        if let Some(word) = action_remove {
            if let Err(e) = self.store.remove(&word) {
                self.show_message("Error", format!("Could not remove '{word}': {e}"));
            }
        }
    }

    /// Renders the form for adding or overwriting a word
    fn render_add_word_screen(&mut self, ctx: &egui::Context) {
        let mut action_translate = false;
        let mut action_transcribe = false;
        let mut action_save = false;
        let mut action_back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Add a new word");
            });
            ui.add_space(20.0);

            egui::Grid::new("add_word_form")
                .num_columns(3)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Word:");
                    ui.text_edit_singleline(&mut self.new_word);
                    ui.end_row();

                    ui.label("Translation:");
                    ui.text_edit_singleline(&mut self.new_translation);
                    if ui.button("🔄 Translate").clicked() {
                        action_translate = true;
                    }
                    ui.end_row();

                    ui.label("Transcription:");
                    ui.text_edit_singleline(&mut self.new_transcription);
                    if ui.button("🔄 Get transcription").clicked() {
                        action_transcribe = true;
                    }
                    ui.end_row();
                });

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    action_save = true;
                }
                if ui.button("🔙 Back").clicked() {
                    action_back = true;
                }
            });
        });

        if action_translate {
            self.auto_translate();
        }
        if action_transcribe {
            self.fill_transcription();
        }
        if action_save {
            self.save_word();
        }
        if action_back {
            self.current_screen = AppScreen::Main;
        }
    }

    /// Renders the current question, or feedback on the last answer
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let pause = self.config.answer_pause.as_secs_f64();

        if let Some(feedback) = &self.feedback {
            let elapsed = now - feedback.shown_at;
            if elapsed >= pause {
                self.feedback = None;
                self.answer.clear();
                self.finish_quiz_if_done();
            } else {
                ctx.request_repaint_after(Duration::from_secs_f64(pause - elapsed));
            }
        }

        let mut action_submit = false;
        let mut action_back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(session) = &self.quiz {
                    let title = match session.mode() {
                        QuizMode::Words => "Word test",
                        QuizMode::Sentences => "Sentence test",
                    };
                    ui.heading(title);
                    ui.label(format!(
                        "Score: {} / {}",
                        session.score(),
                        session.total_count()
                    ));
                    ui.add_space(10.0);
                }

                match (&self.quiz, &self.feedback) {
                    (Some(_), Some(feedback)) => {
                        if feedback.outcome.correct {
                            ui.colored_label(SUCCESS_COLOR, "Correct! ✅");
                        } else {
                            ui.colored_label(
                                DANGER_COLOR,
                                format!(
                                    "❌ Wrong. Correct answer: {}",
                                    feedback.outcome.correct_answer
                                ),
                            );
                        }
                    }
                    (Some(session), None) => {
                        if let Ok(current) = session.current_question(self.store.all()) {
                            ui.label(format!("Question {} of {}", current.number, current.total));
                            ui.add_space(20.0);
                            ui.label(
                                egui::RichText::new(format!(
                                    "Translate: {}",
                                    current.question.prompt
                                ))
                                .size(18.0)
                                .strong(),
                            );
                            if let Some(transcription) = current.transcription {
                                ui.label(transcription);
                            }
                            ui.add_space(20.0);

                            let response = ui.add(
                                egui::TextEdit::singleline(&mut self.answer).desired_width(300.0),
                            );
                            response.request_focus();
                            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                action_submit = true;
                            }
                            ui.add_space(20.0);
                            if ui.button("✅ Check").clicked() {
                                action_submit = true;
                            }
                        }
                    }
                    (None, _) => {
                        ui.label("No quiz in progress");
                    }
                }

                ui.add_space(20.0);
                if ui.button("🔙 Back").clicked() {
                    action_back = true;
                }
            });
        });

        if action_submit {
            if let Some(session) = &mut self.quiz {
                match session.submit_answer(&self.answer) {
                    Ok(outcome) => self.feedback = Some(Feedback { outcome, shown_at: now }),
                    Err(e) => self.show_message("Error", e.to_string()),
                }
            }
        }
        if action_back {
            self.quiz = None;
            self.feedback = None;
            self.current_screen = AppScreen::Main;
        }
    }

    /// Builds a question set and switches to the quiz screen
    fn start_quiz(&mut self, mode: QuizMode) {
        let questions = match mode {
            QuizMode::Words => self.generator.word_mode(self.store.all()),
            QuizMode::Sentences => self.generator.sentence_mode(self.store.all()),
        };

        let mut session = match questions {
            Ok(questions) => QuizSession::new(mode, questions),
            Err(e) => {
                self.show_message("Error", e.to_string());
                return;
            }
        };
        if let Err(e) = session.start() {
            self.show_message("Error", e.to_string());
            return;
        }

        self.quiz = Some(session);
        self.answer.clear();
        self.feedback = None;
        self.current_screen = AppScreen::Quiz;
    }

    fn finish_quiz_if_done(&mut self) {
        let Some(session) = &self.quiz else {
            return;
        };
        if let Ok(results) = session.results() {
            self.finished_quiz = Some((results, Local::now()));
            self.quiz = None;
            self.current_screen = AppScreen::Main;
        }
    }

    fn auto_translate(&mut self) {
        let word = self.new_word.trim().to_lowercase();
        if word.is_empty() {
            self.show_message("Error", "Enter a word first");
            return;
        }
        let Some(translator) = &self.translator else {
            self.show_message("Error", "Translation service is not available");
            return;
        };

        match translator.translate(&word, &self.config.target_lang) {
            Ok(translation) => {
                self.new_translation = translation;
                self.new_transcription = self.store.transcribe(&word);
            }
            Err(e) => self.show_message(
                "Error",
                format!("{e}\nPlease enter the translation manually."),
            ),
        }
    }

    fn fill_transcription(&mut self) {
        let word = self.new_word.trim().to_lowercase();
        if word.is_empty() {
            self.show_message("Error", "Enter a word first");
            return;
        }
        self.new_transcription = self.store.transcribe(&word);
    }

    fn save_word(&mut self) {
        match self.store.upsert(
            &self.new_word,
            &self.new_translation,
            &self.new_transcription,
        ) {
            Ok(_) => {
                self.show_message("Success", "Word added to the dictionary!");
                self.current_screen = AppScreen::Main;
            }
            Err(e) => self.show_message("Error", e.to_string()),
        }
    }

    /// Handles vocabulary export to a JSON file
    fn handle_export(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("words.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            match self.store.export_to(&path) {
                Ok(()) => self.show_message(
                    "Export",
                    format!("Exported {} words", self.store.all().len()),
                ),
                Err(e) => self.show_message("Export", format!("Export failed: {e}")),
            }
        }
    }

    /// Handles merging words from a JSON file
    fn handle_import(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            match self.store.import_from(&path) {
                Ok(count) => self.show_message("Import", format!("Imported {count} words")),
                Err(e) => self.show_message("Import", format!("Import failed: {e}")),
            }
        }
    }
}
