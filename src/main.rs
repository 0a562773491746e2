use std::time::Instant;

use chrono::{DateTime, Local, Utc};
use eframe::{App, CreationContext, Frame, egui};
use egui::{Align, Color32, Layout, ProgressBar, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use tracing::{info, warn};

use gym_tracker::coach::{self, CoachChat, KeyGate, KeywordCoach, Role};
use gym_tracker::config::{self, AppConfig};
use gym_tracker::plans::{week_end, PlanBook};
use gym_tracker::seed::{default_workouts, load_seed_workouts};
use gym_tracker::session::{SessionClock, SessionProgress, SessionState, WorkoutSession};
use gym_tracker::storage::JsonFileStore;
use gym_tracker::{logging, WeightUnit, WorkoutStore};

fn main() -> Result<(), eframe::Error> {
    let (config, config_err) = match config::load_default() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(&config.log_filter);
    if let Some(e) = config_err {
        warn!("using default config: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Gym Tracker",
        options,
        Box::new(|cc| Ok(Box::new(TrackerApp::new(cc, config)))),
    )
}

#[derive(PartialEq, Clone)]
enum View {
    Workouts,
    Detail(String),
    Session,
}

enum Action {
    ToggleExercise { workout_id: String, exercise_id: String },
    DeleteWorkout(String),
    OpenWorkout(String),
    StartWorkout(String),
    ToggleSet { workout_id: String, exercise_id: String, set_id: String },
    SetActuals {
        workout_id: String,
        exercise_id: String,
        set_id: String,
        reps: Option<u32>,
        weight: Option<f32>,
    },
    SetTargets {
        workout_id: String,
        exercise_id: String,
        reps: u32,
        weight: f32,
        unit: WeightUnit,
    },
    EditExercise(String),
    Back,
    OpenCoach,
    NewWeek,
}

/// Leaving a session mid-way returns to that workout's detail view.
fn back_from_session(session: &WorkoutSession) -> Action {
    Action::OpenWorkout(session.workout_id().to_string())
}

struct ActiveSession {
    workout: WorkoutSession,
    clock: SessionClock,
    reps_input: u32,
}

struct TrackerApp {
    config: AppConfig,
    store: WorkoutStore,
    plans: PlanBook<JsonFileStore>,
    view: View,
    session: Option<ActiveSession>,
    coach: Option<CoachChat<KeywordCoach>>,
    chat_input: String,
    api_key_input: String,
    editing_exercise: Option<String>,
}

impl TrackerApp {
    fn new(cc: &CreationContext, config: AppConfig) -> Self {
        let now = Utc::now();
        let workouts = match &config.seed_file {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(json) => load_seed_workouts(&json, now),
                Err(e) => {
                    warn!("seed file {}: {}", path.display(), e);
                    default_workouts(now)
                }
            },
            None => default_workouts(now),
        };
        let store = WorkoutStore::new(workouts);
        let plans = PlanBook::load(
            JsonFileStore::new(&config.data_dir),
            Local::now(),
            config.week_starts_on,
        );
        info!(workouts = store.workouts().len(), data_dir = %config.data_dir.display(), "tracker ready");

        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        cc.egui_ctx.set_style(style);

        TrackerApp::with_state(config, store, plans)
    }

    fn with_state(config: AppConfig, store: WorkoutStore, plans: PlanBook<JsonFileStore>) -> Self {
        TrackerApp {
            config,
            store,
            plans,
            view: View::Workouts,
            session: None,
            coach: None,
            chat_input: String::new(),
            api_key_input: String::new(),
            editing_exercise: None,
        }
    }

    fn apply(&mut self, action: Action) {
        let result = match action {
            Action::ToggleExercise { workout_id, exercise_id } => {
                self.store.toggle_exercise(&workout_id, &exercise_id).map(|_| ())
            }
            Action::DeleteWorkout(id) => {
                if self.view == View::Detail(id.clone()) {
                    self.view = View::Workouts;
                }
                self.store.delete_workout(&id).map(|_| ())
            }
            Action::OpenWorkout(id) => {
                self.session = None;
                self.editing_exercise = None;
                self.view = View::Detail(id);
                Ok(())
            }
            Action::StartWorkout(id) => {
                self.start_session(&id);
                Ok(())
            }
            Action::ToggleSet { workout_id, exercise_id, set_id } => self
                .store
                .toggle_set(&workout_id, &exercise_id, &set_id)
                .map(|_| ()),
            Action::SetActuals { workout_id, exercise_id, set_id, reps, weight } => self
                .store
                .update_set_actuals(&workout_id, &exercise_id, &set_id, reps, weight),
            Action::SetTargets { workout_id, exercise_id, reps, weight, unit } => self
                .store
                .set_targets(&workout_id, &exercise_id, reps, weight, unit),
            Action::EditExercise(id) => {
                self.editing_exercise = if self.editing_exercise.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
                Ok(())
            }
            Action::Back => {
                self.session = None;
                self.view = View::Workouts;
                Ok(())
            }
            Action::OpenCoach => {
                self.coach = Some(CoachChat::new(KeywordCoach::default(), Local::now()));
                self.chat_input.clear();
                self.api_key_input.clear();
                Ok(())
            }
            Action::NewWeek => {
                self.plans.advance_week();
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("ignored: {}", e);
        }
    }

    fn start_session(&mut self, workout_id: &str) {
        let Some(workout) = self.store.workout(workout_id) else {
            warn!("cannot start missing workout {}", workout_id);
            return;
        };
        match WorkoutSession::start(workout, self.config.rest_seconds) {
            Ok(session) => {
                let reps_input = session.current().target_reps();
                self.session = Some(ActiveSession {
                    workout: session,
                    clock: SessionClock::start(Instant::now()),
                    reps_input,
                });
                self.view = View::Session;
            }
            Err(e) => warn!("{}", e),
        }
    }

    fn import_coach_workout(&mut self) {
        let workout = coach::import_workout(Utc::now());
        if let Err(e) = self.plans.add_generated_workout(&workout, Local::now()) {
            warn!("weekly plan not saved: {}", e);
        }
        if let Err(e) = self.store.add_workout(workout) {
            warn!("import failed: {}", e);
        }
    }
}

impl App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("GymTracker").heading().strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(Local::now().format("%x").to_string());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.view.clone() {
            View::Workouts => self.show_workouts(ui, &mut actions),
            View::Detail(id) => self.show_detail(ui, &id, &mut actions),
            View::Session => self.show_session(ui, &mut actions),
        });

        self.show_coach(ctx);

        for action in actions {
            self.apply(action);
        }

        if let Some(active) = &self.session {
            let wait = active
                .clock
                .until_next(active.workout.current(), Instant::now());
            ctx.request_repaint_after(wait);
        }
    }
}

impl TrackerApp {
    fn show_workouts(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        self.show_plan_manager(ui, actions);
        ui.add_space(10.0);
        ui.label(RichText::new("Your Workouts").heading());

        if self.store.is_empty() {
            ui.label("No workouts yet. Start by adding a new workout!");
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for workout in self.store.workouts() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&workout.name).size(22.0).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Delete").clicked() {
                                actions.push(Action::DeleteWorkout(workout.id.clone()));
                            }
                            if ui.button("Edit").clicked() {
                                actions.push(Action::OpenWorkout(workout.id.clone()));
                            }
                        });
                    });
                    ui.add(ProgressBar::new(workout.progress()).show_percentage());

                    for exercise in &workout.exercises {
                        ui.horizontal(|ui| {
                            let mut done = exercise.completed;
                            let name = if exercise.completed {
                                RichText::new(exercise.name.as_str()).strikethrough().color(Color32::GRAY)
                            } else {
                                RichText::new(exercise.name.as_str())
                            };
                            if ui.checkbox(&mut done, name).changed() {
                                actions.push(Action::ToggleExercise {
                                    workout_id: workout.id.clone(),
                                    exercise_id: exercise.id.clone(),
                                });
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(format!(
                                    "{} × {} @ {}{}",
                                    exercise.sets, exercise.reps, exercise.weight, exercise.weight_unit
                                ));
                            });
                        });
                    }

                    ui.horizontal(|ui| {
                        ui.label(workout.date.with_timezone(&Local).format("%x").to_string());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Start").clicked() {
                                actions.push(Action::StartWorkout(workout.id.clone()));
                            }
                            ui.label(
                                RichText::new(format!(
                                    "{} of {} completed",
                                    workout.completed_exercises(),
                                    workout.exercises.len()
                                ))
                                .color(Color32::LIGHT_BLUE),
                            );
                        });
                    });
                });
                ui.add_space(8.0);
            }
        });
    }

    fn show_plan_manager(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let now = Local::now();
        let expired = self.plans.current_week_expired(now);

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Weekly Plan Manager").size(22.0).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let chat = ui.add_enabled(
                        self.plans.can_create_new_plan(now),
                        egui::Button::new("Chat with AI Coach"),
                    );
                    if chat.clicked() {
                        actions.push(Action::OpenCoach);
                    }
                    if expired && ui.button("New Week").clicked() {
                        actions.push(Action::NewWeek);
                    }
                });
            });

            ui.columns(2, |cols| {
                let week = self.plans.current_week();
                cols[0].label(RichText::new("Current Week").strong());
                cols[0].label(week_range(&week));
                match self.plans.current_plan() {
                    Some(plan) => {
                        let status = if expired {
                            RichText::new("Week Expired - Time for new plan!").color(Color32::from_rgb(234, 88, 12))
                        } else {
                            RichText::new("Active Plan").color(Color32::GREEN)
                        };
                        cols[0].label(status);
                        cols[0].label(format!("{} workout(s) planned", plan.workouts.len()));
                        for (i, workout) in plan.workouts.iter().enumerate() {
                            cols[0].label(format!("{}. {}", i + 1, workout.name));
                        }
                    }
                    None => {
                        cols[0].label("No plan for this week yet. Chat with AI to create one!");
                    }
                }

                cols[1].label(RichText::new("Plan History").strong());
                let history = self.plans.history();
                if self.plans.plans().is_empty() {
                    cols[1].label("No previous plans");
                } else {
                    TableBuilder::new(&mut cols[1])
                        .striped(true)
                        .column(Column::auto())
                        .column(Column::remainder())
                        .header(20.0, |mut header| {
                            header.col(|ui| {
                                ui.strong("Week");
                            });
                            header.col(|ui| {
                                ui.strong("Workouts");
                            });
                        })
                        .body(|mut body| {
                            for plan in &history {
                                body.row(20.0, |mut row| {
                                    row.col(|ui| {
                                        ui.label(week_range(&plan.week_start));
                                    });
                                    row.col(|ui| {
                                        ui.label(format!("{} workout(s)", plan.workouts.len()));
                                    });
                                });
                            }
                        });
                }
            });
        });
    }

    fn show_detail(&mut self, ui: &mut Ui, workout_id: &str, actions: &mut Vec<Action>) {
        let Some(workout) = self.store.workout(workout_id) else {
            actions.push(Action::Back);
            return;
        };

        ui.horizontal(|ui| {
            if ui.button("← Back to Workouts").clicked() {
                actions.push(Action::Back);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Start Workout").clicked() {
                    actions.push(Action::StartWorkout(workout.id.clone()));
                }
            });
        });
        ui.label(RichText::new(&workout.name).heading().size(32.0).strong());
        ui.label(workout.date.with_timezone(&Local).format("%x").to_string());
        ui.add_space(10.0);

        ScrollArea::vertical().show(ui, |ui| {
            for exercise in &workout.exercises {
                let editing = self.editing_exercise.as_deref() == Some(exercise.id.as_str());
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&exercise.name).size(22.0).strong());
                        if ui.selectable_label(editing, "Edit").clicked() {
                            actions.push(Action::EditExercise(exercise.id.clone()));
                        }
                    });

                    if editing {
                        let mut reps = exercise.reps;
                        let mut weight = exercise.weight;
                        ui.horizontal(|ui| {
                            ui.label("Target");
                            let r = ui.add(egui::DragValue::new(&mut reps).range(0..=100).suffix(" reps"));
                            let w = ui.add(
                                egui::DragValue::new(&mut weight)
                                    .range(0.0..=1000.0)
                                    .suffix(format!(" {}", exercise.weight_unit)),
                            );
                            if r.changed() || w.changed() {
                                actions.push(Action::SetTargets {
                                    workout_id: workout.id.clone(),
                                    exercise_id: exercise.id.clone(),
                                    reps,
                                    weight,
                                    unit: exercise.weight_unit,
                                });
                            }
                        });
                    }

                    ui.horizontal_wrapped(|ui| {
                        for (index, set) in exercise.set_details.iter().enumerate() {
                            ui.group(|ui| {
                                ui.vertical(|ui| {
                                    let mut done = set.completed;
                                    if ui.checkbox(&mut done, format!("Set {}", index + 1)).changed() {
                                        actions.push(Action::ToggleSet {
                                            workout_id: workout.id.clone(),
                                            exercise_id: exercise.id.clone(),
                                            set_id: set.id.clone(),
                                        });
                                    }
                                    if editing {
                                        let mut reps = set.actual_reps.unwrap_or(exercise.reps);
                                        let mut weight = set.actual_weight.unwrap_or(exercise.weight);
                                        let r = ui.add(egui::DragValue::new(&mut reps).prefix("reps "));
                                        let w = ui.add(
                                            egui::DragValue::new(&mut weight)
                                                .prefix("weight ")
                                                .suffix(format!(" {}", exercise.weight_unit)),
                                        );
                                        if r.changed() || w.changed() {
                                            actions.push(Action::SetActuals {
                                                workout_id: workout.id.clone(),
                                                exercise_id: exercise.id.clone(),
                                                set_id: set.id.clone(),
                                                reps: r.changed().then_some(reps),
                                                weight: w.changed().then_some(weight),
                                            });
                                        }
                                    }
                                    ui.label(format!(
                                        "Target: {} reps @ {}{}",
                                        exercise.reps, exercise.weight, exercise.weight_unit
                                    ));
                                    if set.completed && (set.actual_reps.is_some() || set.actual_weight.is_some()) {
                                        ui.label(
                                            RichText::new(format!(
                                                "Actual: {} reps @ {}{}",
                                                set.actual_reps.unwrap_or(exercise.reps),
                                                set.actual_weight.unwrap_or(exercise.weight),
                                                set.weight_unit
                                            ))
                                            .color(Color32::GREEN),
                                        );
                                    }
                                });
                            });
                        }
                    });
                });
                ui.add_space(8.0);
            }
        });
    }

    fn show_session(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let Some(active) = self.session.as_mut() else {
            actions.push(Action::Back);
            return;
        };
        active.clock.drive(active.workout.current_mut(), Instant::now());

        let mut advance = false;
        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                actions.push(back_from_session(&active.workout));
            }
            ui.label(RichText::new(active.workout.current().name()).heading().size(32.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!(
                    "Exercise {} of {}",
                    active.workout.exercise_index() + 1,
                    active.workout.exercise_count()
                ));
            });
        });
        ui.add_space(10.0);

        let exercise = active.workout.current();
        ui.horizontal(|ui| {
            ui.label(format!("Workout Time: {}", format_time(exercise.elapsed_seconds())));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("Set {} of {}", exercise.current_set() + 1, exercise.sets()));
            });
        });
        ui.add_space(10.0);

        match exercise.state() {
            SessionState::Resting { remaining, .. } => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Rest Time").size(24.0));
                    ui.label(
                        RichText::new(format_time(u64::from(remaining)))
                            .size(64.0)
                            .strong()
                            .color(Color32::LIGHT_BLUE),
                    );
                    if ui.button("Skip Rest").clicked() {
                        active.workout.current_mut().skip_rest();
                    }
                });
            }
            SessionState::Active { .. } => {
                let unit = exercise.unit();
                let mut weight = exercise.displayed_weight();
                let mut toggle_unit = false;
                ui.group(|ui| {
                    ui.label(RichText::new("Target").strong());
                    ui.horizontal(|ui| {
                        ui.label("Reps");
                        ui.add(egui::DragValue::new(&mut active.reps_input).range(0..=100));
                        ui.label(format!("Weight ({})", unit));
                        ui.add(egui::DragValue::new(&mut weight).range(0.0..=1000.0));
                        if ui.small_button("⚖").on_hover_text("Switch kg / lbs").clicked() {
                            toggle_unit = true;
                        }
                    });
                });
                let current = active.workout.current_mut();
                current.set_displayed_weight(weight);
                if toggle_unit {
                    current.toggle_unit();
                }

                if ui
                    .add_sized([ui.available_width(), 48.0], egui::Button::new("Complete Set"))
                    .clicked()
                {
                    let reps = Some(active.reps_input);
                    let current = active.workout.current_mut();
                    if let Err(e) = current.record_set(&mut self.store, reps, None) {
                        warn!("set not recorded: {}", e);
                    }
                }
            }
            SessionState::Finished => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Exercise complete").size(24.0).color(Color32::GREEN));
                });
            }
        }

        ui.add_space(20.0);
        let exercise = active.workout.current();
        ui.horizontal(|ui| {
            for index in 0..exercise.sets() {
                let done = self
                    .store
                    .workout(active.workout.workout_id())
                    .and_then(|w| w.exercise(exercise.exercise_id()))
                    .and_then(|e| e.set_details.get(index))
                    .map(|s| s.completed)
                    .unwrap_or(false);
                let color = if done {
                    Color32::GREEN
                } else if index == exercise.current_set() {
                    Color32::LIGHT_BLUE
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new("●").color(color));
            }
            if exercise.is_finished() {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = if active.workout.is_last() { "Finish Workout" } else { "Next Exercise" };
                    if ui.button(label).clicked() {
                        advance = true;
                    }
                });
            }
        });

        if advance {
            match active.workout.advance(&self.store) {
                Ok(SessionProgress::Next { .. }) => {
                    active.reps_input = active.workout.current().target_reps();
                    active.clock = SessionClock::start(Instant::now());
                }
                Ok(SessionProgress::Ended) => actions.push(Action::Back),
                Err(e) => {
                    warn!("session stopped: {}", e);
                    actions.push(Action::Back);
                }
            }
        }
    }

    fn show_coach(&mut self, ctx: &egui::Context) {
        let Some(chat) = self.coach.as_mut() else {
            return;
        };
        let mut open = true;
        let mut import = false;

        egui::Window::new("AI Fitness Coach")
            .open(&mut open)
            .default_width(560.0)
            .collapsible(false)
            .show(ctx, |ui| match chat.gate() {
                KeyGate::Pending => {
                    ui.label("Enter your OpenAI API Key");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.api_key_input)
                            .password(true)
                            .hint_text("sk-..."),
                    );
                    ui.horizontal(|ui| {
                        if ui.button("Continue").clicked() && !chat.submit_api_key(&self.api_key_input) {
                            warn!("empty api key rejected");
                        }
                        if ui.button("Skip (Demo Mode)").clicked() {
                            chat.skip_api_key();
                        }
                    });
                }
                KeyGate::Provided | KeyGate::DemoMode => {
                    ScrollArea::vertical()
                        .max_height(380.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for message in chat.messages() {
                                let (who, color) = match message.role {
                                    Role::User => ("You", Color32::LIGHT_BLUE),
                                    Role::Assistant => ("Coach", Color32::LIGHT_GREEN),
                                };
                                ui.label(RichText::new(who).strong().color(color));
                                ui.label(message.content.as_str());
                                ui.label(
                                    RichText::new(message.timestamp.format("%H:%M:%S").to_string())
                                        .small()
                                        .weak(),
                                );
                                ui.add_space(6.0);
                            }
                        });
                    ui.separator();
                    if ui.button("Import Workout").clicked() {
                        import = true;
                    }
                    ui.horizontal(|ui| {
                        let input = ui.add(
                            egui::TextEdit::singleline(&mut self.chat_input)
                                .hint_text("Ask about workouts, exercises, or fitness advice...")
                                .desired_width(420.0),
                        );
                        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let send = ui.add_enabled(!self.chat_input.trim().is_empty(), egui::Button::new("Send"));
                        if submitted || send.clicked() {
                            chat.send(&self.chat_input, Local::now());
                            self.chat_input.clear();
                        }
                    });
                }
            });

        if import {
            self.import_coach_workout();
            self.coach = None;
        } else if !open {
            self.coach = None;
        }
    }
}

fn week_range(start: &DateTime<Local>) -> String {
    format!("{} - {}", start.format("%x"), week_end(start).format("%x"))
}

fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn app(dir: &std::path::Path) -> TrackerApp {
        let store = WorkoutStore::new(default_workouts(Utc::now()));
        let plans = PlanBook::load(JsonFileStore::new(dir), Local::now(), Weekday::Sun);
        TrackerApp::with_state(AppConfig::default(), store, plans)
    }

    #[test]
    fn test_session_back_opens_workout_detail() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        let id = app.store.workouts()[0].id.clone();

        app.apply(Action::StartWorkout(id.clone()));
        assert!(app.view == View::Session);
        let back = back_from_session(&app.session.as_ref().unwrap().workout);

        app.apply(back);
        assert!(app.view == View::Detail(id));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_back_from_detail_goes_to_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        let id = app.store.workouts()[0].id.clone();

        app.apply(Action::OpenWorkout(id));
        app.apply(Action::Back);
        assert!(app.view == View::Workouts);
    }
}
