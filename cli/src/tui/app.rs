use std::time::Instant;

use carbonwise_core::{Action, App, KeyValueStore, Notification, ProjectFilter, Section};
use ratatui::widgets::TableState;

pub enum InputMode {
    Normal,
    Editing,
}

pub struct TuiApp<S: KeyValueStore> {
    pub app: App<S>,
    pub project_state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub toast: Option<(Notification, Instant)>,
}

impl<S: KeyValueStore> TuiApp<S> {
    pub fn new(app: App<S>) -> Self {
        let mut project_state = TableState::default();
        if !app.state().visible_projects.is_empty() {
            project_state.select(Some(0));
        }
        Self {
            app,
            project_state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            toast: None,
        }
    }

    fn run_action(&mut self, action: Action) {
        self.app.handle(action);
        if let Some(latest) = self.app.take_notifications().pop() {
            self.toast = Some((latest, Instant::now()));
        }
    }

    /// Drops the toast once its display time is over.
    pub fn tick(&mut self) {
        if let Some((notification, shown_at)) = &self.toast {
            if shown_at.elapsed() >= notification.duration {
                self.toast = None;
            }
        }
    }

    pub fn section(&self) -> Section {
        self.app.state().section
    }

    pub fn goto(&mut self, section: Section) {
        self.run_action(Action::Navigate(section));
        if section == Section::Projects {
            self.reset_selection();
        }
    }

    pub fn next_section(&mut self) {
        let i = (self.section().index() + 1) % Section::ALL.len();
        self.goto(Section::ALL[i]);
    }

    pub fn previous_section(&mut self) {
        let len = Section::ALL.len();
        let i = (self.section().index() + len - 1) % len;
        self.goto(Section::ALL[i]);
    }

    pub fn get_started(&mut self) {
        self.run_action(Action::GetStarted);
    }

    pub fn toggle_theme(&mut self) {
        self.run_action(Action::ToggleTheme);
    }

    pub fn save(&mut self) {
        self.run_action(Action::SaveFootprint);
    }

    pub fn next_project(&mut self) {
        let len = self.app.state().visible_projects.len();
        if len == 0 { return; }

        let i = match self.project_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.project_state.select(Some(i));
    }

    pub fn previous_project(&mut self) {
        let len = self.app.state().visible_projects.len();
        if len == 0 { return; }

        let i = match self.project_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.project_state.select(Some(i));
    }

    pub fn cycle_filter(&mut self) {
        let next: ProjectFilter = self.app.state().filter.next();
        self.run_action(Action::FilterProjects(next));
        self.reset_selection();
    }

    pub fn invest_selected(&mut self) {
        let id = self
            .project_state
            .selected()
            .and_then(|i| self.app.state().visible_projects.get(i))
            .map(|p| p.id);
        if let Some(id) = id {
            self.run_action(Action::SimulateInvestment(id));
        }
    }

    pub fn generate_report(&mut self) {
        self.run_action(Action::GenerateReport);
    }

    pub fn export_report(&mut self) {
        self.run_action(Action::ExportReport);
    }

    fn reset_selection(&mut self) {
        if self.app.state().visible_projects.is_empty() {
            self.project_state.select(None);
        } else {
            self.project_state.select(Some(0));
        }
    }

    pub fn enter_edit_mode(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.input.chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Calculates from the input line. The line is kept so it can be tweaked
    /// and recalculated.
    pub fn submit_input(&mut self) {
        let args: Vec<String> = self.input.split_whitespace().map(|s| s.to_string()).collect();
        match Action::parse("calculate", &args) {
            Ok(action) => self.run_action(action),
            Err(e) => self.toast = Some((Notification::error(e.to_string()), Instant::now())),
        }
        self.exit_input_mode();
    }
}
