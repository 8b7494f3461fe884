use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{FootprintError, Result};
use crate::input::{expand_key, parse_footprint_input};
use crate::model::coefficient::CoefficientTable;
use crate::model::footprint::{FootprintInput, FootprintResult};
use crate::model::project::{Project, ProjectFilter};
use crate::model::ui::{Notification, Section, Theme};
use crate::repository::KeyValueStore;
use crate::service::calculator::compute_footprint;
use crate::service::catalog::{catalog, filter_projects, find_project};
use crate::service::dto::Dashboard;
use crate::service::report::{generate_report, Report, EXPORT_MESSAGE};
use crate::service::snapshot_service::SnapshotStore;

pub const SAVE_MESSAGE: &str = "Footprint saved to dashboard! CDM credits updated.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Section),
    GetStarted,
    ToggleTheme,
    Calculate(FootprintInput),
    SaveFootprint,
    SimulateInvestment(u32),
    FilterProjects(ProjectFilter),
    GenerateReport,
    ExportReport,
}

type ActionParser = fn(&[String]) -> Result<Action>;

const ACTION_TABLE: [(&str, ActionParser); 9] = [
    ("navigate", parse_navigate),
    ("start", parse_start),
    ("theme", parse_theme),
    ("calculate", parse_calculate),
    ("save", parse_save),
    ("invest", parse_invest),
    ("filter", parse_filter),
    ("report", parse_report),
    ("export", parse_export),
];

pub fn action_names() -> Vec<&'static str> {
    ACTION_TABLE.iter().map(|(name, _)| *name).collect()
}

impl Action {
    /// Resolves `name` (exact or unique prefix) through the action table and
    /// parses `args` for it.
    pub fn parse(name: &str, args: &[String]) -> Result<Action> {
        let full_name = expand_key(name, &action_names())?;
        let (_, parser) = ACTION_TABLE
            .iter()
            .find(|(n, _)| *n == full_name)
            .ok_or_else(|| FootprintError::UnknownKey(name.to_string()))?;
        parser(args)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::GetStarted => "start",
            Action::ToggleTheme => "theme",
            Action::Calculate(_) => "calculate",
            Action::SaveFootprint => "save",
            Action::SimulateInvestment(_) => "invest",
            Action::FilterProjects(_) => "filter",
            Action::GenerateReport => "report",
            Action::ExportReport => "export",
        }
    }
}

fn single_arg<'a>(action: &str, args: &'a [String]) -> Result<&'a str> {
    match args {
        [arg] => Ok(arg.as_str()),
        _ => Err(FootprintError::InvalidArgument {
            action: action.to_string(),
            reason: format!("expected exactly one argument, got {}", args.len()),
        }),
    }
}

fn no_args(action: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(FootprintError::InvalidArgument {
            action: action.to_string(),
            reason: format!("takes no arguments, got {}", args.len()),
        })
    }
}

fn parse_start(args: &[String]) -> Result<Action> {
    no_args("start", args).map(|_| Action::GetStarted)
}

fn parse_theme(args: &[String]) -> Result<Action> {
    no_args("theme", args).map(|_| Action::ToggleTheme)
}

fn parse_calculate(args: &[String]) -> Result<Action> {
    Ok(Action::Calculate(parse_footprint_input(args)?))
}

fn parse_save(args: &[String]) -> Result<Action> {
    no_args("save", args).map(|_| Action::SaveFootprint)
}

fn parse_report(args: &[String]) -> Result<Action> {
    no_args("report", args).map(|_| Action::GenerateReport)
}

fn parse_export(args: &[String]) -> Result<Action> {
    no_args("export", args).map(|_| Action::ExportReport)
}

fn parse_navigate(args: &[String]) -> Result<Action> {
    Ok(Action::Navigate(single_arg("navigate", args)?.parse()?))
}

fn parse_invest(args: &[String]) -> Result<Action> {
    let raw = single_arg("invest", args)?;
    let id = raw.trim().parse::<u32>().map_err(|_| FootprintError::InvalidArgument {
        action: "invest".to_string(),
        reason: format!("'{}' is not a project ID", raw),
    })?;
    Ok(Action::SimulateInvestment(id))
}

fn parse_filter(args: &[String]) -> Result<Action> {
    Ok(Action::FilterProjects(single_arg("filter", args)?.parse()?))
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub section: Section,
    pub theme: Theme,
    pub dashboard: Dashboard,
    pub last_result: Option<FootprintResult>,
    pub filter: ProjectFilter,
    pub visible_projects: Vec<Project>,
    pub report: Option<Report>,
    pub notifications: Vec<Notification>,
}

pub struct App<S: KeyValueStore> {
    store: SnapshotStore<S>,
    coefficients: CoefficientTable,
    projects: Vec<Project>,
    state: AppState,
}

impl<S: KeyValueStore> App<S> {
    /// Rehydrates the dashboard and theme from storage.
    pub fn new(store: S, coefficients: CoefficientTable) -> Result<Self> {
        let store = SnapshotStore::new(store);
        let partial = store.load_partial()?;
        let theme = store.load_theme()?;
        let projects = catalog();

        debug!(?partial, %theme, "application state restored");

        let state = AppState {
            section: Section::default(),
            theme,
            dashboard: Dashboard::from_partial(&partial),
            last_result: None,
            filter: ProjectFilter::All,
            visible_projects: projects.clone(),
            report: None,
            notifications: Vec::new(),
        };

        Ok(Self {
            store,
            coefficients,
            projects,
            state,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.state.notifications)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(action = action.name(), "dispatch");
        match action {
            Action::Navigate(section) => self.navigate(section),
            Action::GetStarted => self.navigate(Section::Calculator),
            Action::ToggleTheme => {
                let theme = self.state.theme.toggled();
                self.store.save_theme(theme)?;
                self.state.theme = theme;
            }
            Action::Calculate(input) => {
                self.state.last_result = None;
                let result = compute_footprint(&input, &self.coefficients)?;
                self.state.last_result = Some(result);
            }
            Action::SaveFootprint => {
                let result = self.state.last_result.ok_or(FootprintError::NothingToSave)?;
                let snapshot = self.store.save_snapshot(&result)?;
                self.state.dashboard = Dashboard::from_partial(&snapshot.into());
                self.notify(Notification::success(SAVE_MESSAGE));
            }
            Action::SimulateInvestment(id) => {
                let name = find_project(&self.projects, id)?.name.clone();
                let partial = self.store.simulate_investment()?;
                self.state.dashboard = Dashboard::from_partial(&partial);
                info!(project = id, "investment recorded");
                self.notify(Notification::success(format!(
                    "Successfully invested in {}! +5 CDM Credits earned.",
                    name
                )));
            }
            Action::FilterProjects(filter) => {
                self.state.filter = filter;
                self.state.visible_projects = filter_projects(&self.projects, filter);
            }
            Action::GenerateReport => {
                self.state.report = Some(generate_report(&self.state.dashboard, today()));
            }
            Action::ExportReport => self.notify(Notification::success(EXPORT_MESSAGE)),
        }
        Ok(())
    }

    /// Like `dispatch`, but a failure becomes an error notification instead.
    pub fn handle(&mut self, action: Action) {
        if let Err(e) = self.dispatch(action) {
            warn!("action failed: {}", e);
            self.notify(Notification::error(e.to_string()));
        }
    }

    fn navigate(&mut self, section: Section) {
        if section == Section::Projects {
            self.state.filter = ProjectFilter::All;
            self.state.visible_projects = self.projects.clone();
        }
        self.state.section = section;
    }

    fn notify(&mut self, notification: Notification) {
        self.state.notifications.push(notification);
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
