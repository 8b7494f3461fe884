mod render;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use carbonwise_core::{Action, App, Config, FileKeyValueStore, ProjectFilter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carbonwise")]
#[command(about = "Estimate and track a monthly carbon footprint", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Data directory (default: $CARBONWISE_HOME or ~/.carbonwise)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Calculate a footprint (usage: calc distance:100 fuel:petrol electricity:50 gas:10 diet:vegan waste:5)
    Calc {
        /// Save the result to the dashboard
        #[arg(long)]
        save: bool,
        /// Inputs as key:value, keys may be abbreviated
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show the saved footprint, credits and trees
    Dashboard,
    /// List offset projects
    Projects {
        /// all, renewable, active or completed
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Simulate an investment in a project (+5 credits, +25 trees)
    Invest { id: u32 },
    /// Generate the monthly report
    Report,
    /// Export the report
    Export,
    /// Toggle between light and dark theme
    Theme,
    /// Run any action by name (usage: do invest 2)
    Do {
        action: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load(cli.data_dir)?;
    let store = FileKeyValueStore::new(Some(config.data_dir.clone()))?;
    let mut app = App::new(store, config.coefficients)?;

    match cli.command {
        Some(Commands::Calc { save, mut args }) => {
            // `--save` after the inputs is captured by the trailing args.
            let trailing_save = args.iter().any(|a| a == "--save");
            args.retain(|a| a != "--save");
            let save = save || trailing_save;

            app.dispatch(Action::parse("calculate", &args)?)?;
            if let Some(result) = &app.state().last_result {
                println!("{}", render::result_table(result));
            }
            if save {
                app.dispatch(Action::SaveFootprint)?;
            }
        }
        Some(Commands::Dashboard) => {
            println!("{}", render::dashboard_table(&app.state().dashboard));
        }
        Some(Commands::Projects { filter }) => {
            let filter: ProjectFilter = filter.parse()?;
            app.dispatch(Action::FilterProjects(filter))?;
            let state = app.state();
            if state.visible_projects.is_empty() {
                println!("No projects match '{}'.", filter);
            } else {
                println!("{}", render::project_table(&state.visible_projects));
            }
        }
        Some(Commands::Invest { id }) => {
            app.dispatch(Action::SimulateInvestment(id))?;
            println!("{}", render::dashboard_table(&app.state().dashboard));
        }
        Some(Commands::Report) => {
            app.dispatch(Action::GenerateReport)?;
            if let Some(report) = &app.state().report {
                print!("{}", report.render());
            }
        }
        Some(Commands::Export) => {
            app.dispatch(Action::ExportReport)?;
        }
        Some(Commands::Theme) => {
            app.dispatch(Action::ToggleTheme)?;
            println!("Theme: {}", app.state().theme);
        }
        Some(Commands::Do { action, args }) => {
            let action = Action::parse(&action, &args)?;
            app.dispatch(action)?;
            println!("{}", render::state_summary(app.state()));
        }
        Some(Commands::Tui) | None => {
            tui::run(app)?;
            return Ok(());
        }
    }

    for notification in app.take_notifications() {
        println!("{}", render::notification_line(&notification));
    }
    Ok(())
}
