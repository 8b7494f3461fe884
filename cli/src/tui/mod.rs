pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use carbonwise_core::{App, KeyValueStore, Section};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{InputMode, TuiApp};

pub fn run<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut tui = TuiApp::new(app);
    let res = run_app(&mut terminal, &mut tui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend, S: KeyValueStore>(terminal: &mut Terminal<B>, tui: &mut TuiApp<S>) -> io::Result<()> {
    loop {
        tui.tick();
        terminal
            .draw(|f| ui::draw(f, tui))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match tui.input_mode {
            InputMode::Normal => {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Tab | KeyCode::Right => tui.next_section(),
                    KeyCode::BackTab | KeyCode::Left => tui.previous_section(),
                    KeyCode::Char('1') => tui.goto(Section::Dashboard),
                    KeyCode::Char('2') => tui.goto(Section::Calculator),
                    KeyCode::Char('3') => tui.goto(Section::Projects),
                    KeyCode::Char('4') => tui.goto(Section::Reports),
                    KeyCode::Char('t') => tui.toggle_theme(),
                    code => handle_section_key(tui, code),
                }
            },
            InputMode::Editing => {
                match key.code {
                    KeyCode::Enter => tui.submit_input(),
                    KeyCode::Esc => tui.exit_input_mode(),
                    KeyCode::Char(c) => tui.input_char(c),
                    KeyCode::Backspace => tui.delete_char(),
                    KeyCode::Left => tui.move_cursor_left(),
                    KeyCode::Right => tui.move_cursor_right(),
                    _ => {}
                }
            }
        }
    }
}

fn handle_section_key<S: KeyValueStore>(tui: &mut TuiApp<S>, code: KeyCode) {
    match (tui.section(), code) {
        (Section::Dashboard, KeyCode::Char('g')) => tui.get_started(),
        (Section::Calculator, KeyCode::Char('e') | KeyCode::Enter) => tui.enter_edit_mode(),
        (Section::Calculator, KeyCode::Char('s')) => tui.save(),
        (Section::Projects, KeyCode::Down | KeyCode::Char('j')) => tui.next_project(),
        (Section::Projects, KeyCode::Up | KeyCode::Char('k')) => tui.previous_project(),
        (Section::Projects, KeyCode::Char('f')) => tui.cycle_filter(),
        (Section::Projects, KeyCode::Char('i') | KeyCode::Enter) => tui.invest_selected(),
        (Section::Reports, KeyCode::Char('g')) => tui.generate_report(),
        (Section::Reports, KeyCode::Char('x')) => tui.export_report(),
        _ => {}
    }
}
