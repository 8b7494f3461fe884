use carbonwise_core::service::dto::result_lines;
use carbonwise_core::{AppState, KeyValueStore, NotificationKind, ProjectStatus, Section, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::tui::app::{InputMode, TuiApp};

// --- THEME ---
struct Palette {
    primary: Color,
    muted: Color,
    text: Color,
    good: Color,
    bad: Color,
}

const LIGHT: Palette = Palette {
    primary: Color::Green,
    muted: Color::Gray,
    text: Color::Black,
    good: Color::Green,
    bad: Color::Red,
};

const DARK: Palette = Palette {
    primary: Color::LightGreen,
    muted: Color::DarkGray,
    text: Color::White,
    good: Color::LightGreen,
    bad: Color::LightRed,
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

fn panel(title: &str, p: &Palette) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.muted))
}

pub fn draw<S: KeyValueStore>(f: &mut Frame, tui: &mut TuiApp<S>) {
    let size = f.area();
    let state = tui.app.state().clone();
    let p = palette(state.theme);

    // Header and Main Content Split
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let titles: Vec<Line> = Section::ALL.iter().map(|s| Line::from(s.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.section.index())
        .style(Style::default().fg(p.text))
        .highlight_style(Style::default().fg(p.primary).add_modifier(Modifier::BOLD))
        .block(panel("CARBONWISE", p));
    f.render_widget(tabs, main_chunks[0]);

    match state.section {
        Section::Dashboard => draw_dashboard(f, &state, p, main_chunks[1]),
        Section::Calculator => draw_calculator(f, tui, &state, p, main_chunks[1]),
        Section::Projects => draw_projects(f, tui, &state, p, main_chunks[1]),
        Section::Reports => draw_reports(f, &state, p, main_chunks[1]),
    }

    let help = match (&tui.input_mode, state.section) {
        (InputMode::Editing, _) => "Enter: Calculate | Esc: Cancel",
        (_, Section::Dashboard) => "g: Get started | Tab/1-4: Section | t: Theme | q: Quit",
        (_, Section::Calculator) => "e: Edit inputs | s: Save to dashboard | Tab/1-4: Section | q: Quit",
        (_, Section::Projects) => "j/k: Select | f: Filter | i: Invest | Tab/1-4: Section | q: Quit",
        (_, Section::Reports) => "g: Generate | x: Export | Tab/1-4: Section | q: Quit",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(p.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);

    draw_toast(f, tui, p, size);
}

fn stat_line<'a>(label: &'a str, value: String, p: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(p.muted)),
        Span::styled(value, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
    ])
}

fn draw_dashboard(f: &mut Frame, state: &AppState, p: &Palette, area: Rect) {
    let dashboard = &state.dashboard;
    let text = vec![
        Line::from(""),
        stat_line("Current Footprint: ", dashboard.footprint_display(), p),
        stat_line("CDM Credits:       ", dashboard.credits.to_string(), p),
        stat_line("Trees Planted:     ", dashboard.trees.to_string(), p),
        Line::from(""),
        Line::from(Span::styled(
            "Press g to calculate your monthly footprint.",
            Style::default().fg(p.primary),
        )),
    ];
    let widget = Paragraph::new(text).block(panel("Dashboard", p));
    f.render_widget(widget, area);
}

fn draw_calculator<S: KeyValueStore>(f: &mut Frame, tui: &TuiApp<S>, state: &AppState, p: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input line
            Constraint::Length(4), // Field help
            Constraint::Min(1),    // Result
        ])
        .split(area);

    let editing = matches!(tui.input_mode, InputMode::Editing);
    let input_style = if editing {
        Style::default().fg(p.primary)
    } else {
        Style::default().fg(p.text)
    };
    let input = Paragraph::new(tui.input.as_str())
        .style(input_style)
        .block(panel("Inputs", p));
    f.render_widget(input, chunks[0]);
    if editing {
        let offset = cursor_offset(&tui.input, tui.cursor_position, chunks[0].width.saturating_sub(2));
        f.set_cursor_position((chunks[0].x + 1 + offset, chunks[0].y + 1));
    }

    let fields = Paragraph::new(vec![
        Line::from("distance:<km>  fuel:petrol|diesel|electric  electricity:<kWh>"),
        Line::from("gas:<m³>  diet:vegetarian|non-vegetarian|vegan  waste:<kg/week>"),
    ])
    .style(Style::default().fg(p.muted))
    .block(Block::default().borders(Borders::NONE));
    f.render_widget(fields, chunks[1]);

    let Some(result) = &state.last_result else {
        f.render_widget(panel("Calculation Results", p), chunks[2]);
        return;
    };

    let rows: Vec<Row> = result_lines(result)
        .into_iter()
        .map(|line| {
            let style = if line.is_total {
                Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.text)
            };
            Row::new(vec![line.label, line.value]).style(style)
        })
        .collect();
    let table = Table::new(rows, [Constraint::Length(26), Constraint::Min(10)])
        .block(panel("Calculation Results", p));
    f.render_widget(table, chunks[2]);
}

/// Display column of the cursor, kept inside a field `width` columns wide.
fn cursor_offset(input: &str, cursor: usize, width: u16) -> u16 {
    let offset: usize = input
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    u16::try_from(offset).unwrap_or(u16::MAX).min(width)
}

/// Cuts `s` to at most `max` display columns.
fn truncate(s: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

fn draw_projects<S: KeyValueStore>(f: &mut Frame, tui: &mut TuiApp<S>, state: &AppState, p: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let rows: Vec<Row> = state
        .visible_projects
        .iter()
        .map(|project| {
            let status_style = match project.status {
                ProjectStatus::Active => Style::default().fg(p.good),
                ProjectStatus::Completed => Style::default().fg(p.muted),
            };
            Row::new(vec![
                Span::raw(project.id.to_string()),
                Span::styled(truncate(&project.name, 30), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(project.category.clone()),
                Span::styled(project.status.to_string(), status_style),
            ])
        })
        .collect();

    let title = format!("CDM Projects [{}]", state.filter);
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // ID
            Constraint::Min(20),    // Name
            Constraint::Length(18), // Type
            Constraint::Length(10), // Status
        ],
    )
    .header(Row::new(vec!["ID", "Name", "Type", "Status"]).style(Style::default().fg(p.primary)))
    .block(panel(&title, p))
    .row_highlight_style(Style::default().bg(p.muted).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");
    f.render_stateful_widget(table, chunks[0], &mut tui.project_state);

    let selected = tui
        .project_state
        .selected()
        .and_then(|i| state.visible_projects.get(i));
    let detail = match selected {
        Some(project) => Paragraph::new(vec![
            Line::from(Span::styled(project.name.as_str(), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(project.description.as_str()),
            Line::from(""),
            stat_line("CO₂ Reduction (tons): ", project.co2_reduction.to_string(), p),
            stat_line("CDM Credits:          ", project.credits_available.to_string(), p),
            stat_line("Location:             ", project.location.clone(), p),
            stat_line("Status:               ", project.status.to_string(), p),
        ]),
        None => Paragraph::new("No projects match this filter."),
    };
    f.render_widget(detail.wrap(Wrap { trim: true }).block(panel("Detail", p)), chunks[1]);
}

fn draw_reports(f: &mut Frame, state: &AppState, p: &Palette, area: Rect) {
    let text = match &state.report {
        Some(report) => report.render(),
        None => "Press g to generate the monthly report.".to_string(),
    };
    let widget = Paragraph::new(text)
        .style(Style::default().fg(p.text))
        .wrap(Wrap { trim: false })
        .block(panel("Reports", p));
    f.render_widget(widget, area);
}

fn draw_toast<S: KeyValueStore>(f: &mut Frame, tui: &TuiApp<S>, p: &Palette, area: Rect) {
    let Some((notification, _)) = &tui.toast else {
        return;
    };
    let color = match notification.kind {
        NotificationKind::Success => p.good,
        NotificationKind::Error => p.bad,
    };
    let width = (notification.message.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.y + 3,
        width,
        height: 3.min(area.height),
    };
    let toast = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(Clear, rect);
    f.render_widget(toast, rect);
}
