use carbonwise_core::service::dto::{result_lines, Dashboard};
use carbonwise_core::{AppState, FootprintResult, Notification, NotificationKind, Project};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Emissions")]
    value: String,
}

#[derive(Tabled)]
struct DashboardRow {
    #[tabled(rename = "Current Footprint")]
    footprint: String,
    #[tabled(rename = "CDM Credits")]
    credits: i64,
    #[tabled(rename = "Trees Planted")]
    trees: i64,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "CO₂ Reduction (t)")]
    co2_reduction: u64,
    #[tabled(rename = "Credits")]
    credits: u64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Location")]
    location: String,
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}

pub fn result_table(result: &FootprintResult) -> String {
    let rows: Vec<ResultRow> = result_lines(result)
        .into_iter()
        .map(|line| ResultRow {
            label: line.label,
            value: line.value,
        })
        .collect();
    styled(Table::new(rows))
}

pub fn dashboard_table(dashboard: &Dashboard) -> String {
    styled(Table::new(vec![DashboardRow {
        footprint: dashboard.footprint_display(),
        credits: dashboard.credits,
        trees: dashboard.trees,
    }]))
}

pub fn project_table(projects: &[Project]) -> String {
    let rows: Vec<ProjectRow> = projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id,
            name: p.name.clone(),
            category: p.category.clone(),
            co2_reduction: p.co2_reduction,
            credits: p.credits_available,
            status: p.status.to_string(),
            location: p.location.clone(),
        })
        .collect();
    styled(Table::new(rows))
}

pub fn notification_line(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => format!("✔ {}", notification.message),
        NotificationKind::Error => format!("✖ {}", notification.message),
    }
}

/// One-line view of the state after a raw `do` action.
pub fn state_summary(state: &AppState) -> String {
    let result = state
        .last_result
        .map(|r| r.total_text())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "section: {} | theme: {} | result: {} | saved: {} | credits: {} | trees: {} | filter: {} ({} projects)",
        state.section.as_str(),
        state.theme,
        result,
        state.dashboard.footprint_display(),
        state.dashboard.credits,
        state.dashboard.trees,
        state.filter,
        state.visible_projects.len(),
    )
}
