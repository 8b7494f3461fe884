#[cfg(test)]
mod tests {
    use crate::error::FootprintError;
    use crate::model::coefficient::CoefficientTable;
    use crate::model::footprint::{DietType, FootprintInput, FuelType};
    use crate::model::project::{ProjectFilter, ProjectStatus};
    use crate::model::ui::{NotificationKind, Section, Theme};
    use crate::repository::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
    use crate::service::snapshot_service::{CREDITS_KEY, FOOTPRINT_KEY, THEME_KEY, TREES_KEY};
    use crate::usecase::app::{Action, App, SAVE_MESSAGE};
    use tempfile::TempDir;

    fn reference_input() -> FootprintInput {
        FootprintInput {
            car_distance_km: 100.0,
            fuel_type: FuelType::Petrol,
            electricity_kwh: 50.0,
            gas_usage_m3: 10.0,
            diet_type: DietType::NonVegetarian,
            waste_kg_per_week: 5.0,
        }
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starts_on_dashboard_with_blank_state() {
        let kv = MemoryKeyValueStore::new();
        let app = App::new(&kv, CoefficientTable::standard()).unwrap();
        let state = app.state();

        assert_eq!(state.section, Section::Dashboard);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.dashboard.footprint_text, None);
        assert_eq!(state.dashboard.credits, 0);
        assert!(state.last_result.is_none());
        assert_eq!(state.visible_projects.len(), 4);
    }

    #[test]
    fn test_rehydrates_from_storage() {
        let kv = MemoryKeyValueStore::with_values([
            (FOOTPRINT_KEY, "486.00 kg CO₂"),
            (CREDITS_KEY, "5"),
            (TREES_KEY, "48"),
            (THEME_KEY, "dark"),
        ]);
        let app = App::new(&kv, CoefficientTable::standard()).unwrap();
        let state = app.state();

        assert_eq!(state.dashboard.footprint_text.as_deref(), Some("486.00 kg CO₂"));
        assert_eq!(state.dashboard.credits, 5);
        assert_eq!(state.dashboard.trees, 48);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_calculate_then_save() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();

        app.dispatch(Action::Calculate(reference_input())).unwrap();
        let result = app.state().last_result.unwrap();
        assert!((result.total_kg - 486.0).abs() < 1e-9);
        // Calculating alone persists nothing
        assert_eq!(kv.get(FOOTPRINT_KEY).unwrap(), None);

        app.dispatch(Action::SaveFootprint).unwrap();
        assert_eq!(app.state().dashboard.footprint_text.as_deref(), Some("486.00 kg CO₂"));
        assert_eq!(app.state().dashboard.credits, 0);
        assert_eq!(app.state().dashboard.trees, 23);
        assert_eq!(kv.get(TREES_KEY).unwrap(), Some("23".to_string()));

        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, SAVE_MESSAGE);
        assert!(app.take_notifications().is_empty());
    }

    #[test]
    fn test_save_without_calculation_fails() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();

        let err = app.dispatch(Action::SaveFootprint).unwrap_err();
        assert!(matches!(err, FootprintError::NothingToSave));
    }

    #[test]
    fn test_failed_calculation_clears_previous_result() {
        let mut table = CoefficientTable::standard();
        table.transportation.remove("diesel");
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, table).unwrap();

        app.dispatch(Action::Calculate(reference_input())).unwrap();
        let diesel = FootprintInput {
            fuel_type: FuelType::Diesel,
            ..reference_input()
        };
        assert!(app.dispatch(Action::Calculate(diesel)).is_err());
        assert!(app.state().last_result.is_none());
    }

    #[test]
    fn test_investment_adds_to_saved_snapshot() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();
        app.dispatch(Action::Calculate(reference_input())).unwrap();
        app.dispatch(Action::SaveFootprint).unwrap();
        app.take_notifications();

        app.dispatch(Action::SimulateInvestment(4)).unwrap();

        let dashboard = &app.state().dashboard;
        assert_eq!(dashboard.credits, 5);
        assert_eq!(dashboard.trees, 48);
        assert_eq!(dashboard.footprint_text.as_deref(), Some("486.00 kg CO₂"));
        assert_eq!(kv.get(CREDITS_KEY).unwrap(), Some("5".to_string()));

        let notifications = app.take_notifications();
        assert_eq!(
            notifications[0].message,
            "Successfully invested in Wind Farm - Tamil Nadu! +5 CDM Credits earned."
        );
    }

    #[test]
    fn test_investment_in_unknown_project_leaves_storage_alone() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();

        app.handle(Action::SimulateInvestment(42));

        assert_eq!(kv.get(CREDITS_KEY).unwrap(), None);
        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Error);
        assert!(notifications[0].message.contains("42"));
    }

    #[test]
    fn test_huge_distance_saturates_counts() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();
        let huge = FootprintInput {
            car_distance_km: 1e308,
            ..reference_input()
        };

        app.dispatch(Action::Calculate(huge)).unwrap();
        app.dispatch(Action::SaveFootprint).unwrap();
        assert_eq!(kv.get(CREDITS_KEY).unwrap(), Some(i64::MAX.to_string()));

        app.dispatch(Action::SimulateInvestment(1)).unwrap();
        assert_eq!(app.state().dashboard.credits, i64::MAX);
        assert_eq!(app.state().dashboard.trees, i64::MAX);

        app.dispatch(Action::GenerateReport).unwrap();
        let report = app.state().report.clone().unwrap();
        assert_eq!(report.impact.cars_removed, i64::MAX);
        assert_eq!(report.impact.waste_recycled_kg, i64::MAX);
    }

    #[test]
    fn test_large_tree_count_report_does_not_wrap() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();
        let large = FootprintInput {
            car_distance_km: 5e18,
            ..reference_input()
        };

        app.dispatch(Action::Calculate(large)).unwrap();
        app.dispatch(Action::SaveFootprint).unwrap();
        app.dispatch(Action::GenerateReport).unwrap();

        let report = app.state().report.clone().unwrap();
        assert!(report.trees > i64::MAX / 100);
        assert_eq!(report.impact.waste_recycled_kg, i64::MAX);
        assert!(report.impact.cars_removed > 0);
    }

    #[test]
    fn test_filter_and_navigation_reset() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();

        app.dispatch(Action::FilterProjects(ProjectFilter::Status(ProjectStatus::Completed))).unwrap();
        let ids: Vec<u32> = app.state().visible_projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);

        app.dispatch(Action::Navigate(Section::Projects)).unwrap();
        assert_eq!(app.state().section, Section::Projects);
        assert_eq!(app.state().filter, ProjectFilter::All);
        assert_eq!(app.state().visible_projects.len(), 4);

        app.dispatch(Action::GetStarted).unwrap();
        assert_eq!(app.state().section, Section::Calculator);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let kv = MemoryKeyValueStore::new();
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();

        app.dispatch(Action::ToggleTheme).unwrap();
        assert_eq!(app.state().theme, Theme::Dark);
        assert_eq!(kv.get(THEME_KEY).unwrap(), Some("dark".to_string()));

        app.dispatch(Action::ToggleTheme).unwrap();
        assert_eq!(kv.get(THEME_KEY).unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_report_reflects_dashboard_and_export_only_notifies() {
        let kv = MemoryKeyValueStore::with_values([(CREDITS_KEY, "3"), (TREES_KEY, "10")]);
        let mut app = App::new(&kv, CoefficientTable::standard()).unwrap();

        app.dispatch(Action::GenerateReport).unwrap();
        let report = app.state().report.clone().unwrap();
        assert_eq!(report.current_footprint, "0 kg CO₂");
        assert_eq!(report.impact.cars_removed, 6);
        assert_eq!(report.impact.homes_powered, 15);
        assert_eq!(report.impact.waste_recycled_kg, 1000);

        let before = app.state().clone();
        app.dispatch(Action::ExportReport).unwrap();
        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].message.starts_with("Report exported successfully!"));
        assert_eq!(app.state().report, before.report);
        assert_eq!(app.state().dashboard, before.dashboard);
    }

    #[test]
    fn test_action_table_resolution() {
        assert_eq!(Action::parse("save", &[]).unwrap(), Action::SaveFootprint);
        assert_eq!(Action::parse("exp", &[]).unwrap(), Action::ExportReport);
        assert_eq!(Action::parse("inv", &args(&["3"])).unwrap(), Action::SimulateInvestment(3));
        assert_eq!(
            Action::parse("filter", &args(&["renewable"])).unwrap(),
            Action::FilterProjects(ProjectFilter::Renewable)
        );
        assert_eq!(
            Action::parse("nav", &args(&["reports"])).unwrap(),
            Action::Navigate(Section::Reports)
        );
        assert_eq!(
            Action::parse("calc", &args(&["dis:100", "die:non-vegetarian", "e:50", "g:10", "w:5"])).unwrap(),
            Action::Calculate(reference_input())
        );

        // "s" matches start and save
        assert!(matches!(Action::parse("s", &[]), Err(FootprintError::AmbiguousKey { .. })));
        assert!(matches!(Action::parse("print", &[]), Err(FootprintError::UnknownKey(_))));
        assert!(matches!(
            Action::parse("invest", &args(&["wind"])),
            Err(FootprintError::InvalidArgument { .. })
        ));
        assert!(Action::parse("report", &args(&["now"])).is_err());
    }

    #[test]
    fn test_state_survives_restart_with_file_store() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
            let mut app = App::new(store, CoefficientTable::standard()).unwrap();
            app.dispatch(Action::Calculate(reference_input())).unwrap();
            app.dispatch(Action::SaveFootprint).unwrap();
            app.dispatch(Action::SimulateInvestment(1)).unwrap();
            app.dispatch(Action::ToggleTheme).unwrap();
        }

        let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
        let app = App::new(store, CoefficientTable::standard()).unwrap();
        let state = app.state();
        assert_eq!(state.dashboard.footprint_text.as_deref(), Some("486.00 kg CO₂"));
        assert_eq!(state.dashboard.credits, 5);
        assert_eq!(state.dashboard.trees, 48);
        assert_eq!(state.theme, Theme::Dark);
    }
}
