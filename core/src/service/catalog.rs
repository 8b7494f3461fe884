use crate::error::{FootprintError, Result};
use crate::model::project::{Project, ProjectFilter, ProjectStatus};

pub fn catalog() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Solar Power Plant - Rajasthan".to_string(),
            category: "Renewable Energy".to_string(),
            description: "50MW solar power plant reducing coal-based electricity generation".to_string(),
            co2_reduction: 45000,
            credits_available: 4500,
            status: ProjectStatus::Active,
            location: "Rajasthan, India".to_string(),
        },
        Project {
            id: 2,
            name: "Afforestation Project - Western Ghats".to_string(),
            category: "Forestry".to_string(),
            description: "Reforestation of degraded land with native species".to_string(),
            co2_reduction: 25000,
            credits_available: 2500,
            status: ProjectStatus::Active,
            location: "Karnataka, India".to_string(),
        },
        Project {
            id: 3,
            name: "Biomass Energy - Punjab".to_string(),
            category: "Waste Management".to_string(),
            description: "Conversion of agricultural waste to energy".to_string(),
            co2_reduction: 15000,
            credits_available: 1500,
            status: ProjectStatus::Completed,
            location: "Punjab, India".to_string(),
        },
        Project {
            id: 4,
            name: "Wind Farm - Tamil Nadu".to_string(),
            category: "Renewable Energy".to_string(),
            description: "100MW wind energy project replacing fossil fuel power".to_string(),
            co2_reduction: 35000,
            credits_available: 3500,
            status: ProjectStatus::Active,
            location: "Tamil Nadu, India".to_string(),
        },
    ]
}

/// Keeps catalog order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).cloned().collect()
}

pub fn find_project(projects: &[Project], id: u32) -> Result<&Project> {
    projects
        .iter()
        .find(|p| p.id == id)
        .ok_or(FootprintError::UnknownProject(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_catalog_has_four_projects() {
        let projects = catalog();
        assert_eq!(ids(&projects), vec![1, 2, 3, 4]);
        assert_eq!(projects[2].status, ProjectStatus::Completed);
    }

    #[test]
    fn test_filter_all_is_unfiltered_in_order() {
        let projects = catalog();
        assert_eq!(filter_projects(&projects, ProjectFilter::All), projects);
    }

    #[test]
    fn test_filter_renewable() {
        let filtered = filter_projects(&catalog(), ProjectFilter::Renewable);
        assert_eq!(ids(&filtered), vec![1, 4]);
    }

    #[test]
    fn test_filter_by_status() {
        let projects = catalog();
        let active = filter_projects(&projects, ProjectFilter::Status(ProjectStatus::Active));
        let completed = filter_projects(&projects, ProjectFilter::Status(ProjectStatus::Completed));

        assert_eq!(ids(&active), vec![1, 2, 4]);
        assert_eq!(ids(&completed), vec![3]);
    }

    #[test]
    fn test_find_project() {
        let projects = catalog();
        assert_eq!(find_project(&projects, 2).unwrap().name, "Afforestation Project - Western Ghats");
        assert!(matches!(find_project(&projects, 9), Err(FootprintError::UnknownProject(9))));
    }
}
