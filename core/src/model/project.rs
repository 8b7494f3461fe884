use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FootprintError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An emission-offset project. Reference data only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Tons of CO2.
    pub co2_reduction: u64,
    pub credits_available: u64,
    pub status: ProjectStatus,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Renewable,
    Status(ProjectStatus),
}

impl Default for ProjectFilter {
    fn default() -> Self {
        ProjectFilter::All
    }
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Renewable,
        ProjectFilter::Status(ProjectStatus::Active),
        ProjectFilter::Status(ProjectStatus::Completed),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Renewable => "renewable",
            ProjectFilter::Status(status) => status.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Renewable => project.category.to_lowercase().contains("renewable"),
            ProjectFilter::Status(status) => project.status == *status,
        }
    }

    /// The filter after this one, wrapping around.
    pub fn next(&self) -> Self {
        let pos = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl FromStr for ProjectFilter {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ProjectFilter::All),
            "renewable" => Ok(ProjectFilter::Renewable),
            "active" => Ok(ProjectFilter::Status(ProjectStatus::Active)),
            "completed" => Ok(ProjectFilter::Status(ProjectStatus::Completed)),
            _ => Err(FootprintError::InvalidArgument {
                action: "filter".to_string(),
                reason: format!("unknown filter '{}'", s),
            }),
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(category: &str, status: ProjectStatus) -> Project {
        Project {
            id: 1,
            name: "Test".to_string(),
            category: category.to_string(),
            description: String::new(),
            co2_reduction: 0,
            credits_available: 0,
            status,
            location: String::new(),
        }
    }

    #[test]
    fn test_renewable_matches_case_insensitive_substring() {
        let p = project("Community RENEWABLE Energy", ProjectStatus::Completed);
        assert!(ProjectFilter::Renewable.matches(&p));
        assert!(!ProjectFilter::Renewable.matches(&project("Forestry", ProjectStatus::Active)));
    }

    #[test]
    fn test_status_filter_is_exact() {
        let p = project("Forestry", ProjectStatus::Active);
        assert!(ProjectFilter::Status(ProjectStatus::Active).matches(&p));
        assert!(!ProjectFilter::Status(ProjectStatus::Completed).matches(&p));
    }

    #[test]
    fn test_parse_and_cycle() {
        assert_eq!("Renewable".parse::<ProjectFilter>().unwrap(), ProjectFilter::Renewable);
        assert_eq!(
            "completed".parse::<ProjectFilter>().unwrap(),
            ProjectFilter::Status(ProjectStatus::Completed)
        );
        assert!("solar".parse::<ProjectFilter>().is_err());

        let mut filter = ProjectFilter::All;
        for _ in 0..ProjectFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, ProjectFilter::All);
    }
}
