use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::FootprintError;

pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    Calculator,
    Projects,
    Reports,
}

impl Default for Section {
    fn default() -> Self {
        Section::Dashboard
    }
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Calculator,
        Section::Projects,
        Section::Reports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Calculator => "calculator",
            Section::Projects => "projects",
            Section::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Calculator => "Calculator",
            Section::Projects => "CDM Projects",
            Section::Reports => "Reports",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

impl FromStr for Section {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(Section::Dashboard),
            "calculator" => Ok(Section::Calculator),
            "projects" | "cdm-projects" => Ok(Section::Projects),
            "reports" => Ok(Section::Reports),
            _ => Err(FootprintError::InvalidArgument {
                action: "navigate".to_string(),
                reason: format!("unknown section '{}'", s),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Unrecognised values fall back to the default theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message. Nothing waits on it; the display side drops it once
/// `duration` has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            duration: NOTIFICATION_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("cdm-projects".parse::<Section>().unwrap(), Section::Projects);
        assert_eq!("Reports".parse::<Section>().unwrap(), Section::Reports);
        assert!("settings".parse::<Section>().is_err());
        assert_eq!(Section::Reports.index(), 3);
    }

    #[test]
    fn test_notification_duration_is_fixed() {
        assert_eq!(Notification::success("ok").duration, Duration::from_secs(3));
        assert_eq!(Notification::error("no").kind, NotificationKind::Error);
    }
}
