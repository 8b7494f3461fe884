pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::Config;
pub use error::{FootprintError, Result};
pub use input::{expand_key, parse_args, parse_footprint_input, parse_number, ParsedInput};
pub use model::coefficient::CoefficientTable;
pub use model::footprint::{DietType, FootprintInput, FootprintResult, FuelType};
pub use model::project::{Project, ProjectFilter, ProjectStatus};
pub use model::snapshot::{PartialSnapshot, Snapshot};
pub use model::ui::{Notification, NotificationKind, Section, Theme};
pub use repository::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use service::calculator::compute_footprint;
pub use service::dto::Dashboard;
pub use service::report::Report;
pub use service::snapshot_service::SnapshotStore;
pub use usecase::app::{Action, App, AppState};
