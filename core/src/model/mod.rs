pub mod coefficient;
pub mod footprint;
pub mod project;
pub mod snapshot;
pub mod ui;
