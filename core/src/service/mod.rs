pub mod calculator;
pub mod catalog;
pub mod dto;
pub mod report;
pub mod snapshot_service;
