pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod lifecycle;
pub mod messages;
pub mod schedule;
pub mod task;
pub mod view;
