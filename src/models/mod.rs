pub mod container;
pub mod error;
pub mod forms;
pub mod menu;
pub mod schedule;
pub mod session;
pub mod settings;
