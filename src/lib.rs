pub mod boundary;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod lookup;
pub mod show;
pub mod ui;
pub mod view;
