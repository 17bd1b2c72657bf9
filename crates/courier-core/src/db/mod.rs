//! Database layer for Courier's persisted app properties

mod connection;
mod migrations;

pub use connection::Database;
