pub mod config;
pub mod humanize;
pub mod observability;
pub mod ops;
pub mod store;
