//! Command implementations

pub mod ask;
pub mod compare;
pub mod config;
pub mod dispatch;
pub mod locations;
pub mod paths;
pub mod route;
pub mod show;
