//! Campath Core Library
//!
//! Campus navigation engine: campus tables, graph construction, BFS/DFS/UCS/A*
//! search, algorithm comparison, route formatting, custom paths and a
//! pattern-based chat dispatcher.

pub mod campus;
pub mod chat;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod paths;
pub mod records;
pub mod route;
pub mod runner;

pub use runner::{compare_algorithms, find_path, run_algorithms};
