pub mod support;

mod ask;
mod compare;
mod config;
mod locations;
mod logging;
mod paths;
mod route;
mod show;
