pub mod abstract_trait;
pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod model;
pub mod present;
pub mod service;
pub mod theme;
pub mod utils;
