pub mod cms;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod types;
pub mod web;
