pub mod cli;
pub mod config;
pub mod provider;
pub mod web;
pub mod window;
