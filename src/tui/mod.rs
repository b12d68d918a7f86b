//! Terminal front-end. Rendering uses `ratatui`, input comes from `crossterm`.

pub mod app;
pub mod controller;
mod ui;
