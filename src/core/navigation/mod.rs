pub mod commands;
pub mod viewport_controller;
