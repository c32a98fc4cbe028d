// ABOUTME: Library crate for stepper exposing the step controller and the wizard TUI pieces

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod stepper;
