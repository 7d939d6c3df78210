//! onAirChat terminal front end.
//!
//! This crate provides the command-line interface, the `events` listing
//! command and the interactive chat screen.

pub mod cli;
pub mod commands;
pub mod tui;
