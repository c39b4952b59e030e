//! Boredom OS boot stage
//!
//! The smallest kernel that does something visible: bind the text-mode
//! console, clear the screen and hand the console to `log`.
//!
//! # Architecture
//! - `boot`: entry sequence run from `_start`
//! - `config`: compile-time configuration (cargo features)

#![no_std]

pub mod boot;
pub mod config;
