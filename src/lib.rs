//! A basic and an advanced calculator sharing one evaluation engine,
//! rendered as themed cards in the terminal.

pub mod calculator;
pub mod config;
pub mod items;
pub mod ui;
