#![allow(clippy::missing_errors_doc)]
#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod coordinator;
mod prelude;
pub mod quantity;
pub mod sensor;
pub mod tables;
pub mod units;
