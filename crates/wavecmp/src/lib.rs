//! wavecmp - compare a reference track against decoder output frame by frame

pub mod config;
pub mod ui;
