//! Screens of the sample app and their navigation destinations

pub mod detail;
pub mod list;
