//! Configuration parsing for task sets

pub mod tasks;
