//! Command implementations

pub mod evaluate;
