//! Domain utility functions

pub mod codec;
