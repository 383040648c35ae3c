//! Domain modules built on the engines

pub mod io;
pub mod report;
pub mod seq;
