//! Core runtime support: buffered file I/O and the worker pool

pub mod io;
pub mod parallel;
