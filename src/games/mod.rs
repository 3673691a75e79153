//! Game implementations.

pub mod durak;
