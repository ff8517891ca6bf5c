//! Integration test crate for Pigmix.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the engine, the core types and the application layer to
//! verify they work together.


#[cfg(test)]
mod loading;

#[cfg(test)]
mod mixing;
