//! Validators over a spec repository.

pub mod aria;
pub mod elements;
pub mod serialization;
