//! Core value types for the Yiield security score

pub mod breakdown;
pub mod dossier;
pub mod factors;
pub mod pool;
pub mod rating;
