// Domain layer - Core types and pure geographic primitives
pub mod error;
pub mod food;
pub mod footprint;
pub mod geo;
pub mod history;
pub mod motion;
pub mod policy;
pub mod station;
