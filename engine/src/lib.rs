//! Deterministic scene population for the bouncing-balls dataset generator.
//!
//! Builds the boxed room, spawns a randomized ball set, and places every ball
//! inside the spawn volume without overlap. Physics simulation and rendering
//! consume the exported manifest downstream.

pub mod body;
pub mod error;
pub mod placement;
pub mod scene;
pub mod shape;
pub mod spawn;
pub mod volume;
pub mod world;
