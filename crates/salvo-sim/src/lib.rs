//! Simulation engine for SALVO.
//!
//! Owns cities, missiles, research and special weapons, runs the fixed
//! per-turn transition, and produces GameViews for the frontend.

pub mod autopilot;
pub mod board;
pub mod city;
pub mod config;
pub mod engine;
pub mod missile;
pub mod missile_manager;
pub mod persistence;
pub mod scenario;
pub mod tech_tree;
pub mod wave;
pub mod weapons;

pub use config::GameConfig;
pub use engine::Game;
pub use salvo_core as core;
