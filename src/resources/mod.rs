//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the scene world and
//! accessed by systems during execution: timing, the entity store, scene
//! tables, script state, score keeping and collaborator bridges. Each
//! submodule documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – clip definitions reused across entities
//! - `audio` – channel bridge carrying audio cues out of the scene
//! - `debugmode` – presence toggles bounding-box overlays; render switches
//! - `entitystore` – ordered, deferred entity registry
//! - `gameconfig` – INI-backed settings
//! - `paused` – presence freezes the simulation
//! - `rng` – seeded random source
//! - `scenedef` – scene tables (layout, rules, script)
//! - `sceneflow` – scene transition requests
//! - `scoreboard` – score, lives and pad progress
//! - `script` – typewriter text and interactive box state
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod debugmode;
pub mod entitystore;
pub mod gameconfig;
pub mod paused;
pub mod rng;
pub mod scenedef;
pub mod sceneflow;
pub mod scoreboard;
pub mod script;
pub mod worldtime;
