//! Scene systems.
//!
//! This module groups all ECS systems that advance the simulation, apply
//! input and game rules, and produce render output.
//!
//! Submodules overview
//! - [`actions`] – observer applying input commands to the world
//! - [`animation`] – advance animation clips
//! - [`audio`] – forward audio cues to the audio owner
//! - [`bounds`] – hold the player inside the play area
//! - [`collision`] – rectangle overlap tests
//! - [`entitystore`] – commit deferred entity additions and removals
//! - [`gravity`] – fixed-step fall while jumping
//! - [`input`] – turn the player intent into motion per input policy
//! - [`lanerules`] – lane crossing rules and the scoring icon
//! - [`lanes`] – wrap lane entities around the view
//! - [`movement`] – integrate positions and rotations from velocities
//! - [`platformer`] – platform contact rules
//! - [`player`] – death path and respawn
//! - [`render`] – build the per-frame draw list
//! - [`script`] – timed text, branches, interactive boxes and ending
//! - [`time`] – update simulation time and delta

pub mod actions;
pub mod animation;
pub mod audio;
pub mod bounds;
pub mod collision;
pub mod entitystore;
pub mod gravity;
pub mod input;
pub mod lanerules;
pub mod lanes;
pub mod movement;
pub mod platformer;
pub mod player;
pub mod render;
pub mod script;
pub mod time;
