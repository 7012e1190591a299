//! Purrfrog library.
//!
//! A lane crossing arcade game and a narrative platformer running on one
//! bevy_ecs scene loop. The modules are exposed for the binary and for the
//! integration tests.
//!
//! - [`components`] – entity data (transform, bounding box, animation, state)
//! - [`context`] – application context handed from scene to scene
//! - [`events`] – input commands, audio cues and rule events
//! - [`game`] – built-in scene tables and the animation catalogue
//! - [`level`] – level description reader
//! - [`resources`] – world resources (entity store, scene table, script)
//! - [`scene`] – the scene controller and its tick schedule
//! - [`systems`] – simulation, rule and render systems

pub mod components;
pub mod context;
pub mod events;
pub mod game;
pub mod level;
pub mod resources;
pub mod scene;
pub mod systems;
