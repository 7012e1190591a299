//! Event types and observers used by the scene.
//!
//! This module groups the domain events exchanged across systems and the
//! observers that react to them. Events provide a decoupled way for input,
//! rules and collaborators to communicate.
//!
//! Submodules:
//! - [`action`] – input commands delivered to the scene
//! - [`audio`] – audio cues sent to the audio owner
//! - [`player`] – player death notifications
//! - [`switchdebug`] – toggle bounding-box overlays on/off
pub mod action;
pub mod audio;
pub mod player;
pub mod switchdebug;
