//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! a scene. Components are plain data; behavior lives in the systems.
//!
//! Submodules overview:
//! - [`animation`] – playback state of a sprite animation clip
//! - [`boundingbox`] – centered axis-aligned box used for collision tests
//! - [`inputintent`] – direction bitmask requested by the player
//! - [`live`] – marker for entities committed by the entity store
//! - [`sprite`] – static texture anchored by its top-left corner
//! - [`state`] – discrete player, pad and box states
//! - [`tag`] – behavioral class of an entity
//! - [`timer`] – elapsed/duration countdown
//! - [`transform`] – position, velocity and rotation

pub mod animation;
pub mod boundingbox;
pub mod inputintent;
pub mod live;
pub mod sprite;
pub mod state;
pub mod tag;
pub mod timer;
pub mod transform;
