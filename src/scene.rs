//! Scene controller.
//!
//! A [`Scene`] owns a bevy [`World`] built from a [`SceneDef`] table and the
//! chained [`Schedule`] that advances it one tick per frame. The application
//! drives it from outside:
//!
//! ```text
//! scene.do_action(cmd)   // zero or more input commands
//! scene.update(dt)       // one tick
//! scene.render()         // Frame for the renderer
//! scene.requested_transition()
//! ```
//!
//! Tick order:
//!
//! 1. commit pending entity additions and removals (always)
//! 2. timed script
//! 3. animations
//! 4. player input
//! 5. movement and lane wrapping
//! 6. gravity
//! 7. clamp after physics
//! 8. clamp before rules, then lane or platform rules, then the icon timer
//! 9. death recovery
//! 10. forward audio cues (always)
//!
//! Steps 2 to 9 are skipped while [`Paused`] is present.

use std::path::Path;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use log::{info, warn};

use crate::components::animation::Animation;
use crate::components::boundingbox::BoundingBox;
use crate::components::inputintent::InputIntent;
use crate::components::sprite::Sprite;
use crate::components::state::{PadState, PlayerState};
use crate::components::tag::EntityKind;
use crate::components::timer::Timer;
use crate::components::transform::Transform;
use crate::context::GameContext;
use crate::events::action::{ActionEvent, Command};
use crate::events::audio::AudioCmd;
use crate::events::switchdebug::switch_debug_observer;
use crate::level::{LevelError, LevelItem, read_level};
use crate::resources::animationstore::AnimationStore;
use crate::resources::audio::{AudioBridge, setup_audio, shutdown_audio};
use crate::resources::debugmode::{DebugMode, RenderFlags};
use crate::resources::entitystore::{EntityStore, spawn_tagged};
use crate::resources::paused::Paused;
use crate::resources::rng::SceneRng;
use crate::resources::scenedef::SceneDef;
use crate::resources::sceneflow::{NextScene, SceneTransition};
use crate::resources::scoreboard::{PadProgress, Scoreboard};
use crate::resources::script::ScriptState;
use crate::resources::worldtime::WorldTime;
use crate::systems::actions::on_action;
use crate::systems::animation::animate;
use crate::systems::audio::forward_audio_cmds;
use crate::systems::bounds::{clamp_player_after_physics, clamp_player_before_rules};
use crate::systems::entitystore::commit_entity_changes;
use crate::systems::gravity::apply_gravity;
use crate::systems::input::player_input;
use crate::systems::lanerules::{resolve_lane_rules, tick_icon_timers};
use crate::systems::lanes::wrap_lanes;
use crate::systems::movement::movement;
use crate::systems::platformer::resolve_platforms;
use crate::systems::player::{observe_player_death, player_recovery};
use crate::systems::render::{Frame, Renderer, build_frame};
use crate::systems::script::run_script;
use crate::systems::time::update_world_time;

/// Run condition: the simulation advances unless paused.
pub fn scene_running(paused: Option<Res<Paused>>) -> bool {
    paused.is_none()
}

pub struct Scene {
    world: World,
    schedule: Schedule,
    audio: AudioBridge,
    seed: u64,
}

impl Scene {
    pub fn new(def: SceneDef, ctx: GameContext) -> Self {
        let GameContext {
            scoreboard,
            audio,
            animations,
            seed,
            debug_boxes,
        } = ctx;

        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(EntityStore::new());
        world.insert_resource(scoreboard);
        world.insert_resource(PadProgress::default());
        world.insert_resource(animations);
        world.insert_resource(NextScene::default());
        world.insert_resource(RenderFlags::default());
        world.insert_resource(SceneRng::with_seed(seed));
        if debug_boxes {
            world.insert_resource(DebugMode {});
        }
        setup_audio(&mut world, audio.clone());
        if let Some(script) = &def.script {
            world.insert_resource(ScriptState::from_def(script));
        }

        spawn_layout(&mut world, &def);
        if let Some(music) = &def.music {
            world.write_message(AudioCmd::PlayMusic {
                id: music.clone(),
                looped: true,
            });
        }
        info!("scene {} ready", def.name);
        world.insert_resource(def);

        world.spawn(Observer::new(on_action));
        world.spawn(Observer::new(switch_debug_observer));
        world.spawn(Observer::new(observe_player_death));
        world.flush();

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                commit_entity_changes,
                (
                    run_script,
                    animate,
                    player_input,
                    movement,
                    wrap_lanes,
                    apply_gravity,
                    clamp_player_after_physics,
                    clamp_player_before_rules,
                    resolve_lane_rules,
                    resolve_platforms,
                    tick_icon_timers,
                    player_recovery,
                )
                    .chain()
                    .run_if(scene_running),
                forward_audio_cmds,
            )
                .chain(),
        );

        let mut scene = Self {
            world,
            schedule,
            audio,
            seed,
        };
        // the layout is visible from the first tick on
        scene.commit();
        scene
    }

    fn commit(&mut self) {
        if let Err(e) = self.world.run_system_once(commit_entity_changes) {
            warn!("entity commit failed: {}", e);
        }
    }

    /// Read a level file and queue its items for the next commit.
    pub fn load_level(&mut self, path: &Path) -> Result<usize, LevelError> {
        let items = read_level(path)?;
        self.spawn_level_items(&items);
        Ok(items.len())
    }

    pub fn spawn_level_items(&mut self, items: &[LevelItem]) {
        for item in items {
            match item {
                LevelItem::Background { texture, pos } => {
                    spawn_tagged(
                        &mut self.world,
                        EntityKind::Background,
                        Sprite::new(texture.clone(), *pos),
                    );
                }
            }
        }
    }

    /// Deliver one input command.
    pub fn do_action(&mut self, command: Command) {
        self.world.trigger(ActionEvent { command });
        self.world.flush();
    }

    /// Advance the scene by one tick of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn render(&mut self) -> Frame {
        match self.world.run_system_once(build_frame) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("cannot build frame: {}", e);
                Frame::default()
            }
        }
    }

    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        let frame = self.render();
        renderer.draw(&frame);
    }

    pub fn requested_transition(&self) -> Option<SceneTransition> {
        self.world.resource::<NextScene>().get()
    }

    pub fn is_paused(&self) -> bool {
        self.world.contains_resource::<Paused>()
    }

    /// Scene time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn def(&self) -> &SceneDef {
        self.world.resource::<SceneDef>()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        self.world.resource::<Scoreboard>()
    }

    pub fn player(&self) -> Option<Entity> {
        self.world.resource::<EntityStore>().first(EntityKind::Player)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Tear the scene down and hand back the application context.
    ///
    /// Cues still queued are flushed to the audio channel first.
    pub fn into_context(mut self) -> GameContext {
        let debug_boxes = self.world.contains_resource::<DebugMode>();
        let audio = shutdown_audio(&mut self.world).unwrap_or(self.audio);
        let scoreboard = self
            .world
            .remove_resource::<Scoreboard>()
            .unwrap_or_default();
        let animations = self
            .world
            .remove_resource::<AnimationStore>()
            .unwrap_or_default();
        GameContext {
            scoreboard,
            audio,
            animations,
            seed: self.seed,
            debug_boxes,
        }
    }
}

fn spawn_layout(world: &mut World, def: &SceneDef) {
    let player = &def.player;
    spawn_tagged(
        world,
        EntityKind::Player,
        (
            Transform::at(player.spawn),
            BoundingBox::new(player.size.x, player.size.y),
            Animation::new(player.idle_clip.clone()),
            InputIntent::default(),
            PlayerState::Grounded,
        ),
    );

    for lane in &def.lanes {
        let offset = world.resource_mut::<SceneRng>().0.f32() * lane.jitter;
        for i in 0..lane.count {
            let x = offset + i as f32 * lane.spacing;
            spawn_tagged(
                world,
                lane.kind,
                (
                    Transform::at(Vec2::new(x, lane.y))
                        .with_velocity(Vec2::new(lane.speed, 0.0))
                        .with_angular_velocity(lane.ang_vel),
                    BoundingBox::new(lane.size.x, lane.size.y),
                    Animation::new(lane.clip.clone()),
                ),
            );
        }
    }

    for pad in &def.pads {
        spawn_tagged(
            world,
            EntityKind::LillyPad,
            (
                Transform::at(pad.pos),
                BoundingBox::new(pad.size.x, pad.size.y),
                PadState::Free,
                Animation::new("pad"),
            ),
        );
    }

    for platform in &def.platforms {
        spawn_tagged(
            world,
            EntityKind::InvisibleCollisionBox,
            (
                Transform::at(platform.pos),
                BoundingBox::new(platform.size.x, platform.size.y),
            ),
        );
    }

    if let Some(icon) = &def.icon {
        if !def.pads.is_empty() {
            let index = world.resource_mut::<SceneRng>().0.usize(..def.pads.len());
            spawn_tagged(
                world,
                EntityKind::BugIcon,
                (
                    Transform::at(def.pads[index].pos),
                    BoundingBox::new(icon.size.x, icon.size.y),
                    Timer::new(icon.duration),
                    Animation::new(icon.clip.clone()),
                ),
            );
        }
    }
}
