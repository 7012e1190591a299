//! Audio cue forwarding.
//!
//! [`forward_audio_cmds`] drains every [`AudioCmd`] queued in the world and
//! pushes it into the [`AudioBridge`] channel. It runs last in every tick,
//! including paused ones, so cues written by rule systems and by input
//! observers reach the audio owner within the same frame. Draining keeps a
//! cue from being sent twice, and whatever is still queued when the scene is
//! torn down is flushed by
//! [`shutdown_audio`](crate::resources::audio::shutdown_audio).

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;

/// Forward ECS AudioCmd messages to the audio owner via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut msgs: ResMut<Messages<AudioCmd>>) {
    for cmd in msgs.drain() {
        // receiver gone means nobody listens; drop silently
        let _ = bridge.tx_cmd.send(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::audio::setup_audio;
    use bevy_ecs::system::RunSystemOnce;

    #[test]
    fn test_cues_are_forwarded_once() {
        let mut world = World::new();
        let (bridge, rx) = AudioBridge::channel();
        setup_audio(&mut world, bridge);

        world.write_message(AudioCmd::fx("hop"));
        let mut schedule = Schedule::default();
        schedule.add_systems(forward_audio_cmds);
        schedule.run(&mut world);
        schedule.run(&mut world);

        let got: Vec<AudioCmd> = rx.try_iter().collect();
        assert_eq!(got, vec![AudioCmd::fx("hop")]);

        // nothing else was queued
        world.run_system_once(forward_audio_cmds).unwrap();
        assert!(rx.try_recv().is_err());
    }
}
