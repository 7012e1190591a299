use bevy_ecs::message::Message;

/// Audio cues emitted by the scene. Playback belongs to the receiver of the
/// [`AudioBridge`](crate::resources::audio::AudioBridge) channel.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    VolumeMusic { id: String, vol: f32 },
    PlayFx { id: String },
}

impl AudioCmd {
    pub fn fx(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.to_string() }
    }
}
