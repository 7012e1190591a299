use bevy_ecs::prelude::Resource;

/// Seeded random source for the scene (lane jitter, icon placement).
#[derive(Resource, Debug, Clone)]
pub struct SceneRng(pub fastrand::Rng);

impl SceneRng {
    pub fn with_seed(seed: u64) -> Self {
        SceneRng(fastrand::Rng::with_seed(seed))
    }
}
