use bevy_ecs::prelude::*;

use crate::components::inputintent::InputIntent;
use crate::components::live::Live;
use crate::components::transform::Transform;
use crate::resources::worldtime::WorldTime;

/// Integrate velocity and angular velocity for every live entity that is not
/// driven by player input.
pub fn movement(
    mut query: Query<&mut Transform, (With<Live>, Without<InputIntent>)>,
    time: Res<WorldTime>,
) {
    for mut transform in query.iter_mut() {
        transform.integrate(time.delta);
    }
}
