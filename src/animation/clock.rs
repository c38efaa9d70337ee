//! Animation clock shared by every animated element

use bevy::prelude::*;

/// Elapsed time since the session started, sampled once per frame.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    /// Seconds since start; never decreases.
    pub elapsed: f32,
    /// Seconds covered by the current frame.
    pub delta: f32,
}

impl AnimationClock {
    /// Advance by one frame. Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.delta = delta;
        self.elapsed += delta;
    }
}

/// System sampling Bevy's frame time into the clock
pub fn advance_animation_clock(time: Res<Time>, mut clock: ResMut<AnimationClock>) {
    clock.tick(time.delta_secs());
}
