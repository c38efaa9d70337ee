//! Per-frame scene step
//!
//! Rates below are expressed per reference frame at 60 Hz and scaled by the
//! real frame delta, so motion speed does not depend on the display rate.
//! Orbital revolution is the only motion that honours the pause flag; axial
//! spin and all decorative pulsing are pure functions of elapsed time.

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::animation::clock::AnimationClock;
use crate::bodies::{BodyId, PLANET_COUNT, PLANETS};
use crate::ui::state::InteractionState;

pub const REFERENCE_FPS: f32 = 60.0;

/// Orbital radians per reference frame at base speed 1 and multiplier 1.
pub const ORBIT_STEP: f32 = 0.01;
pub const PLANET_SPIN_STEP: f32 = 0.01;
pub const SUN_SPIN_STEP: f32 = 0.005;
pub const CORONA_SPIN_STEP: f32 = -0.003;
pub const STARFIELD_SPIN_STEP_X: f32 = 0.0001;
pub const STARFIELD_SPIN_STEP_Y: f32 = 0.0002;
pub const GALAXY_SPIN_STEP: f32 = 0.0005;
pub const NEBULA_A_SPIN_STEP: f32 = 0.001;
pub const NEBULA_B_SPIN_STEP: f32 = -0.0008;

pub const HOVER_SCALE: f32 = 1.3;
pub const GLOW_SHELL_SCALE: f32 = 1.2;
pub const CORONA_SHELL_SCALE: f32 = 1.3;
pub const FLARE_SHELL_SCALE: f32 = 2.0;

/// Angle reached after `elapsed` seconds by a constant per-reference-frame rate.
pub fn spin_angle(step_per_frame: f32, elapsed: f32) -> f32 {
    (step_per_frame * REFERENCE_FPS * elapsed).rem_euclid(TAU)
}

pub fn glow_opacity(elapsed: f32) -> f32 {
    0.3 + (elapsed * 2.0).sin() * 0.1
}

pub fn corona_opacity(elapsed: f32) -> f32 {
    0.6 + (elapsed * 2.0).sin() * 0.2
}

/// Uniform scale of the outer flare shell.
pub fn flare_scale(elapsed: f32) -> f32 {
    FLARE_SHELL_SCALE * (1.0 + (elapsed * 3.0).sin() * 0.1)
}

pub fn nebula_a_opacity(elapsed: f32) -> f32 {
    0.3 + (elapsed * 0.5).sin() * 0.1
}

pub fn nebula_b_opacity(elapsed: f32) -> f32 {
    0.2 + (elapsed * 0.3).cos() * 0.1
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanetPose {
    /// Revolution around the star (radians about +Y).
    pub orbit_angle: f32,
    /// Rotation about the planet's own axis.
    pub spin_angle: f32,
    pub glow_opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SunPose {
    pub core_spin: f32,
    pub corona_spin: f32,
    pub corona_opacity: f32,
    pub flare_scale: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NebulaPose {
    pub spin: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackgroundPose {
    pub starfield_pitch: f32,
    pub starfield_yaw: f32,
    pub galaxy_yaw: f32,
    pub nebula_a: NebulaPose,
    pub nebula_b: NebulaPose,
}

/// Every animated parameter for one frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneFrame {
    pub planets: [PlanetPose; PLANET_COUNT],
    pub sun: SunPose,
    pub background: BackgroundPose,
}

impl SceneFrame {
    pub fn planet(&self, body: BodyId) -> Option<&PlanetPose> {
        body.planet_index().map(|i| &self.planets[i])
    }
}

/// Owns the only accumulated quantity in the scene: orbital angles.
#[derive(Resource, Default, Clone, Debug)]
pub struct SceneAnimator {
    orbit_angles: [f32; PLANET_COUNT],
}

impl SceneAnimator {
    #[cfg(test)]
    pub fn orbit_angles(&self) -> &[f32; PLANET_COUNT] {
        &self.orbit_angles
    }

    /// Advance one frame and return the parameters to apply.
    pub fn step(&mut self, clock: &AnimationClock, state: &InteractionState) -> SceneFrame {
        if !state.paused {
            let frames = clock.delta * REFERENCE_FPS;
            for ((angle, planet), multiplier) in self
                .orbit_angles
                .iter_mut()
                .zip(PLANETS.iter())
                .zip(state.speed_multipliers)
            {
                let advance = planet.base_angular_speed * multiplier * ORBIT_STEP * frames;
                *angle = (*angle + advance).rem_euclid(TAU);
            }
        }

        let t = clock.elapsed;
        let planet_spin = spin_angle(PLANET_SPIN_STEP, t);
        let glow = glow_opacity(t);
        let mut planets = [PlanetPose::default(); PLANET_COUNT];
        for (index, pose) in planets.iter_mut().enumerate() {
            let hovered = state.hovered == Some(BodyId::PLANETS[index]);
            *pose = PlanetPose {
                orbit_angle: self.orbit_angles[index],
                spin_angle: planet_spin,
                glow_opacity: glow,
                scale: if hovered { HOVER_SCALE } else { 1.0 },
            };
        }

        SceneFrame {
            planets,
            sun: SunPose {
                core_spin: spin_angle(SUN_SPIN_STEP, t),
                corona_spin: spin_angle(CORONA_SPIN_STEP, t),
                corona_opacity: corona_opacity(t),
                flare_scale: flare_scale(t),
            },
            background: BackgroundPose {
                starfield_pitch: spin_angle(STARFIELD_SPIN_STEP_X, t),
                starfield_yaw: spin_angle(STARFIELD_SPIN_STEP_Y, t),
                galaxy_yaw: spin_angle(GALAXY_SPIN_STEP, t),
                nebula_a: NebulaPose {
                    spin: spin_angle(NEBULA_A_SPIN_STEP, t),
                    opacity: nebula_a_opacity(t),
                },
                nebula_b: NebulaPose {
                    spin: spin_angle(NEBULA_B_SPIN_STEP, t),
                    opacity: nebula_b_opacity(t),
                },
            },
        }
    }
}

/// System running the animator once per frame
pub fn step_scene(
    clock: Res<AnimationClock>,
    state: Res<InteractionState>,
    mut animator: ResMut<SceneAnimator>,
    mut frame: ResMut<SceneFrame>,
) {
    *frame = animator.step(&clock, &state);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(
        animator: &mut SceneAnimator,
        clock: &mut AnimationClock,
        state: &InteractionState,
        frames: usize,
    ) -> SceneFrame {
        let mut frame = SceneFrame::default();
        for _ in 0..frames {
            clock.tick(FRAME);
            frame = animator.step(clock, state);
        }
        frame
    }

    #[test]
    fn test_orbit_advances_when_running() {
        let mut animator = SceneAnimator::default();
        let mut clock = AnimationClock::default();
        let state = InteractionState::default();
        let frame = run(&mut animator, &mut clock, &state, 1);
        // One reference frame of Earth at multiplier 1.
        assert!((frame.planets[2].orbit_angle - 0.01).abs() < 1e-6);
        // Mercury moves faster than Neptune.
        assert!(frame.planets[0].orbit_angle > frame.planets[7].orbit_angle);
    }

    #[test]
    fn test_pause_freezes_orbit_but_not_spin_or_pulses() {
        let mut animator = SceneAnimator::default();
        let mut clock = AnimationClock::default();
        let mut state = InteractionState::default();
        let before = run(&mut animator, &mut clock, &state, 10);

        state.toggle_pause();
        let after = run(&mut animator, &mut clock, &state, 7);

        for (a, b) in before.planets.iter().zip(after.planets.iter()) {
            assert_eq!(a.orbit_angle, b.orbit_angle);
            assert!(b.spin_angle > a.spin_angle);
            assert_ne!(a.glow_opacity, b.glow_opacity);
        }
        assert!(after.sun.core_spin > before.sun.core_spin);
        assert_ne!(after.sun.corona_opacity, before.sun.corona_opacity);
        assert_ne!(after.sun.flare_scale, before.sun.flare_scale);
        assert!(after.background.galaxy_yaw > before.background.galaxy_yaw);
        assert!(after.background.starfield_yaw > before.background.starfield_yaw);
        assert!(after.background.starfield_pitch > before.background.starfield_pitch);
        assert!(after.background.nebula_a.spin > before.background.nebula_a.spin);
        assert_ne!(
            after.background.nebula_a.opacity,
            before.background.nebula_a.opacity
        );
        assert_ne!(
            after.background.nebula_b.opacity,
            before.background.nebula_b.opacity
        );
    }

    #[test]
    fn test_paused_from_start_spin_matches_elapsed() {
        let mut animator = SceneAnimator::default();
        let mut clock = AnimationClock::default();
        let mut state = InteractionState::default();
        state.toggle_pause();
        let frame = run(&mut animator, &mut clock, &state, 30);
        assert!(frame.planets.iter().all(|p| p.orbit_angle == 0.0));
        let expected = PLANET_SPIN_STEP * REFERENCE_FPS * clock.elapsed;
        assert!((frame.planets[0].spin_angle - expected).abs() < 1e-5);
    }

    #[test]
    fn test_zero_multiplier_holds_one_planet() {
        let mut animator = SceneAnimator::default();
        let mut clock = AnimationClock::default();
        let mut state = InteractionState::default();
        state.set_speed(3, 0.0);
        let first = run(&mut animator, &mut clock, &state, 1);
        let later = run(&mut animator, &mut clock, &state, 50);
        assert_eq!(first.planets[3].orbit_angle, 0.0);
        assert_eq!(later.planets[3].orbit_angle, 0.0);
        assert!(later.planets[2].orbit_angle > first.planets[2].orbit_angle);
        assert!(later.planets[4].orbit_angle > first.planets[4].orbit_angle);
    }

    #[test]
    fn test_resume_does_not_catch_up() {
        let mut animator = SceneAnimator::default();
        let mut clock = AnimationClock::default();
        let mut state = InteractionState::default();
        state.toggle_pause();
        run(&mut animator, &mut clock, &state, 120);
        state.toggle_pause();
        let frame = run(&mut animator, &mut clock, &state, 1);
        assert!((frame.planets[2].orbit_angle - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_frame_rate_independence() {
        let state = InteractionState::default();

        let mut fast = SceneAnimator::default();
        let mut fast_clock = AnimationClock::default();
        for _ in 0..4 {
            fast_clock.tick(FRAME / 2.0);
            fast.step(&fast_clock, &state);
        }

        let mut slow = SceneAnimator::default();
        let mut slow_clock = AnimationClock::default();
        slow_clock.tick(FRAME * 2.0);
        slow.step(&slow_clock, &state);

        for (a, b) in fast.orbit_angles().iter().zip(slow.orbit_angles()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_hover_scales_single_planet() {
        let mut animator = SceneAnimator::default();
        let clock = AnimationClock::default();
        let mut state = InteractionState::default();
        state.set_hover(Some(BodyId::Mars));
        state.set_hover(Some(BodyId::Venus));
        let frame = animator.step(&clock, &state);
        let scaled: Vec<_> = frame
            .planets
            .iter()
            .enumerate()
            .filter(|(_, p)| p.scale != 1.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(scaled, vec![1]);
        assert_eq!(frame.planet(BodyId::Venus).map(|p| p.scale), Some(HOVER_SCALE));
        assert!(frame.planet(BodyId::Sun).is_none());
    }

    #[test]
    fn test_pulse_ranges() {
        for i in 0..200 {
            let t = i as f32 * 0.1;
            assert!((0.199..=0.401).contains(&glow_opacity(t)));
            assert!((0.399..=0.801).contains(&corona_opacity(t)));
            assert!((1.799..=2.201).contains(&flare_scale(t)));
            assert!((0.199..=0.401).contains(&nebula_a_opacity(t)));
            assert!((0.099..=0.301).contains(&nebula_b_opacity(t)));
        }
        assert!((glow_opacity(0.0) - 0.3).abs() < 1e-6);
        assert!((nebula_b_opacity(0.0) - 0.3).abs() < 1e-6);
    }
}
