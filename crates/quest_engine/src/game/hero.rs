//! Hero control translation.
//!
//! The hero (actor index 0) is driven by the shared controls state rather
//! than a behavior script. Each frame of an active scene, the stick state is
//! translated into motion-model transitions: forward input walks via `goto`,
//! turn input retargets the heading, and no input comes to a full stop.

use crate::foundation::math::Vec3;
use crate::foundation::time::Time;
use crate::game::actor::Actor;
use crate::input::ControlsState;

/// Heading lead, in radians, the hero chases at full stick deflection. The
/// motion model's interpolation turns this into a smooth angular velocity.
const HERO_TURN_LEAD: f32 = 1.5;

/// How far ahead, in world units, the walking target is projected.
const HERO_LOOKAHEAD: f32 = 1.0;

/// Translate the controls state into hero motion for this frame.
pub fn update_hero(actor: &mut Actor, controls: &ControlsState, _time: Time) {
    let turning = controls.turn.abs() > f32::EPSILON;
    let walking = controls.forward_speed.abs() > f32::EPSILON;

    if !turning && !walking {
        if actor.is_turning() || actor.is_walking() {
            actor.stop();
        }
        return;
    }

    let heading = if turning {
        actor.physics.angle + controls.turn * HERO_TURN_LEAD
    } else {
        actor.physics.angle
    };

    if walking {
        // Project a target along the desired heading; negative forward input
        // walks toward a point behind the hero, turning them around.
        let (sin, cos) = heading.sin_cos();
        let direction = Vec3::new(sin, 0.0, cos) * controls.forward_speed.signum();
        let target = actor.physics.position + direction * HERO_LOOKAHEAD;
        actor.goto(target);
    } else {
        // Turn in place.
        if actor.is_walking() {
            actor.stop();
        }
        actor.set_angle(heading);
    }
}
