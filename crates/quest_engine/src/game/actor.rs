//! Actors: the simulated entities a scene is made of.
//!
//! Each actor carries a kinematic motion state machine (idle / turning /
//! walking), an animation playback state, and an optional behavior script.
//! Motion state changes only through the explicit transitions `goto`,
//! `set_angle` and `stop`; the per-frame integration step derives
//! displacement and rotation purely from current state and elapsed time.

use crate::foundation::math::{angles, constants, Quat, Vec3};
use crate::foundation::time::Time;
use crate::game::anim::{AnimState, ModelProvider};
use crate::game::behavior::{ActorBehavior, BehaviorError};
use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Static flags carried by scene data for each actor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ActorStaticFlags: u32 {
        /// Actor participates in actor-actor collision.
        const COLLIDE_WITH_OBJ = 0x1;
        /// Actor starts hidden.
        const HIDDEN = 0x200;
        /// Actor is a flat sprite, not a posed model.
        const SPRITE = 0x400;
    }
}

/// Static description an actor is instantiated from at scene-load time.
///
/// Angles are stored in scene-data units (0..4096 per turn) and converted to
/// radians at the construction boundary; everything downstream works in
/// radians.
#[derive(Debug, Clone)]
pub struct ActorProps {
    /// Stable index inside the owning scene. Index 0 is the hero.
    pub index: usize,
    /// Spawn position.
    pub pos: [f32; 3],
    /// Hit points. Zero-life actors without a body are spawned invisible.
    pub life: i32,
    /// Static flags from scene data.
    pub static_flags: ActorStaticFlags,
    /// Model entity index (asset-side identifier, opaque here).
    pub entity_index: i32,
    /// Body index; negative means no renderable body.
    pub body_index: i32,
    /// Initial animation index.
    pub anim_index: i32,
    /// Initial heading in scene-data angle units.
    pub angle: f32,
    /// Turning speed divisor; larger is slower.
    pub speed: f32,
}

/// Motion state of one actor. Entered only through [`Actor::goto`],
/// [`Actor::set_angle`] and [`Actor::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// At rest; heading held, no displacement.
    #[default]
    Idle,
    /// Interpolating heading toward a target angle.
    Turning,
    /// Advancing along the current heading using animation steps.
    Walking,
    /// Turning toward a destination while walking to it.
    TurningAndWalking,
}

impl MotionState {
    /// Whether destination-angle tracking runs this frame.
    pub fn is_turning(self) -> bool {
        matches!(self, Self::Turning | Self::TurningAndWalking)
    }

    /// Whether animation-step displacement runs this frame.
    pub fn is_walking(self) -> bool {
        matches!(self, Self::Walking | Self::TurningAndWalking)
    }

    fn with_turning(self) -> Self {
        if self.is_walking() {
            Self::TurningAndWalking
        } else {
            Self::Turning
        }
    }
}

/// Kinematic working state for one actor.
///
/// Invariant: `angle` and `dest_angle` stay on a consistent branch of the
/// circle. After the unwrap adjustment in [`Actor::goto`] they never differ
/// by more than pi, so interpolation always takes the shorter arc.
#[derive(Debug, Clone)]
pub struct ActorPhysics {
    /// Current world position.
    pub position: Vec3,
    /// Current world orientation (yaw-only for walking actors).
    pub orientation: Quat,
    /// Destination point, present only while walking toward one.
    pub destination: Option<Vec3>,
    /// Displacement computed this frame; applied by the physics pass.
    pub step: Vec3,
    /// Current heading in radians.
    pub angle: f32,
    /// Target heading in radians.
    pub dest_angle: f32,
}

/// Errors surfaced by the per-actor update. Isolated by the scene pass:
/// logged once, then skipped for the frame.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The actor's behavior script failed.
    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

/// A simulated entity: position, orientation, animation, optional script.
pub struct Actor {
    /// Stable index inside the owning scene.
    pub index: usize,
    /// Static properties from scene data.
    pub props: ActorProps,
    /// Kinematic state.
    pub physics: ActorPhysics,
    /// Animation playback state.
    pub anim_state: AnimState,
    /// Whether the renderer should draw this actor.
    pub is_visible: bool,
    /// Sprite actors have no posed model and skip model updates.
    pub is_sprite: bool,
    /// Killed actors are skipped by every pass and never resurrected.
    pub is_killed: bool,
    /// Index of the actor that hit this one during the current frame's
    /// physics pass. Cleared at the start of every scene pass.
    pub was_hit_by: Option<usize>,
    motion: MotionState,
    has_model: bool,
    behavior: Option<Box<dyn ActorBehavior>>,
}

impl Actor {
    /// Build an actor from its load-time description.
    pub fn from_props(props: ActorProps) -> Self {
        let angle = angles::game_angle_to_rad(props.angle);
        let is_sprite = props.static_flags.contains(ActorStaticFlags::SPRITE);
        let is_visible = !props.static_flags.contains(ActorStaticFlags::HIDDEN)
            && (props.life > 0 || props.body_index >= 0);
        let has_model = !is_sprite && props.body_index >= 0;
        let physics = ActorPhysics {
            position: Vec3::new(props.pos[0], props.pos[1], props.pos[2]),
            orientation: angles::yaw_quaternion(angle),
            destination: None,
            step: Vec3::zeros(),
            angle,
            dest_angle: angle,
        };
        Self {
            index: props.index,
            physics,
            anim_state: AnimState::new(),
            is_visible,
            is_sprite,
            is_killed: false,
            was_hit_by: None,
            motion: MotionState::Idle,
            has_model,
            behavior: None,
            props,
        }
    }

    /// Attach a behavior script.
    pub fn with_behavior(mut self, behavior: Box<dyn ActorBehavior>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Current motion state.
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// Whether destination-angle tracking is active.
    pub fn is_turning(&self) -> bool {
        self.motion.is_turning()
    }

    /// Whether animation-step displacement is active.
    pub fn is_walking(&self) -> bool {
        self.motion.is_walking()
    }

    /// Whether this actor has a renderable, animatable model.
    pub fn has_model(&self) -> bool {
        self.has_model
    }

    /// Mark the actor as killed. It stays in the scene's actor list (removal
    /// mid-iteration is forbidden) but is skipped by every pass from now on.
    pub fn kill(&mut self) {
        self.is_killed = true;
        self.is_visible = false;
    }

    /// Walk toward a point. Returns the planar distance to it.
    ///
    /// The bearing is unwrapped across the +-pi discontinuity: if the target
    /// bearing sits on the opposite sign branch from the current target angle
    /// and is more than a quarter turn away, a full turn is added or
    /// subtracted so interpolation takes the shorter arc instead of spinning
    /// the long way around.
    pub fn goto(&mut self, target: Vec3) -> f32 {
        self.physics.destination = Some(target);
        let mut dest_angle = angles::angle_to(&self.physics.position, &target);
        let sign_current: f32 = if self.physics.dest_angle > 0.0 { 1.0 } else { -1.0 };
        let sign_target: f32 = if dest_angle > 0.0 { 1.0 } else { -1.0 };
        if (sign_current - sign_target).abs() > f32::EPSILON
            && dest_angle.abs() > constants::QUARTER_PI
        {
            if sign_current < 0.0 {
                dest_angle -= constants::TAU;
            } else {
                dest_angle += constants::TAU;
            }
        }
        self.physics.dest_angle = dest_angle;
        self.motion = MotionState::TurningAndWalking;
        self.get_distance(&target)
    }

    /// Turn toward a heading given in radians, without a position goal.
    pub fn set_angle(&mut self, angle: f32) {
        self.motion = self.motion.with_turning();
        self.physics.dest_angle = angle;
    }

    /// Turn toward a heading given in scene-data angle units.
    pub fn set_game_angle(&mut self, angle: f32) {
        self.props.angle = angle;
        self.set_angle(angles::game_angle_to_rad(angle));
    }

    /// Rotate the heading instantly by a relative angle, shifting target and
    /// current angle together so the shorter-arc invariant is preserved.
    pub fn rotate_heading(&mut self, delta_angle: f32) {
        self.physics.angle += delta_angle;
        self.physics.dest_angle += delta_angle;
        self.physics.orientation = angles::yaw_quaternion(self.physics.angle);
    }

    /// Stop all motion: heading held, destination discarded.
    pub fn stop(&mut self) {
        self.motion = MotionState::Idle;
        self.physics.dest_angle = self.physics.angle;
        self.physics.destination = None;
    }

    /// Planar distance from this actor to a point.
    pub fn get_distance(&self, point: &Vec3) -> f32 {
        angles::distance_2d(&self.physics.position, point)
    }

    /// Planar distance in scene-data distance units.
    pub fn get_game_distance(&self, point: &Vec3) -> f32 {
        angles::to_game_distance(self.get_distance(point))
    }

    /// Per-frame motion integration.
    ///
    /// Displacement and rotation are a pure function of current state and
    /// elapsed time; nothing carries over between frames beyond the stored
    /// angle and position.
    pub fn update_anim_step(&mut self, time: Time) {
        let delta = time.delta * 1000.0;
        if self.motion.is_turning() && self.props.speed > 0.0 {
            let raw = (self.physics.dest_angle - self.physics.angle) * delta
                / (self.props.speed * 10.0);
            let step_angle = angles::normalize_angle(raw);
            self.physics.angle += step_angle;
            self.physics.orientation = angles::yaw_quaternion(self.physics.angle);
        }
        if self.motion.is_walking() {
            self.physics.step = Vec3::zeros();
            if self.anim_state.keyframe_length > 0.0 {
                let speed_z = self.anim_state.step.z * delta / self.anim_state.keyframe_length;
                let speed_x = self.anim_state.step.x * delta / self.anim_state.keyframe_length;
                let (sin, cos) = self.physics.angle.sin_cos();
                // Forward component along (sin, cos), lateral along (-cos, sin).
                self.physics.step.x += sin * speed_z - cos * speed_x;
                self.physics.step.z += cos * speed_z + sin * speed_x;
                self.physics.step.y +=
                    self.anim_state.step.y * delta / self.anim_state.keyframe_length;
            }
        } else {
            self.physics.step = Vec3::zeros();
        }
    }

    /// One actor's full frame update: behavior, then animation advance, then
    /// motion integration if the animation is still playing.
    ///
    /// Side effects stay confined to this actor's own state.
    pub fn update(
        &mut self,
        provider: &mut dyn ModelProvider,
        time: Time,
    ) -> Result<(), UpdateError> {
        // The behavior borrows the actor mutably, so it is taken out for the
        // duration of the call and reinstalled afterwards, error or not.
        let behavior_result = if let Some(mut behavior) = self.behavior.take() {
            let result = behavior.run(self, time);
            self.behavior = Some(behavior);
            result
        } else {
            Ok(())
        };

        if self.has_model {
            self.anim_state
                .set_rotation_from_orientation(&self.physics.orientation);
            provider.update_model(
                &mut self.anim_state,
                self.props.entity_index,
                self.props.body_index,
                self.props.anim_index,
                time,
            );
            if self.anim_state.is_playing {
                self.update_anim_step(time);
            }
        }

        behavior_result.map_err(UpdateError::from)
    }
}
