//! Gameplay layer: actors, their animation and behavior seams, transient
//! world effects, hero control translation, and the game command queue.

pub mod actor;
pub mod anim;
pub mod behavior;
pub mod commands;
pub mod extra;
pub mod hero;

pub use actor::{Actor, ActorPhysics, ActorProps, ActorStaticFlags, MotionState, UpdateError};
pub use anim::{AnimState, ModelProvider, NullModelProvider};
pub use behavior::{ActorBehavior, BehaviorError, Patrol};
pub use commands::{CommandQueue, GameCommand};
pub use extra::Extra;
pub use hero::update_hero;
