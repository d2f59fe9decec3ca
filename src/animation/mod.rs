mod animation_set;
mod animator;
mod clock;
mod context;
mod path;
mod scheduler;

pub use animation_set::{AnimationSet, chain_starts};
pub use animator::{DrawSegment, FlightAnimator, WorldWrap};
pub use clock::{FrameClock, TokioClock};
pub use context::AnimationContext;
pub use path::Path;
pub use scheduler::{Scheduler, build_paths};
