pub use self::functor::TaskFunctor;
pub use self::looped::{Continuation, LoopedTask};
pub use self::pause::{Pause, ThreadPause};
pub use self::priority::PriorityTask;

mod functor;
mod looped;
mod pause;
mod priority;


/// A unit of work as seen by a pool worker.
pub trait Task: Send {
	type Output;

	/// True if there is no callable to run.
	fn is_empty(&self) -> bool;

	fn exec(&mut self) -> Self::Output;

	/// Whether a single `exec` may keep the worker busy for an unbounded amount of time.
	fn engages_worker(&self) -> bool {
		false
	}
}

/// Tasks whose `exec` blocks the calling worker until the task itself decides to stop.
///
/// A pool should not count a worker running one of these as available for short work.
pub trait Engaging: Task {}
