use std::time::Duration;

/// How a looped task waits between runs of its callable.
pub trait Pause {
	/// Block the calling thread for at least `duration`.
	fn sleep(&self, duration: Duration);

	/// Give up the rest of the time slice without a timed wait.
	fn yield_now(&self);
}

/// Pauses the current OS thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
	fn sleep(&self, duration: Duration) {
		std::thread::sleep(duration);
	}

	fn yield_now(&self) {
		std::thread::yield_now();
	}
}
