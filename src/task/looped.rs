use crate::task::{Engaging, Pause, Task, TaskFunctor, ThreadPause};
use std::convert::Infallible;
use std::ops::ControlFlow;
use std::time::Duration;

/// Tells a [`LoopedTask`] whether to run its callable again.
pub trait Continuation {
	fn should_continue(&self) -> bool;
}

impl Continuation for bool {
	fn should_continue(&self) -> bool {
		*self
	}
}

impl<T> Continuation for Option<T> {
	fn should_continue(&self) -> bool {
		self.is_some()
	}
}

impl<B, C> Continuation for ControlFlow<B, C> {
	fn should_continue(&self) -> bool {
		matches!(self, ControlFlow::Continue(_))
	}
}

enum LoopState {
	Idle,
	PreDelay,
	Running,
	InterDelay,
	Done,
}

/// Runs its callable over and over until it signals stop.
///
/// A single [`invoke`](LoopedTask::invoke) holds on to the calling thread for the whole loop,
/// including the breaks, so the worker executing it is unavailable for anything else until the
/// callable asks to stop. There is no way to cancel the loop from outside.
///
/// The interval is a minimum break. It is taken before the first run and between runs; a run
/// that takes longer than the interval simply pushes the next one back. With a zero interval
/// the thread yields between runs instead of sleeping.
#[derive(Debug)]
pub struct LoopedTask<R, P = ThreadPause> {
	functor: TaskFunctor<R>,
	break_seconds: u32,
	break_nanoseconds: u32,
	pause: P,
}

impl<R> LoopedTask<R> {
	/// `interval` is in milliseconds.
	pub fn new(fun: impl FnMut() -> R + Send + 'static, interval: u32) -> Self {
		Self::with_pause(fun, interval, ThreadPause)
	}

	pub fn empty(interval: u32) -> Self {
		Self::from_parts(TaskFunctor::empty(), interval, ThreadPause)
	}
}

impl<R, P: Pause> LoopedTask<R, P> {
	pub fn with_pause(fun: impl FnMut() -> R + Send + 'static, interval: u32, pause: P) -> Self {
		Self::from_parts(TaskFunctor::new(fun), interval, pause)
	}

	fn from_parts(functor: TaskFunctor<R>, interval: u32, pause: P) -> Self {
		let break_seconds = interval / 1000;
		Self {
			functor,
			break_seconds,
			break_nanoseconds: (interval - break_seconds * 1000) * 1_000_000,
			pause,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.functor.is_empty()
	}

	pub fn break_seconds(&self) -> u32 {
		self.break_seconds
	}

	pub fn break_nanoseconds(&self) -> u32 {
		self.break_nanoseconds
	}

	pub fn interval(&self) -> Duration {
		Duration::new(u64::from(self.break_seconds), self.break_nanoseconds)
	}

	fn has_break(&self) -> bool {
		self.break_seconds > 0 || self.break_nanoseconds > 0
	}

	/// Builds an empty task for another result type carrying only this task's timing.
	///
	/// The callable is not carried over: the returned task is always empty.
	pub fn rebind_empty<U>(&self) -> LoopedTask<U, P>
	where
		P: Clone,
	{
		if !self.is_empty() {
			log::debug!(
				"Rebinding looped task with interval {:?} drops its callable",
				self.interval()
			);
		}
		LoopedTask {
			functor: TaskFunctor::empty(),
			break_seconds: self.break_seconds,
			break_nanoseconds: self.break_nanoseconds,
			pause: self.pause.clone(),
		}
	}

	/// Takes over the timing of `other`, keeping this task's own callable.
	pub fn adopt_interval<U, Q>(&mut self, other: &LoopedTask<U, Q>) {
		self.break_seconds = other.break_seconds;
		self.break_nanoseconds = other.break_nanoseconds;
	}

	fn run<E>(&mut self, mut keep_going: impl FnMut(R) -> Result<bool, E>) -> Result<(), E> {
		let mut state = LoopState::Idle;
		let mut runs: u64 = 0;
		loop {
			state = match state {
				LoopState::Idle if self.functor.is_empty() => LoopState::Done,
				LoopState::Idle if self.has_break() => LoopState::PreDelay,
				LoopState::Idle => LoopState::Running,
				LoopState::PreDelay => {
					log::trace!("Sleeping {:?} before first run", self.interval());
					self.pause.sleep(self.interval());
					LoopState::Running
				}
				LoopState::Running => match self.functor.call() {
					Some(out) => {
						runs += 1;
						match keep_going(out) {
							Ok(true) => LoopState::InterDelay,
							Ok(false) => LoopState::Done,
							Err(err) => {
								log::debug!("Looped task failed on run {}", runs);
								return Err(err);
							}
						}
					}
					None => LoopState::Done,
				},
				LoopState::InterDelay => {
					if self.has_break() {
						log::trace!("Sleeping {:?} after run {}", self.interval(), runs);
						self.pause.sleep(self.interval());
					} else {
						self.pause.yield_now();
					}
					LoopState::Running
				}
				LoopState::Done => {
					log::debug!("Looped task done after {} runs", runs);
					return Ok(());
				}
			};
		}
	}
}

impl<R: Continuation, P: Pause> LoopedTask<R, P> {
	/// Loops until the callable returns a stop signal. Never returns if it never does.
	///
	/// An empty task returns immediately without sleeping.
	pub fn invoke(&mut self) {
		match self.run(|out| Ok::<_, Infallible>(out.should_continue())) {
			Ok(()) => (),
			Err(never) => match never {},
		}
	}
}

impl<T: Continuation, E, P: Pause> LoopedTask<Result<T, E>, P> {
	/// Like [`invoke`](LoopedTask::invoke), but stops at the first `Err` and hands it back.
	pub fn try_invoke(&mut self) -> Result<(), E> {
		self.run(|out| out.map(|signal| signal.should_continue()))
	}
}

impl<R: Continuation, P: Pause + Send> Task for LoopedTask<R, P> {
	type Output = ();

	fn is_empty(&self) -> bool {
		LoopedTask::is_empty(self)
	}

	fn exec(&mut self) {
		self.invoke()
	}

	fn engages_worker(&self) -> bool {
		true
	}
}

impl<R: Continuation, P: Pause + Send> Engaging for LoopedTask<R, P> {}
