use crate::task::{Task, TaskFunctor};
use std::cmp::Ordering;

/// A [`TaskFunctor`] with a priority attached.
///
/// Ordering looks at the priority only, so a max-heap such as
/// [`BinaryHeap`](std::collections::BinaryHeap) hands out the highest priority first.
/// Tasks with equal priority compare as equal and leave the tie to the container.
#[derive(Debug)]
pub struct PriorityTask<R> {
	priority: u32,
	functor: TaskFunctor<R>,
}

impl<R> PriorityTask<R> {
	pub fn new(priority: u32, fun: impl FnMut() -> R + Send + 'static) -> Self {
		Self {
			priority,
			functor: TaskFunctor::new(fun),
		}
	}

	pub fn empty(priority: u32) -> Self {
		Self {
			priority,
			functor: TaskFunctor::empty(),
		}
	}

	pub fn priority(&self) -> u32 {
		self.priority
	}

	pub fn is_empty(&self) -> bool {
		self.functor.is_empty()
	}

	pub fn invoke(&mut self) -> R
	where
		R: Default,
	{
		self.functor.invoke()
	}

	/// Builds an empty task for another result type carrying only this task's priority.
	///
	/// The callable is not carried over: the returned task is always empty.
	pub fn rebind_empty<U>(&self) -> PriorityTask<U> {
		if !self.is_empty() {
			log::debug!("Rebinding priority {} drops its callable", self.priority);
		}
		PriorityTask::empty(self.priority)
	}

	/// Takes over the priority of `other`, keeping this task's own callable.
	pub fn adopt_priority<U>(&mut self, other: &PriorityTask<U>) {
		self.priority = other.priority;
	}
}

impl<R> PartialEq for PriorityTask<R> {
	fn eq(&self, other: &Self) -> bool {
		self.priority == other.priority
	}
}

impl<R> Eq for PriorityTask<R> {}

impl<R> PartialOrd for PriorityTask<R> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<R> Ord for PriorityTask<R> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.priority.cmp(&other.priority)
	}
}

impl<R: Default> Task for PriorityTask<R> {
	type Output = R;

	fn is_empty(&self) -> bool {
		PriorityTask::is_empty(self)
	}

	fn exec(&mut self) -> R {
		self.invoke()
	}
}
