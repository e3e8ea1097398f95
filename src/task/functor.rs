use crate::task::Task;
use std::fmt;

type BoxedFn<R> = Box<dyn FnMut() -> R + Send>;

/// Wraps a nullary callable, or nothing at all.
pub struct TaskFunctor<R> {
	inner: Option<BoxedFn<R>>,
}

impl<R> TaskFunctor<R> {
	pub fn new(fun: impl FnMut() -> R + Send + 'static) -> Self {
		Self {
			inner: Some(Box::new(fun)),
		}
	}

	pub fn empty() -> Self {
		Self { inner: None }
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_none()
	}

	/// Runs the callable once. An empty functor does nothing and yields `R::default()`.
	///
	/// Panics raised by the callable are not caught.
	pub fn invoke(&mut self) -> R
	where
		R: Default,
	{
		self.call().unwrap_or_default()
	}

	pub(crate) fn call(&mut self) -> Option<R> {
		self.inner.as_mut().map(|fun| fun())
	}
}

impl<R> Default for TaskFunctor<R> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<R> fmt::Debug for TaskFunctor<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TaskFunctor")
			.field("empty", &self.is_empty())
			.finish()
	}
}

impl<R: Default> Task for TaskFunctor<R> {
	type Output = R;

	fn is_empty(&self) -> bool {
		TaskFunctor::is_empty(self)
	}

	fn exec(&mut self) -> R {
		self.invoke()
	}
}
