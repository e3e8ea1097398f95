//! Task adaptors for thread pools.
//!
//! A pool stores and dispatches tasks; the wrappers here decide how a task compares to another
//! ([`PriorityTask`]) and how it behaves once a worker picks it up ([`LoopedTask`]).

pub use crate::task::{
	Continuation, Engaging, LoopedTask, Pause, PriorityTask, Task, TaskFunctor, ThreadPause,
};

pub mod task;
