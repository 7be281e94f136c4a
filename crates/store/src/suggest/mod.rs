//! Asynchronous candidate retrieval with last-request-wins semantics.
//!
//! # Purpose
//!
//! * Invokes facet/value suppliers for the current input text.
//! * Runs pending lookups and their loading-indicator timers off the caller's stack.
//! * Guarantees that only the newest request can ever reach the dropdown.
//!
//! # Mental model
//!
//! * Each pending lookup gets a numbered token from [`token::RequestSeq`].
//! * At most one generation is current; starting a request or calling
//!   [`SuggestEngine::invalidate`] retires the previous one.
//! * Spawned tasks never touch store state. They push [`Resolution`]s into an
//!   unbounded channel that the store drains on its own schedule.
//!
//! # Invariants
//!
//! * Must drop resolutions whose generation is not current.
//! * Must retire the current generation once its candidates are accepted.
//! * Must map supplier panics, synchronous or in a task, to [`SupplierError::Panicked`]
//!   instead of unwinding into the caller or losing the resolution.
//!
//! # Concurrency & ordering
//!
//! * The supplier future runs on its own task; a watcher task awaits its join
//!   handle and forwards the outcome.
//! * The loading timer races the request token in `tokio::select!` and exits
//!   silently once the request is superseded or resolved.
//! * Channel order is arrival order; generation checks make reordering harmless.
//!
//! # Failure modes & recovery
//!
//! * Supplier error or panic: delivered as `Err` (or [`Requested::Failed`] when
//!   synchronous), the store shows an empty list.
//! * Supplier never resolves: the generation stays current until superseded.
//! * Store dropped: tasks finish and their sends fail silently.

mod spawn;
mod token;

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use sieve_primitives::Value;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use self::spawn::{TaskClass, spawn};
use self::token::{RequestSeq, RequestToken};
use crate::error::SupplierError;
use crate::options::LoadingDelay;
use crate::supplier::{Candidates, PendingCandidates, Supplier};

/// Message from a background task back to the store.
#[derive(Debug)]
pub(crate) enum Resolution {
	/// The lookup for `generation` finished.
	Candidates {
		generation: u64,
		result: Result<Vec<Value>, SupplierError>,
	},
	/// The loading indicator for `generation` is due.
	LoadingDue { generation: u64 },
}

impl Resolution {
	fn generation(&self) -> u64 {
		match self {
			Self::Candidates { generation, .. } | Self::LoadingDue { generation } => *generation,
		}
	}
}

/// Immediate outcome of [`SuggestEngine::request`].
#[derive(Debug)]
pub(crate) enum Requested {
	/// Candidates were available synchronously.
	Ready(Vec<Value>),
	/// A lookup is in flight; `loading_now` asks for the indicator right away.
	Pending { loading_now: bool },
	/// The supplier failed synchronously.
	Failed(SupplierError),
}

/// Owner of the request generation and the resolution channel.
#[derive(Debug)]
pub(crate) struct SuggestEngine {
	seq: RequestSeq,
	current: Option<RequestToken>,
	tx: mpsc::UnboundedSender<Resolution>,
	rx: mpsc::UnboundedReceiver<Resolution>,
}

impl Default for SuggestEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl SuggestEngine {
	pub(crate) fn new() -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		Self {
			seq: RequestSeq::default(),
			current: None,
			tx,
			rx,
		}
	}

	/// Returns true while a lookup is current.
	pub(crate) fn is_pending(&self) -> bool {
		self.current.is_some()
	}

	/// Generation of the current lookup.
	pub(crate) fn current_generation(&self) -> Option<u64> {
		self.current.as_ref().map(RequestToken::generation)
	}

	/// Retires the current lookup so its resolutions are ignored.
	pub(crate) fn invalidate(&mut self) {
		if let Some(token) = self.current.take()
			&& !token.is_cancelled()
		{
			trace!(generation = token.generation(), "suggest.invalidate");
			token.cancel();
		}
	}

	/// Queries `supplier` for `query`, superseding any current lookup.
	pub(crate) fn request(&mut self, supplier: &dyn Supplier, query: &str, delay: LoadingDelay) -> Requested {
		self.invalidate();
		let candidates = std::panic::catch_unwind(AssertUnwindSafe(|| supplier.candidates(query)))
			.unwrap_or_else(|payload| Candidates::Failed(SupplierError::Panicked(panic_message(payload.as_ref()))));
		match candidates {
			Candidates::Failed(err) => {
				debug!(query, error = %err, "suggest.failed");
				Requested::Failed(err)
			}
			Candidates::Ready(values) => {
				debug!(query, count = values.len(), "suggest.ready");
				Requested::Ready(values)
			}
			Candidates::Pending(fut) => {
				let token = self.seq.issue();
				debug!(query, generation = token.generation(), ?delay, "suggest.pending");
				self.spawn_lookup(token.generation(), fut);
				let loading_now = match delay {
					LoadingDelay::Immediate => true,
					LoadingDelay::After(wait) => {
						self.spawn_loading_timer(token.clone(), wait);
						false
					}
				};
				self.current = Some(token);
				Requested::Pending { loading_now }
			}
		}
	}

	fn spawn_lookup(&self, generation: u64, fut: PendingCandidates) {
		let lookup = spawn(TaskClass::Lookup, fut);
		let tx = self.tx.clone();
		spawn(TaskClass::Lookup, async move {
			let result = match lookup.await {
				Ok(result) => result,
				Err(err) if err.is_panic() => Err(SupplierError::Panicked(err.to_string())),
				Err(err) => Err(SupplierError::failed(err)),
			};
			let _ = tx.send(Resolution::Candidates { generation, result });
		});
	}

	fn spawn_loading_timer(&self, token: RequestToken, wait: Duration) {
		let tx = self.tx.clone();
		spawn(TaskClass::LoadingTimer, async move {
			tokio::select! {
				_ = token.cancelled() => {}
				_ = tokio::time::sleep(wait) => {
					let _ = tx.send(Resolution::LoadingDue { generation: token.generation() });
				}
			}
		});
	}

	/// Filters a resolution against the current generation.
	fn accept(&mut self, resolution: Resolution) -> Option<Resolution> {
		let generation = resolution.generation();
		if self.current_generation() != Some(generation) {
			trace!(generation, current = ?self.current_generation(), "suggest.stale");
			return None;
		}
		if matches!(resolution, Resolution::Candidates { .. }) {
			self.invalidate();
		}
		Some(resolution)
	}

	/// Next current resolution without waiting.
	pub(crate) fn try_next(&mut self) -> Option<Resolution> {
		while let Ok(resolution) = self.rx.try_recv() {
			if let Some(resolution) = self.accept(resolution) {
				return Some(resolution);
			}
		}
		None
	}

	/// Waits for the next current resolution.
	///
	/// Returns `None` immediately when nothing is pending.
	pub(crate) async fn next(&mut self) -> Option<Resolution> {
		while self.is_pending() {
			let resolution = self.rx.recv().await?;
			if let Some(resolution) = self.accept(resolution) {
				return Some(resolution);
			}
		}
		None
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(msg) = payload.downcast_ref::<&str>() {
		(*msg).to_string()
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		msg.clone()
	} else {
		"supplier panicked".to_string()
	}
}
