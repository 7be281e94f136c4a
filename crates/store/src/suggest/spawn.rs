use std::future::Future;
use std::sync::OnceLock;

use tokio::task::JoinHandle;

/// Kinds of background work the suggestion engine starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TaskClass {
	/// Supplier future plus the watcher forwarding its outcome.
	Lookup,
	/// Deferred loading indicator.
	LoadingTimer,
}

impl TaskClass {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Lookup => "lookup",
			Self::LoadingTimer => "loading_timer",
		}
	}
}

/// Runtime for lookups started outside any tokio context, e.g. from a
/// synchronous UI thread. Built on first use and kept for the process.
fn detached_runtime() -> &'static tokio::runtime::Runtime {
	static DETACHED: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	DETACHED.get_or_init(|| {
		tracing::debug!("suggest.detached_runtime");
		tokio::runtime::Builder::new_multi_thread()
			.worker_threads(1)
			.thread_name("sieve-suggest")
			.enable_time()
			.build()
			.expect("failed to build sieve-suggest lookup runtime")
	})
}

/// Spawns a lookup or timer task on the caller's runtime, falling back to the
/// detached one.
pub(crate) fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(task_class = class.as_str(), "suggest.spawn");
	match tokio::runtime::Handle::try_current() {
		Ok(handle) => handle.spawn(fut),
		Err(_) => detached_runtime().spawn(fut),
	}
}
