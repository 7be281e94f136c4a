//! Request identity for candidate lookups.

use tokio_util::sync::CancellationToken;

/// Issues one token per pending lookup, numbered from 1.
///
/// Owned by a single engine; numbers never repeat within it, so a resolution
/// can be matched to the request that produced it.
#[derive(Debug, Default)]
pub(crate) struct RequestSeq {
	last: u64,
}

impl RequestSeq {
	/// Issues the token for the next request.
	pub fn issue(&mut self) -> RequestToken {
		self.last = self.last.wrapping_add(1);
		RequestToken::new(self.last)
	}
}

/// Identity and cancellation handle of the current candidate request.
///
/// Cancelling only stops the loading timer; the supplier future runs to
/// completion and its result is discarded by generation mismatch.
#[derive(Debug, Clone)]
pub(crate) struct RequestToken {
	generation: u64,
	cancel: CancellationToken,
}

impl RequestToken {
	pub fn new(generation: u64) -> Self {
		Self {
			generation,
			cancel: CancellationToken::new(),
		}
	}

	/// Number this request was issued under.
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	/// Stops the loading timer of this request.
	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	/// Future resolving when the request is superseded or resolved.
	pub async fn cancelled(&self) {
		self.cancel.cancelled().await;
	}
}
