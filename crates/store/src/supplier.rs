//! Candidate supplier contract for facet and value lookups.

use std::fmt;
use std::future::Future;

use sieve_primitives::{BoxFutureStatic, Value};

use crate::error::SupplierError;

/// Future resolving to a normalized candidate list.
pub type PendingCandidates = BoxFutureStatic<Result<Vec<Value>, SupplierError>>;

/// What a supplier hands back for one query.
///
/// Ready lists and failures are applied synchronously; pending ones are
/// spawned and applied when drained, provided no newer query has started since.
pub enum Candidates {
	/// Candidates available immediately.
	Ready(Vec<Value>),
	/// Candidates arriving later.
	Pending(PendingCandidates),
	/// The lookup failed without suspending.
	Failed(SupplierError),
}

impl Candidates {
	/// An empty ready list.
	pub fn empty() -> Self {
		Self::Ready(Vec::new())
	}

	/// Normalizes an immediate list of literals.
	pub fn ready<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		Self::Ready(items.into_iter().map(Into::into).collect())
	}

	/// Wraps a future of literals, normalizing whatever it resolves to.
	pub fn pending<F, I>(fut: F) -> Self
	where
		F: Future<Output = Result<I, SupplierError>> + Send + 'static,
		I: IntoIterator + 'static,
		I::Item: Into<Value>,
	{
		Self::Pending(Box::pin(async move { fut.await.map(|items| items.into_iter().map(Into::into).collect()) }))
	}
}

impl<V: Into<Value>> From<Vec<V>> for Candidates {
	fn from(items: Vec<V>) -> Self {
		Self::ready(items)
	}
}

impl<V: Into<Value>> From<Result<Vec<V>, SupplierError>> for Candidates {
	fn from(result: Result<Vec<V>, SupplierError>) -> Self {
		match result {
			Ok(items) => Self::ready(items),
			Err(err) => Self::Failed(err),
		}
	}
}

impl fmt::Debug for Candidates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ready(items) => f.debug_tuple("Ready").field(items).finish(),
			Self::Pending(_) => f.write_str("Pending(..)"),
			Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
		}
	}
}

/// Capability contract for facet/value candidate suppliers.
pub trait Supplier: Send + Sync {
	/// Returns candidates for the current input text.
	fn candidates(&self, query: &str) -> Candidates;
}

/// Closure-backed supplier adapter.
pub struct FnSupplier<F> {
	f: F,
}

impl<F> FnSupplier<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<F> Supplier for FnSupplier<F>
where
	F: Fn(&str) -> Candidates + Send + Sync,
{
	fn candidates(&self, query: &str) -> Candidates {
		(self.f)(query)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn closure_supplier_normalizes_strings() {
		let supplier = FnSupplier::new(|q: &str| Candidates::ready([format!("{q}1"), format!("{q}2")]));
		let Candidates::Ready(items) = supplier.candidates("x") else {
			panic!("expected ready candidates");
		};
		assert_eq!(items, vec![Value::new("x1"), Value::new("x2")]);
	}

	#[test]
	fn failed_result_becomes_failed_candidates() {
		let candidates = Candidates::from(Err::<Vec<String>, _>(SupplierError::failed("offline")));
		let Candidates::Failed(err) = candidates else {
			panic!("expected failed candidates");
		};
		assert_eq!(err, SupplierError::Failed("offline".to_string()));
		assert!(matches!(Candidates::from(Ok::<_, SupplierError>(vec!["a"])), Candidates::Ready(items) if items.len() == 1));
	}

	#[tokio::test]
	async fn pending_supplier_normalizes_on_resolve() {
		let Candidates::Pending(fut) = Candidates::pending(async { Ok::<_, SupplierError>(["a", "b"]) }) else {
			panic!("expected pending candidates");
		};
		assert_eq!(fut.await, Ok(vec![Value::new("a"), Value::new("b")]));
	}
}
