// self
use crate::{_prelude::*, obs::ResolveOutcome};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedResolve<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedResolve<F> = F;

/// Span wrapping a single delegating resolution.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a span tagged with the number of delegates about to be consulted.
	pub fn new(delegates: usize) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_userinfo.resolve", delegates);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = delegates;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedResolve<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event describing what a single delegate returned.
pub fn trace_delegate(index: usize, outcome: ResolveOutcome) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			delegate = index,
			outcome = outcome.as_str(),
			"user-info delegate returned"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (index, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_passes_output_through() {
		let span = ResolveSpan::new(2);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);

		trace_delegate(0, ResolveOutcome::Resolved);
	}
}
