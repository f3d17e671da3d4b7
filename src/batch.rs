//! Sequential multi-item execution
//!
//! Every multi-item command runs its remote calls one after another and stops
//! at the first failure. Nothing collected before the failure is returned.

use crate::error::CliResult;
use std::future::Future;

/// Run `call` for each item in order and collect the results.
///
/// Returns the first error unchanged; items after the failing one are never
/// attempted. On success the output has one entry per input item, in input
/// order.
pub async fn fail_fast<I, T, F, Fut>(items: I, mut call: F) -> CliResult<Vec<T>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = CliResult<T>>,
{
    let items = items.into_iter();
    let mut results = Vec::with_capacity(items.size_hint().0);

    for item in items {
        results.push(call(item).await?);
    }

    Ok(results)
}
