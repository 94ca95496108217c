//! Lazy page-at-a-time traversal of a paginated listing.
//!
//! Callers drive the returned stream until it is exhausted; the cursor
//! bookkeeping stays in here.

use std::future::Future;

use futures_util::stream::{self, Stream};
use tokio_util::sync::CancellationToken;

use super::gateway::{Page, PageCursor};
use crate::error::GatewayError;

/// Streams the items of every page returned by `fetch`, starting at the
/// first page and following `Page::next` until it is empty.
///
/// A failed fetch is yielded once and ends the stream. When `cancel` fires
/// the in-flight fetch is dropped and `GatewayError::Cancelled` is yielded.
pub fn paginate<'a, T, F, Fut>(
    fetch: F,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<Vec<T>, GatewayError>> + 'a
where
    T: 'a,
    F: FnMut(PageCursor) -> Fut + 'a,
    Fut: Future<Output = Result<Page<T>, GatewayError>> + 'a,
{
    stream::try_unfold(
        (fetch, cancel, Some(PageCursor::first())),
        |(mut fetch, cancel, cursor)| async move {
            let Some(cursor) = cursor else {
                return Ok(None);
            };
            let fetched = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(GatewayError::Cancelled),
                page = fetch(cursor) => page,
            };
            match fetched {
                Ok(page) => Ok(Some((page.items, (fetch, cancel, page.next)))),
                Err(e) => Err(e),
            }
        },
    )
}
