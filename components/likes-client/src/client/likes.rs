//! Request drivers - responsibility and behavior
//!
//! The drivers issue the demonstration RPCs against an already-built
//! `BeerLikesClient` and log what comes back. They own no connection state
//! of their own; the runtime owns the channel for the whole run.
//!
//! Key responsibilities:
//! - `get_like`: three fixed unary `GetLike` queries, one attempt each,
//! issued sequentially.
//! - `list_likes`: one server-streaming `ListLikes` call, drained to
//! completion into a client-side `LikesSummary`.
//! - `get_likes_summary`: one unary `GetLikesSummary` call for the
//! server-side tally of the same filter.
//!
//! Failure semantics: every RPC failure is caught here, logged as a
//! warning, and never propagated. A mid-stream failure keeps the partial
//! summary accumulated so far. The drivers therefore have no error return;
//! the only fallible construction is `RefTypeFilter::new`.

use std::time::Instant;

use tonic::transport::Channel;
use tracing::instrument;

use crate::proto::beerlikes::{
    Like, LikeQuery, LikesQuery, LikesSummary, RefType, beer_likes_client::BeerLikesClient,
};

/// Identifier of a like the demo data set is known to contain.
pub const WELL_KNOWN_LIKE_ID: &str = "3e8f9d58-4148-4809-9392-63e90fbc8280";

/// Identifier no like is expected to have.
pub const UNKNOWN_LIKE_ID: &str = "123-abc";

/// Per-query failures. `Rpc` covers transport and protocol errors;
/// `IncompleteLike` is an otherwise-successful response carrying an empty
/// id. Both are soft failures from the drivers' point of view.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
    #[error("server returned incomplete like")]
    IncompleteLike,
    #[error("invalid ref type filter: {0}")]
    InvalidFilter(String),
}

/// Statically-shaped filter for the list and summary RPCs.
///
/// The fields mirror the wire-level `RefType` exactly; both are validated
/// at construction rather than at call time, so a query built from a
/// filter is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefTypeFilter {
    id: String,
    name: String,
}

impl RefTypeFilter {
    /// Build a filter from explicit `id` and `name` values. Surrounding
    /// whitespace is stripped; a filter with both fields empty would match
    /// nothing the service can scope to and is rejected.
    pub fn new(id: &str, name: &str) -> Result<Self, QueryError> {
        let id = id.trim();
        let name = name.trim();
        if id.is_empty() && name.is_empty() {
            return Err(QueryError::InvalidFilter(
                "ref type id and name are both empty".to_string(),
            ));
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    /// The fixed demonstration filter, `id="1"`, `name="beer"`.
    pub fn beer() -> Self {
        Self {
            id: "1".to_string(),
            name: "beer".to_string(),
        }
    }
}

impl From<RefTypeFilter> for LikesQuery {
    fn from(filter: RefTypeFilter) -> Self {
        Self {
            ref_type: Some(RefType {
                id: filter.id,
                name: filter.name,
            }),
        }
    }
}

/// Issue a single `GetLike` call and classify the outcome.
///
/// A response with an empty id is the service's "not found" shape; it is
/// reported as `IncompleteLike` so callers never mistake it for a real
/// record.
pub async fn fetch_like(
    client: &mut BeerLikesClient<Channel>,
    query: LikeQuery,
) -> Result<Like, QueryError> {
    let like = client.get_like(query).await?.into_inner();
    if like.id.is_empty() {
        return Err(QueryError::IncompleteLike);
    }
    Ok(like)
}

/// Run the three fixed `GetLike` queries: a well-known id, an unknown id,
/// and an empty query. One attempt per query, sequential, and every
/// failure is logged and swallowed.
#[instrument(skip_all, level = "debug")]
pub async fn get_like(client: &mut BeerLikesClient<Channel>) {
    let queries = [
        LikeQuery {
            id: WELL_KNOWN_LIKE_ID.to_string(),
        },
        LikeQuery {
            id: UNKNOWN_LIKE_ID.to_string(),
        },
        LikeQuery::default(),
    ];

    for query in queries {
        let queried_id = query.id.clone();
        match fetch_like(client, query).await {
            Ok(like) => {
                tracing::debug!(id = %like.id, ref_type = ?like.ref_type, "Like called");
            }
            Err(e) => {
                tracing::warn!(queried_id = %queried_id, error = %e, "GetLike query failed");
            }
        }
    }
}

/// Fold one streamed `Like` into the running summary.
pub fn tally(summary: &mut LikesSummary, like: Like) {
    if like.liked {
        summary.total += 1;
    } else {
        summary.total -= 1;
    }
    summary.likes.push(like);
}

/// Issue one `ListLikes` call scoped by `filter` and drain the stream into
/// a `LikesSummary`.
///
/// Both a failed call and a mid-stream failure are logged and swallowed,
/// matching the unary path; the returned summary holds whatever arrived
/// before the failure.
#[instrument(skip(client), level = "debug")]
pub async fn list_likes(
    client: &mut BeerLikesClient<Channel>,
    filter: RefTypeFilter,
) -> LikesSummary {
    tracing::debug!(filter = ?filter, "Looking for likes");
    let started = Instant::now();
    let mut summary = LikesSummary::default();

    let mut stream = match client.list_likes(LikesQuery::from(filter)).await {
        Ok(response) => response.into_inner(),
        Err(status) => {
            tracing::warn!(error = %status, "ListLikes call failed");
            return summary;
        }
    };

    loop {
        match stream.message().await {
            Ok(Some(like)) => {
                tracing::debug!(like = ?like, "Like streamed");
                tally(&mut summary, like);
            }
            Ok(None) => break,
            Err(status) => {
                tracing::warn!(error = %status, "ListLikes stream failed mid-way");
                break;
            }
        }
    }

    summary.elapsed_time = started.elapsed().as_nanos() as u64;
    tracing::debug!(
        total = summary.total,
        likes = summary.likes.len(),
        summary = ?summary,
        "LikesSummary"
    );
    summary
}

/// Ask the service for its own tally of `filter`. Failures are logged and
/// swallowed like every other driver; `None` means the call did not yield
/// a summary.
#[instrument(skip(client), level = "debug")]
pub async fn get_likes_summary(
    client: &mut BeerLikesClient<Channel>,
    filter: RefTypeFilter,
) -> Option<LikesSummary> {
    match client.get_likes_summary(LikesQuery::from(filter)).await {
        Ok(response) => {
            let summary = response.into_inner();
            tracing::debug!(
                total = summary.total,
                likes = summary.likes.len(),
                "Server-side LikesSummary"
            );
            Some(summary)
        }
        Err(status) => {
            tracing::warn!(error = %status, "GetLikesSummary call failed");
            None
        }
    }
}
