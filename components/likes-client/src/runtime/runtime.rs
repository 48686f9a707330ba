use crate::client::likes::{self, RefTypeFilter};
use crate::proto::beerlikes::beer_likes_client::BeerLikesClient;

use anyhow::{Context, Result};
use tonic::transport::Endpoint;
use tracing::info;

/// Open a plaintext channel to `host:port` and run the demonstration RPCs
/// sequentially: `GetLike`, then `ListLikes`, then `GetLikesSummary`.
///
/// The channel connects lazily, so an unreachable server shows up as a
/// per-call warning from the drivers rather than an error here. The
/// channel lives inside the client and is dropped exactly once when this
/// function returns, on every path.
pub async fn run_likes_client(host: &str, port: u16) -> Result<()> {
    let addr = format!("http://{host}:{port}");
    let endpoint =
        Endpoint::from_shared(addr.clone()).with_context(|| format!("invalid server address {addr}"))?;
    let channel = endpoint.connect_lazy();
    let mut client = BeerLikesClient::new(channel);

    info!("-------------- GetLike --------------");
    likes::get_like(&mut client).await;

    info!("-------------- ListLikes --------------");
    likes::list_likes(&mut client, RefTypeFilter::beer()).await;

    info!("-------------- GetLikesSummary --------------");
    likes::get_likes_summary(&mut client, RefTypeFilter::beer()).await;

    Ok(())
}
