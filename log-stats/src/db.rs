use std::time::Duration;

use mongodb::{
    Client, Collection,
    bson::{Document, doc},
    options::ClientOptions,
};
use tracing::info;

use crate::error::Result;

const LOG_DATABASE: &str = "logs";
const NGINX_COLLECTION: &str = "nginx";

// Bounded so an unreachable endpoint fails in seconds, not the driver's
// 30 second default.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds a client for `uri`. Does not touch the network; reachability is
/// checked by [`ping`].
pub async fn connect(uri: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    Ok(Client::with_options(options)?)
}

/// Round-trips a `ping` command so connectivity failures surface before any
/// count query runs.
pub async fn ping(client: &Client) -> Result<()> {
    client
        .database(LOG_DATABASE)
        .run_command(doc! { "ping": 1 })
        .await?;
    info!("connected to MongoDB");
    Ok(())
}

/// The `logs.nginx` collection. No existence check; counting a missing
/// collection yields zeros.
pub fn nginx_collection(client: &Client) -> Collection<Document> {
    client.database(LOG_DATABASE).collection(NGINX_COLLECTION)
}
