//! Wall-board rotation ticker.

use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time};

use crashcart_app::domain::floors::FloorsService;

/// How long each cart stays in view on a multi-cart floor.
pub(crate) const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Advance every floor's rotation on a fixed wall-clock interval until the
/// server shuts down. The ticker only moves the in-memory display position,
/// never the stored records.
pub(crate) fn spawn_ticker(floors: Arc<dyn FloorsService>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(ROTATION_INTERVAL);

        // The first tick of a fresh interval completes immediately; consume
        // it so the board holds its opening position for a full interval.
        interval.tick().await;

        loop {
            interval.tick().await;
            floors.tick().await;
        }
    })
}
