//! Navigation observers wired up by the application.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::{NavigationEvent, NavigationObserver};

/// Forwards navigation events to the event loop so it can redraw.
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<NavigationEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }
}

impl NavigationObserver for ChannelObserver {
    fn on_navigation(&self, event: &NavigationEvent) {
        if self.tx.send(event.clone()).is_err() {
            debug!("Navigation receiver dropped");
        }
    }
}

/// Logs every navigation change.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl NavigationObserver for TracingObserver {
    fn on_navigation(&self, event: &NavigationEvent) {
        match event {
            NavigationEvent::Pushed { descriptor, depth } => {
                info!(screen = %descriptor, depth, "Pushed screen");
            }
            NavigationEvent::Popped { descriptor, depth } => {
                info!(screen = %descriptor, depth, "Popped screen");
            }
        }
    }
}
