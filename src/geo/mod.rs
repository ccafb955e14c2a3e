//! Best-effort locality hint for the browse page.
//!
//! The hint is display-only. Any failure along the way (no device location,
//! geocoder unreachable, unexpected response) yields `None` and nothing else.
use crate::result::Result;
use async_trait::async_trait;
use futures::future::{abortable, AbortHandle};
use std::sync::Arc;
use tokio::task::JoinHandle;

mod http;

pub use self::http::HttpGeocoder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Device position source.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates>;
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn locality(&self, coordinates: Coordinates) -> Result<Option<String>>;
}

/// A provider with a position known up front, e.g. sent by the browser.
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.0)
    }
}

pub async fn resolve_locality_hint(
    locator: &dyn LocationProvider,
    geocoder: &dyn ReverseGeocoder,
) -> Option<String> {
    let coordinates = match locator.current_position().await {
        Ok(coordinates) => coordinates,
        Err(err) => {
            debug!("no device location: {}", err);
            return None;
        }
    };
    match geocoder.locality(coordinates).await {
        Ok(hint) => hint,
        Err(err) => {
            debug!("reverse geocoding failed for {:?}: {}", coordinates, err);
            None
        }
    }
}

/// Locality lookup running in the background. Cancelling or dropping it stops the lookup.
pub struct LocalityHintTask {
    handle: Option<JoinHandle<std::result::Result<Option<String>, futures::future::Aborted>>>,
    abort: AbortHandle,
}

impl LocalityHintTask {
    pub fn spawn(locator: Arc<dyn LocationProvider>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        let (task, abort) = abortable(async move {
            resolve_locality_hint(locator.as_ref(), geocoder.as_ref()).await
        });
        Self {
            handle: Some(tokio::spawn(task)),
            abort,
        }
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub async fn hint(mut self) -> Option<String> {
        let handle = self.handle.take()?;
        match handle.await {
            Ok(Ok(hint)) => hint,
            Ok(Err(_)) => {
                debug!("locality lookup cancelled");
                None
            }
            Err(err) => {
                debug!("locality lookup task failed: {}", err);
                None
            }
        }
    }
}

impl Drop for LocalityHintTask {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
