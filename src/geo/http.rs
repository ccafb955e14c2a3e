use super::{Coordinates, ReverseGeocoder};
use crate::result::Result;
use crate::tools;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReverseGeocodeResponse {
    city: Option<String>,
    locality: Option<String>,
}

impl ReverseGeocodeResponse {
    fn place_name(self) -> Option<String> {
        self.city
            .as_deref()
            .and_then(tools::empty_string_as_option)
            .or_else(|| self.locality.as_deref().and_then(tools::empty_string_as_option))
    }
}

/// Reverse geocoding over HTTP; the access token travels in the query string.
pub struct HttpGeocoder {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl HttpGeocoder {
    pub fn new(endpoint: &str, access_token: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            access_token: access_token.to_string(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for HttpGeocoder {
    async fn locality(&self, coordinates: Coordinates) -> Result<Option<String>> {
        let response = self
            .client
            .get(self.endpoint.as_str())
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("localityLanguage", "en".to_string()),
                ("key", self.access_token.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ReverseGeocodeResponse>()
            .await?;
        debug!("reverse geocoded {:?}: {:?}", coordinates, response);
        Ok(response.place_name())
    }
}
