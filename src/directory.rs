use crate::admin::IntakeService;
use crate::config;
use crate::fetcher::LabFetcher;
use crate::geo::{HttpGeocoder, LocalityHintTask, LocationProvider, ReverseGeocoder};
use crate::models::City;
use crate::objects::{FsObjectStore, ObjectStore};
use crate::result::Result;
use crate::search;
use crate::storage::{LabStorage, MemoryStorage};
use crate::view::BrowseSession;
use std::sync::Arc;

pub struct Directory {
    storage: Arc<dyn LabStorage>,
    objects: Arc<dyn ObjectStore>,
    geocoder: Option<Arc<dyn ReverseGeocoder>>,
    image_prefix: String,
}

impl Directory {
    pub fn new(
        storage: Arc<dyn LabStorage>,
        objects: Arc<dyn ObjectStore>,
        geocoder: Option<Arc<dyn ReverseGeocoder>>,
        image_prefix: &str,
    ) -> Self {
        Self {
            storage,
            objects,
            geocoder,
            image_prefix: image_prefix.to_string(),
        }
    }

    pub fn search_cities(&self, query: &str) -> Vec<&'static City> {
        search::search_cities(query)
    }

    pub fn fetcher(&self) -> LabFetcher {
        LabFetcher::new(self.storage.clone())
    }

    pub fn browse(&self) -> BrowseSession {
        BrowseSession::new(self.fetcher())
    }

    pub fn intake(&self) -> IntakeService {
        IntakeService::new(
            self.storage.clone(),
            self.objects.clone(),
            self.image_prefix.as_str(),
        )
    }

    /// Starts the locality lookup when a geocoder is configured.
    pub fn locality_hint(&self, locator: Arc<dyn LocationProvider>) -> Option<LocalityHintTask> {
        match &self.geocoder {
            Some(geocoder) => Some(LocalityHintTask::spawn(locator, geocoder.clone())),
            None => {
                debug!("geocoding disabled, no locality hint");
                None
            }
        }
    }
}

pub struct DirectoryBuilder<'a> {
    config: &'a config::DirectoryConfig,
}

impl<'a> DirectoryBuilder<'a> {
    pub fn new(config: &'a config::DirectoryConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Result<Directory> {
        debug!("config for building: {:?}", self.config);
        let storage = self.build_storage()?;

        let objects_config = self.config.objects();
        let objects: Arc<dyn ObjectStore> = Arc::new(FsObjectStore::new(
            objects_config.root_directory(),
            objects_config.public_base_url(),
        ));

        let geocoding = self.config.geocoding();
        let geocoder: Option<Arc<dyn ReverseGeocoder>> = match *geocoding.enabled() {
            true => Some(Arc::new(HttpGeocoder::new(
                geocoding.endpoint(),
                geocoding.access_token(),
            ))),
            false => None,
        };

        Ok(Directory::new(
            storage,
            objects,
            geocoder,
            objects_config.prefix(),
        ))
    }

    fn build_storage(&self) -> Result<Arc<dyn LabStorage>> {
        let storage_config = self.config.storage();
        match storage_config.database_url() {
            None => {
                info!("using in-memory {} collection", storage_config.collection());
                Ok(Arc::new(MemoryStorage::new(storage_config.collection())))
            }
            Some(database_url) => self.build_pg_storage(database_url),
        }
    }

    #[cfg(feature = "pg-storage")]
    fn build_pg_storage(&self, database_url: &str) -> Result<Arc<dyn LabStorage>> {
        let storage_config = self.config.storage();
        let db_pool = crate::db::connect(database_url, *storage_config.pool_size())?;
        crate::db::migrate(&db_pool)?;
        info!("using postgres {} collection", storage_config.collection());
        Ok(Arc::new(crate::storage::PgStorage::new(
            storage_config.collection(),
            db_pool,
        )))
    }

    #[cfg(not(feature = "pg-storage"))]
    fn build_pg_storage(&self, _database_url: &str) -> Result<Arc<dyn LabStorage>> {
        Err(crate::result::Error::ConfigError(
            "database_url is set but the crate was built without pg-storage".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{AdminForm, ImageFile};
    use crate::config::{DirectoryConfigBuilder, ObjectStoreConfigBuilder, StorageConfigBuilder};
    use crate::view::ViewState;

    fn test_config(root: &str) -> config::DirectoryConfig {
        DirectoryConfigBuilder::default()
            .objects(
                ObjectStoreConfigBuilder::default()
                    .root_directory(root.to_string())
                    .public_base_url("https://cdn.example/uploads".to_string())
                    .prefix("images".to_string())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_added_lab_shows_up_when_browsing() {
        crate::logs::init();
        let dir = tempfile::tempdir().unwrap();
        let directory = DirectoryBuilder::new(&test_config(dir.path().to_str().unwrap()))
            .build()
            .unwrap();

        let admin = AdminForm::new();
        admin.update(|form| {
            form.with_name("Acme Lab")
                .with_pricing("250")
                .with_rating(4.5)
                .with_postal_code("411001")
                .with_image(Some(ImageFile::new("acme.png", b"png".to_vec())))
                .with_google_link("https://maps.example/acme")
        });
        admin.submit(&directory.intake()).await.unwrap();

        let mut session = directory.browse();
        let pune = directory.search_cities("pune")[0];
        match session.select_city(pune).await {
            ViewState::ResultsFound { labs, .. } => {
                assert_eq!(labs.len(), 1);
                assert_eq!(
                    labs[0].image_url,
                    "https://cdn.example/uploads/images/acme.png"
                );
            }
            other => panic!("unexpected view {:?}", other),
        }
        assert!(dir.path().join("images").join("acme.png").exists());
    }

    #[tokio::test]
    async fn test_geocoding_disabled_by_default() {
        let directory = DirectoryBuilder::new(&test_config("uploads")).build().unwrap();
        let locator = Arc::new(crate::geo::FixedLocation(crate::geo::Coordinates {
            latitude: 18.52,
            longitude: 73.85,
        }));
        assert!(directory.locality_hint(locator).is_none());
    }

    #[cfg(not(feature = "pg-storage"))]
    #[test]
    fn test_database_url_requires_pg_storage() {
        use crate::result::Error;

        let with_db = DirectoryConfigBuilder::default()
            .objects(test_config("uploads").objects().clone())
            .storage(
                StorageConfigBuilder::default()
                    .database_url(Some("postgres://localhost/labs".to_string()))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert!(matches!(
            DirectoryBuilder::new(&with_db).build(),
            Err(Error::ConfigError(_))
        ));
    }
}
