use getset::Getters;

#[derive(Clone, Debug, Builder, Getters)]
#[getset(get = "pub")]
#[builder(default)]
pub struct DirectoryConfig {
    storage: StorageConfig,
    objects: ObjectStoreConfig,
    geocoding: GeocodingConfig,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            objects: ObjectStoreConfig::default(),
            geocoding: GeocodingConfig::default(),
        }
    }
}

/// Document store settings. Without a `database_url` the in-memory store is used.
#[derive(Clone, Debug, Builder, Getters)]
#[getset(get = "pub")]
#[builder(default)]
pub struct StorageConfig {
    collection: String,
    database_url: Option<String>,
    pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            collection: "laboratories".to_string(),
            database_url: None,
            pool_size: 4,
        }
    }
}

#[derive(Clone, Debug, Builder, Getters)]
#[getset(get = "pub")]
#[builder(default)]
pub struct ObjectStoreConfig {
    root_directory: String,
    public_base_url: String,
    prefix: String,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            root_directory: "uploads".to_string(),
            public_base_url: "http://localhost:8080/uploads".to_string(),
            prefix: "images".to_string(),
        }
    }
}

#[derive(Clone, Debug, Builder, Getters)]
#[getset(get = "pub")]
#[builder(default)]
pub struct GeocodingConfig {
    enabled: bool,
    endpoint: String,
    access_token: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "https://api.bigdatacloud.net/data/reverse-geocode-client".to_string(),
            access_token: "".to_string(),
        }
    }
}
