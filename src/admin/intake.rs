use super::form::{IntakeForm, LabSubmission};
use crate::models::{LabRecord, NewLabRecord};
use crate::objects::{object_path, ObjectStore};
use crate::result::{Error, Result};
use crate::storage::LabStorage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

const SUBMIT_LABEL: &str = "Add Laboratory";
const BUSY_LABEL: &str = "Adding...";

/// Uploads the listing image, resolves its URL, then writes the listing.
#[derive(Clone)]
pub struct IntakeService {
    storage: Arc<dyn LabStorage>,
    objects: Arc<dyn ObjectStore>,
    prefix: String,
}

impl IntakeService {
    pub fn new(storage: Arc<dyn LabStorage>, objects: Arc<dyn ObjectStore>, prefix: &str) -> Self {
        Self {
            storage,
            objects,
            prefix: prefix.to_string(),
        }
    }

    pub async fn submit(&self, submission: LabSubmission) -> Result<LabRecord> {
        let path = object_path(&self.prefix, &submission.image.file_name);
        self.objects.upload(&path, submission.image.bytes).await?;
        let image_url = self.objects.url(&path).await?;
        debug!("image for {} available at {}", submission.name, image_url);

        let lab = self
            .storage
            .insert(NewLabRecord {
                name: submission.name,
                pricing: submission.pricing,
                rating: submission.rating,
                postal_code: submission.postal_code,
                image_url,
                google_link: submission.google_link,
            })
            .await?;
        info!(
            "added {} ({}) to {}",
            lab.name,
            lab.id,
            self.storage.collection()
        );
        Ok(lab)
    }
}

/// The admin page: current form contents and the submit button state.
///
/// Shared by reference between the submission in flight and whoever renders
/// the button, so the busy state is visible while the listing is being written.
#[derive(Debug, Default)]
pub struct AdminForm {
    form: Mutex<IntakeForm>,
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(busy: &'a AtomicBool) -> Option<Self> {
        match busy.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => Some(BusyGuard(busy)),
            Err(_) => None,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AdminForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_form(&self) -> MutexGuard<'_, IntakeForm> {
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn form(&self) -> IntakeForm {
        self.lock_form().clone()
    }

    /// Applies a field-set action to the current form.
    pub fn update<F: FnOnce(IntakeForm) -> IntakeForm>(&self, f: F) {
        let mut form = self.lock_form();
        let current = std::mem::take(&mut *form);
        *form = f(current);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.is_busy() {
            true => BUSY_LABEL,
            false => SUBMIT_LABEL,
        }
    }

    /// Validates and submits the form. The form is reset only when the listing was written.
    pub async fn submit(&self, service: &IntakeService) -> Result<LabRecord> {
        let _guard = match BusyGuard::acquire(&self.busy) {
            Some(guard) => guard,
            None => {
                warn!("submit ignored, a submission is already in progress");
                return Err(Error::SubmissionInFlight);
            }
        };
        let submission = self.form().validate().map_err(|err| {
            warn!("intake form rejected: {}", err);
            Error::from(err)
        })?;

        match service.submit(submission).await {
            Ok(lab) => {
                *self.lock_form() = IntakeForm::default();
                Ok(lab)
            }
            Err(err) => {
                error!("error adding laboratory: {}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::ImageFile;
    use crate::error::ValidationError;
    use crate::models::FIELD_POSTAL_CODE;
    use crate::objects::MemoryObjectStore;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    #[derive(Default)]
    struct CountingObjects {
        uploads: AtomicUsize,
        url_calls: AtomicUsize,
    }

    #[async_trait]
    impl ObjectStore for CountingObjects {
        async fn upload(&self, _path: &str, _bytes: Vec<u8>) -> Result<()> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn url(&self, path: &str) -> Result<String> {
            self.url_calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("https://cdn.example/{}", path))
        }
    }

    struct FailingUpload;

    #[async_trait]
    impl ObjectStore for FailingUpload {
        async fn upload(&self, path: &str, _bytes: Vec<u8>) -> Result<()> {
            Err(Error::ObjectStoreError(format!("quota exceeded for {}", path)))
        }

        async fn url(&self, path: &str) -> Result<String> {
            Err(Error::ObjectNotFound(path.to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingStorage {
        inserts: Mutex<Vec<NewLabRecord>>,
        fail: bool,
    }

    #[async_trait]
    impl LabStorage for RecordingStorage {
        fn collection(&self) -> &str {
            "laboratories"
        }

        async fn find_by_field(&self, _field: &str, _value: &str) -> Result<Vec<LabRecord>> {
            Ok(vec![])
        }

        async fn insert(&self, lab: NewLabRecord) -> Result<LabRecord> {
            if self.fail {
                return Err(Error::DbError("permission denied".to_string()));
            }
            self.inserts.lock().unwrap().push(lab.clone());
            Ok(lab.into_record("1".to_string(), chrono::Utc::now().naive_utc()))
        }
    }

    fn acme() -> IntakeForm {
        IntakeForm::default()
            .with_name("Acme Lab")
            .with_pricing("250")
            .with_rating(4.5)
            .with_postal_code("411001")
            .with_image(Some(ImageFile::new("acme.png", b"image".to_vec())))
            .with_google_link("https://maps.example/acme")
    }

    fn fill(admin: &AdminForm, form: IntakeForm) {
        admin.update(|_| form);
    }

    #[tokio::test]
    async fn test_acme_lab_is_written_once_and_form_reset() {
        let storage = Arc::new(MemoryStorage::new("laboratories"));
        let objects = Arc::new(MemoryObjectStore::new("https://cdn.example"));
        let service = IntakeService::new(storage.clone(), objects.clone(), "images");
        let admin = AdminForm::new();
        fill(&admin, acme());

        let lab = admin.submit(&service).await.unwrap();

        let url = "https://cdn.example/images/acme.png";
        assert_eq!(objects.get("images/acme.png").await, Some(b"image".to_vec()));
        assert_eq!(storage.len().await, 1);
        let stored = storage
            .find_by_field(FIELD_POSTAL_CODE, "411001")
            .await
            .unwrap();
        assert_eq!(stored, vec![lab.clone()]);
        assert_eq!(lab.name, "Acme Lab");
        assert_eq!(lab.pricing, 250.0);
        assert_eq!(lab.rating, 4.5);
        assert_eq!(lab.postal_code, "411001");
        assert_eq!(lab.image_url, url);
        assert_eq!(lab.google_link, "https://maps.example/acme");

        assert_eq!(admin.form(), IntakeForm::default());
        assert!(admin.form().image().is_none());
        assert!(!admin.is_busy());
        assert_eq!(admin.submit_label(), "Add Laboratory");
    }

    #[tokio::test]
    async fn test_invalid_forms_never_reach_the_stores() {
        let storage = Arc::new(RecordingStorage::default());
        let objects = Arc::new(CountingObjects::default());
        let service = IntakeService::new(storage.clone(), objects.clone(), "images");

        let invalid = vec![
            acme().with_name(""),
            acme().with_pricing(""),
            acme().with_postal_code(""),
            acme().with_image(None),
            acme().with_google_link(""),
            acme().with_pricing("two hundred"),
        ];
        for form in invalid {
            let admin = AdminForm::new();
            fill(&admin, form.clone());
            match admin.submit(&service).await {
                Err(Error::Validation(_)) => {}
                other => panic!("expected validation error, got {:?}", other),
            }
            assert_eq!(admin.form(), form);
            assert!(!admin.is_busy());
        }
        assert_eq!(objects.uploads.load(Ordering::SeqCst), 0);
        assert_eq!(objects.url_calls.load(Ordering::SeqCst), 0);
        assert!(storage.inserts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_pricing_message() {
        let storage = Arc::new(RecordingStorage::default());
        let service = IntakeService::new(storage, Arc::new(CountingObjects::default()), "images");
        let admin = AdminForm::new();
        fill(&admin, acme().with_pricing("abc"));
        match admin.submit(&service).await {
            Err(Error::Validation(err)) => {
                assert_eq!(err, ValidationError::PricingNotANumber("abc".to_string()));
                assert_eq!(err.message(), "Pricing must be a number.");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upload_failure_skips_write_and_keeps_form() {
        let storage = Arc::new(RecordingStorage::default());
        let service = IntakeService::new(storage.clone(), Arc::new(FailingUpload), "images");
        let admin = AdminForm::new();
        fill(&admin, acme());

        assert!(admin.submit(&service).await.is_err());
        assert!(storage.inserts.lock().unwrap().is_empty());
        assert_eq!(admin.form(), acme());
        assert!(admin.submit_enabled());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_form_for_retry() {
        let storage = Arc::new(RecordingStorage {
            inserts: Mutex::new(vec![]),
            fail: true,
        });
        let objects = Arc::new(CountingObjects::default());
        let service = IntakeService::new(storage, objects.clone(), "images");
        let admin = AdminForm::new();
        fill(&admin, acme());

        match admin.submit(&service).await {
            Err(Error::DbError(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(objects.uploads.load(Ordering::SeqCst), 1);
        assert_eq!(objects.url_calls.load(Ordering::SeqCst), 1);
        assert_eq!(admin.form(), acme());
        assert!(!admin.is_busy());
        assert_eq!(admin.submit_label(), "Add Laboratory");
    }

    struct HeldUpload {
        started: Mutex<Option<oneshot::Sender<()>>>,
        release: Mutex<Option<oneshot::Receiver<()>>>,
        inner: MemoryObjectStore,
    }

    #[async_trait]
    impl ObjectStore for HeldUpload {
        async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<()> {
            let started = self.started.lock().unwrap().take();
            if let Some(started) = started {
                let _ = started.send(());
            }
            let release = self.release.lock().unwrap().take();
            if let Some(release) = release {
                release
                    .await
                    .map_err(|e| Error::ObjectStoreError(e.to_string()))?;
            }
            self.inner.upload(path, bytes).await
        }

        async fn url(&self, path: &str) -> Result<String> {
            self.inner.url(path).await
        }
    }

    #[tokio::test]
    async fn test_busy_while_upload_is_pending() {
        let (started_tx, started_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let storage = Arc::new(MemoryStorage::new("laboratories"));
        let objects = Arc::new(HeldUpload {
            started: Mutex::new(Some(started_tx)),
            release: Mutex::new(Some(release_rx)),
            inner: MemoryObjectStore::new("https://cdn.example"),
        });
        let service = IntakeService::new(storage.clone(), objects, "images");
        let admin = Arc::new(AdminForm::new());
        fill(&admin, acme());
        assert_eq!(admin.submit_label(), "Add Laboratory");

        let pending = {
            let admin = admin.clone();
            let service = service.clone();
            tokio::spawn(async move { admin.submit(&service).await })
        };
        started_rx.await.unwrap();

        assert!(admin.is_busy());
        assert!(!admin.submit_enabled());
        assert_eq!(admin.submit_label(), "Adding...");
        match admin.submit(&service).await {
            Err(Error::SubmissionInFlight) => {}
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(storage.len().await, 0);

        release_tx.send(()).unwrap();
        let lab = pending.await.unwrap().unwrap();

        assert_eq!(lab.image_url, "https://cdn.example/images/acme.png");
        assert_eq!(storage.len().await, 1);
        assert!(!admin.is_busy());
        assert_eq!(admin.submit_label(), "Add Laboratory");
        assert_eq!(admin.form(), IntakeForm::default());
    }

    #[tokio::test]
    async fn test_written_record_uses_resolved_url() {
        let storage = Arc::new(RecordingStorage::default());
        let service = IntakeService::new(
            storage.clone(),
            Arc::new(CountingObjects::default()),
            "images",
        );
        let admin = AdminForm::new();
        fill(&admin, acme());
        admin.submit(&service).await.unwrap();

        let inserts = storage.inserts.lock().unwrap();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].image_url, "https://cdn.example/images/acme.png");
    }
}
