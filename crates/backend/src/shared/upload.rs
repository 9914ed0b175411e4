//! Хранилище загруженных изображений.
//!
//! Имя файла = SHA-256 содержимого + исходное расширение, поэтому повторная
//! загрузка того же файла дает тот же URL и не плодит копии.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::shared::api_error::AppError;
use crate::shared::config::{get_uploads_dir, Config};

/// Допустимые расширения изображений
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "avif"];

/// Папка по умолчанию, если клиент не указал свою
pub const DEFAULT_FOLDER: &str = "misc";

/// Куда и как сохраняются файлы
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Сохранить файл; возвращает публичный URL
    async fn store(&self, folder: &str, file_name: &str, bytes: &[u8]) -> anyhow::Result<String>;

    /// Название хранилища (для логов)
    fn storage_name(&self) -> &str;
}

/// Файлы на локальном диске, раздаются через ServeDir
pub struct LocalFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    pub fn new(root: PathBuf, public_prefix: &str) -> Self {
        Self {
            root,
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, folder: &str, file_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(file_name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!("Upload {} already stored, reusing", path.display());
        } else {
            tokio::fs::write(&path, bytes).await?;
        }

        Ok(format!("{}/{}/{}", self.public_prefix, folder, file_name))
    }

    fn storage_name(&self) -> &str {
        "local"
    }
}

/// Сервис загрузки: проверки + хранилище
pub struct UploadService {
    storage: Box<dyn FileStorage>,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(storage: Box<dyn FileStorage>, max_bytes: usize) -> Self {
        Self { storage, max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Проверить и сохранить файл
    pub async fn save(
        &self,
        folder: Option<&str>,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("File is empty".into()));
        }
        if bytes.len() > self.max_bytes {
            return Err(AppError::PayloadTooLarge {
                limit_bytes: self.max_bytes,
            });
        }
        let extension = image_extension(original_name).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unsupported file type. Allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;

        let folder = sanitize_folder(folder.unwrap_or(DEFAULT_FOLDER));
        let file_name = content_file_name(bytes, &extension);

        let url = self
            .storage
            .store(&folder, &file_name, bytes)
            .await
            .map_err(AppError::Internal)?;
        tracing::info!(
            "Stored upload {} ({} bytes) in {} storage",
            url,
            bytes.len(),
            self.storage.storage_name()
        );
        Ok(url)
    }
}

static UPLOADS: OnceCell<UploadService> = OnceCell::new();

/// Инициализация хранилища загрузок из конфигурации
pub fn initialize_uploads(config: &Config) -> anyhow::Result<PathBuf> {
    let root = get_uploads_dir(config);
    std::fs::create_dir_all(&root)?;
    let storage = LocalFileStorage::new(root.clone(), &config.uploads.public_prefix);
    UPLOADS
        .set(UploadService::new(
            Box::new(storage),
            config.uploads.max_size_bytes(),
        ))
        .map_err(|_| anyhow::anyhow!("Upload storage already initialized"))?;
    Ok(root)
}

pub fn get_uploads() -> Result<&'static UploadService, AppError> {
    UPLOADS
        .get()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Upload storage is not initialized")))
}

/// Имя папки: только [a-z0-9-_], пустое превращается в папку по умолчанию
pub fn sanitize_folder(folder: &str) -> String {
    let cleaned: String = folder
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        DEFAULT_FOLDER.to_string()
    } else {
        cleaned
    }
}

/// Расширение файла в нижнем регистре, если это изображение
pub fn image_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Имя файла по содержимому
pub fn content_file_name(bytes: &[u8], extension: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{}.{}", hex, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_folder() {
        assert_eq!(sanitize_folder("Team"), "team");
        assert_eq!(sanitize_folder("../../etc"), "etc");
        assert_eq!(sanitize_folder("client_logos-2"), "client_logos-2");
        assert_eq!(sanitize_folder("  "), DEFAULT_FOLDER);
        assert_eq!(sanitize_folder("/"), DEFAULT_FOLDER);
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("photo.JPG"), Some("jpg".to_string()));
        assert_eq!(image_extension("logo.final.svg"), Some("svg".to_string()));
        assert_eq!(image_extension("script.sh"), None);
        assert_eq!(image_extension("noext"), None);
    }

    #[test]
    fn test_content_file_name_is_stable() {
        let a = content_file_name(b"hello", "png");
        assert_eq!(
            a,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824.png"
        );
        assert_eq!(a, content_file_name(b"hello", "png"));
        assert_ne!(a, content_file_name(b"hello!", "png"));
    }

    fn service(max_bytes: usize) -> (UploadService, tempfile::TempDir) {
        let tmp = tempfile::TempDir::new().unwrap();
        let storage = LocalFileStorage::new(tmp.path().to_path_buf(), "/uploads/");
        (UploadService::new(Box::new(storage), max_bytes), tmp)
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_url() {
        let (service, tmp) = service(1024);
        let url = service
            .save(Some("Team"), "avatar.png", b"png-bytes")
            .await
            .unwrap();
        let expected_name = content_file_name(b"png-bytes", "png");
        assert_eq!(url, format!("/uploads/team/{}", expected_name));
        assert!(tmp.path().join("team").join(expected_name).exists());

        // тот же файл дает тот же URL
        let again = service
            .save(Some("team"), "copy.PNG", b"png-bytes")
            .await
            .unwrap();
        assert_eq!(again, url);
    }

    #[tokio::test]
    async fn test_save_rejections() {
        let (service, _tmp) = service(4);
        assert!(matches!(
            service.save(None, "a.png", b"").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.save(None, "a.png", b"too large").await,
            Err(AppError::PayloadTooLarge { .. })
        ));
        assert!(matches!(
            service.save(None, "a.exe", b"ok").await,
            Err(AppError::BadRequest(_))
        ));
    }
}
