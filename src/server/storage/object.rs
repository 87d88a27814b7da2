//! Storage backend uploading to an S3-compatible object store over plain HTTP.
//!
//! Objects are written with `PUT {endpoint}/{bucket}/{folder}/{name}` and read back
//! with `GET` on the same key. A bearer token is attached to both when configured.
//! Stored locations are absolute URLs under the public base, which defaults to the
//! bucket URL.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    StatusCode,
};

use crate::server::{
    error::storage::StorageError,
    storage::{generate_file_name, split_relative, StorageBackend, UploadFolder},
};

pub struct ObjectStorage {
    client: reqwest::Client,
    bucket_url: String,
    public_url: String,
    auth_bearer: Option<String>,
}

impl ObjectStorage {
    /// Creates an object store backend.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `endpoint` - Object store base URL
    /// - `bucket` - Bucket name appended to the endpoint
    /// - `auth_bearer` - Optional bearer token
    /// - `public_url` - Base of the URLs handed to clients, defaults to the bucket URL
    pub fn new(
        client: reqwest::Client,
        endpoint: &str,
        bucket: &str,
        auth_bearer: Option<String>,
        public_url: Option<String>,
    ) -> Self {
        let bucket_url = format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            bucket.trim_matches('/')
        );
        let public_url = public_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| bucket_url.clone());

        Self {
            client,
            bucket_url,
            public_url,
            auth_bearer,
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, StorageError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.auth_bearer {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| StorageError::InvalidLocation("invalid bearer token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Maps a public location back to its object key.
    fn object_key<'l>(&self, location: &'l str) -> Option<&'l str> {
        let relative = location
            .strip_prefix(self.public_url.as_str())?
            .strip_prefix('/')?;
        split_relative(relative).map(|_| relative)
    }
}

#[async_trait]
impl StorageBackend for ObjectStorage {
    async fn store(
        &self,
        folder: UploadFolder,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let name = generate_file_name(original_name);
        let key = format!("{}/{}", folder.as_str(), name);
        let content_type = mime_guess::from_path(&name).first_or_octet_stream();

        self.client
            .put(format!("{}/{}", self.bucket_url, key))
            .headers(self.auth_headers()?)
            .header(CONTENT_TYPE, content_type.as_ref())
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Uploaded object {}", key);

        Ok(format!("{}/{}", self.public_url, key))
    }

    fn owns(&self, location: &str) -> bool {
        self.object_key(location).is_some()
    }

    async fn fetch(&self, location: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let key = self
            .object_key(location)
            .ok_or_else(|| StorageError::InvalidLocation(location.to_string()))?;

        let response = self
            .client
            .get(format!("{}/{}", self.bucket_url, key))
            .headers(self.auth_headers()?)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(Some(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    type Objects = Arc<Mutex<HashMap<String, Vec<u8>>>>;

    /// Minimal object store answering PUT and GET on arbitrary keys.
    ///
    /// Requests without the expected bearer token are answered with 403.
    async fn spawn_object_store(token: &'static str) -> (String, Objects) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("addr");
        let objects: Objects = Arc::default();

        let objects_bg = Arc::clone(&objects);
        tokio::spawn(async move {
            loop {
                let (mut stream, _) = match listener.accept().await {
                    Ok(v) => v,
                    Err(_) => break,
                };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 4096];
                let header_end = loop {
                    let n = stream.read(&mut chunk).await.expect("read req");
                    if n == 0 {
                        break None;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                    if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                        break Some(pos + 4);
                    }
                };
                let Some(header_end) = header_end else {
                    continue;
                };

                let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
                let content_length = head
                    .lines()
                    .find_map(|l| {
                        l.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                while buf.len() < header_end + content_length {
                    let n = stream.read(&mut chunk).await.expect("read body");
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                }
                let body = buf[header_end..].to_vec();

                let mut first = head.lines().next().unwrap_or_default().split_whitespace();
                let method = first.next().unwrap_or_default().to_string();
                let path = first.next().unwrap_or_default().to_string();
                let authorized = head
                    .lines()
                    .any(|l| l.eq_ignore_ascii_case(&format!("authorization: Bearer {token}")));

                let (status, payload) = if !authorized {
                    ("403 Forbidden", Vec::new())
                } else if method == "PUT" {
                    objects_bg.lock().unwrap().insert(path, body);
                    ("200 OK", Vec::new())
                } else {
                    match objects_bg.lock().unwrap().get(&path) {
                        Some(bytes) => ("200 OK", bytes.clone()),
                        None => ("404 Not Found", Vec::new()),
                    }
                };

                let mut response = format!(
                    "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    payload.len()
                )
                .into_bytes();
                response.extend_from_slice(&payload);
                let _ = stream.write_all(&response).await;
            }
        });

        (format!("http://{addr}"), objects)
    }

    #[tokio::test]
    async fn uploads_and_reads_back_objects() -> Result<(), StorageError> {
        let (endpoint, objects) = spawn_object_store("secret").await;
        let storage = ObjectStorage::new(
            reqwest::Client::new(),
            &endpoint,
            "schoolmate",
            Some("secret".to_string()),
            None,
        );

        let location = storage
            .store(UploadFolder::Uploads, "board.png", b"image".to_vec())
            .await?;

        assert!(location.starts_with(&format!("{endpoint}/schoolmate/uploads/")));
        assert!(storage.owns(&location));
        assert_eq!(objects.lock().unwrap().len(), 1);
        assert_eq!(storage.fetch(&location).await?, Some(b"image".to_vec()));

        Ok(())
    }

    #[tokio::test]
    async fn missing_object_is_none() -> Result<(), StorageError> {
        let (endpoint, _) = spawn_object_store("secret").await;
        let storage = ObjectStorage::new(
            reqwest::Client::new(),
            &endpoint,
            "schoolmate",
            Some("secret".to_string()),
            Some("https://cdn.example.com/".to_string()),
        );

        let missing = storage
            .fetch("https://cdn.example.com/profileimg/1-00000000.png")
            .await?;

        assert_eq!(missing, None);

        Ok(())
    }

    #[tokio::test]
    async fn rejected_upload_is_an_error() {
        let (endpoint, objects) = spawn_object_store("secret").await;
        let storage = ObjectStorage::new(
            reqwest::Client::new(),
            &endpoint,
            "schoolmate",
            Some("wrong".to_string()),
            None,
        );

        let result = storage
            .store(UploadFolder::Uploads, "board.png", b"image".to_vec())
            .await;

        assert!(matches!(result, Err(StorageError::Http(_))));
        assert!(objects.lock().unwrap().is_empty());
    }

    #[test]
    fn public_url_defines_ownership() {
        let storage = ObjectStorage::new(
            reqwest::Client::new(),
            "https://s3.example.com/",
            "bucket",
            None,
            Some("https://cdn.example.com".to_string()),
        );

        assert!(storage.owns("https://cdn.example.com/uploads/1-ab.png"));
        assert!(!storage.owns("https://s3.example.com/bucket/uploads/1-ab.png"));
        assert!(!storage.owns("https://cdn.example.com/other/1-ab.png"));
        assert!(!storage.owns("https://lh3.googleusercontent.com/a/photo"));
    }
}
