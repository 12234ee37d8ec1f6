#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Throwaway 2048-bit RSA key, never registered with any issuer.
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test-private-key.pem");

pub const TEST_PROJECT_ID: &str = "my-project-123";
pub const TEST_CLIENT_EMAIL: &str = "probe@my-project-123.iam.gserviceaccount.com";

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.temp_dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn missing_file(&self, relative_path: &str) -> PathBuf {
        self.temp_dir.path().join(relative_path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete key document pointing at `token_uri`.
pub fn key_json(token_uri: &str) -> Value {
    json!({
        "type": "service_account",
        "project_id": TEST_PROJECT_ID,
        "private_key_id": "test-private-key-id",
        "private_key": TEST_PRIVATE_KEY,
        "client_email": TEST_CLIENT_EMAIL,
        "client_id": "100000000000000000000",
        "auth_uri": "https://accounts.google.com/o/oauth2/auth",
        "token_uri": token_uri,
        "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
        "client_x509_cert_url": "https://www.googleapis.com/robot/v1/metadata/x509/probe",
        "universe_domain": "googleapis.com",
    })
}
