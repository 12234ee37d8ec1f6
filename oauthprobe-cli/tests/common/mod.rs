#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

pub const TEST_PRIVATE_KEY: &str =
    include_str!("../../../oauthprobe/oauthprobe-provider-google/tests/fixtures/test-private-key.pem");

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.temp_dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn key_json(project_id: &str, token_uri: &str) -> Value {
    json!({
        "type": "service_account",
        "project_id": project_id,
        "private_key_id": "test-private-key-id",
        "private_key": TEST_PRIVATE_KEY,
        "client_email": format!("probe@{project_id}.iam.gserviceaccount.com"),
        "token_uri": token_uri,
    })
}

/// The instructional block exactly as the binary must print it.
pub fn expected_report(project_id: &str) -> String {
    format!(
        "
❌ Research result:
   Google does NOT allow programmatic creation of OAuth clients
   This is a deliberate security decision by Google

🔒 Reasons:
   1. OAuth clients have access to user data
   2. Manual review prevents abuse
   3. The Console UI enforces human verification

✅ What IS possible:
   - IAP OAuth clients (for Identity-Aware Proxy)
   - Creating service accounts
   - Generating API keys
   - But NOT: regular OAuth clients for apps

📱 iOS OAuth Client - manual steps:

1. Open: https://console.cloud.google.com/apis/credentials/oauthclient?project={project_id}
2. Fill in:
   - Application type: iOS
   - Name: Mila iOS Client
   - Bundle ID: com.peanutventures.mila
3. Click Create
4. Copy the Client ID

⏱️ Time required: about 30 seconds
"
    )
}
