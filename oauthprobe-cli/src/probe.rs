use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use oauthprobe_core::TokenSource;
use oauthprobe_core::contracts::AccessToken;

/// Key location used when `--key-file` is not given, relative to the working directory.
pub const DEFAULT_KEY_PATH: &str = "mcp-extensions/google-cloud-mcp-extended/service-account.json";

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Announces the project and obtains a token from `source`.
///
/// The token is never written to `out`.
pub async fn acquire_token<W: Write>(
    out: &mut W,
    project_id: &str,
    source: &dyn TokenSource,
) -> Result<AccessToken> {
    writeln!(out, "🔍 Project ID: {}", project_id)?;
    out.flush()?;

    let pb = spinner("Requesting access token...")?;
    let token = source.token().await;
    pb.finish_and_clear();

    let token = token.context("failed to obtain an access token")?;
    if token.token.is_empty() {
        bail!("token source returned an empty access token");
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauthprobe_core::MockTokenSource;
    use oauthprobe_core::errors::AuthError;

    #[tokio::test]
    async fn test_acquire_token_asks_source_once() {
        let mut source = MockTokenSource::new();
        source
            .expect_token()
            .times(1)
            .returning(|| Ok(AccessToken::new("ya29.mock", "Bearer", None)));

        let mut out = Vec::new();
        let token = acquire_token(&mut out, "my-project-123", &source).await.unwrap();

        assert_eq!(token.token, "ya29.mock");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "🔍 Project ID: my-project-123\n");
        assert!(!printed.contains("ya29.mock"));
    }

    #[tokio::test]
    async fn test_auth_error_propagates() {
        let mut source = MockTokenSource::new();
        source.expect_token().times(1).returning(|| {
            Err(AuthError::Rejected {
                error: "invalid_grant".to_string(),
                description: None,
            })
        });

        let mut out = Vec::new();
        let err = acquire_token(&mut out, "p", &source).await.unwrap_err();

        let auth = err.downcast_ref::<AuthError>().expect("AuthError in chain");
        assert!(matches!(auth, AuthError::Rejected { .. }));
        assert!(format!("{err:#}").contains("invalid_grant"));
    }

    #[tokio::test]
    async fn test_empty_token_is_refused() {
        let mut source = MockTokenSource::new();
        source
            .expect_token()
            .times(1)
            .returning(|| Ok(AccessToken::new("", "Bearer", None)));

        let mut out = Vec::new();
        let err = acquire_token(&mut out, "p", &source).await.unwrap_err();
        assert!(err.to_string().contains("empty access token"));
    }
}
