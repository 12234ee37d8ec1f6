//! The instructions printed once the token exchange has proven the key works.
//!
//! There is no public API for creating regular OAuth clients, so the report
//! walks through creating the iOS client in the Cloud Console by hand.

use std::io::{self, Write};

pub const IOS_CLIENT_NAME: &str = "Mila iOS Client";
pub const IOS_BUNDLE_ID: &str = "com.peanutventures.mila";

/// Console page that creates an OAuth client for `project_id`.
pub fn console_url(project_id: &str) -> String {
    format!("https://console.cloud.google.com/apis/credentials/oauthclient?project={project_id}")
}

pub fn render_report(project_id: &str) -> String {
    let mut out = String::new();
    out.push_str("\n❌ Research result:\n");
    out.push_str("   Google does NOT allow programmatic creation of OAuth clients\n");
    out.push_str("   This is a deliberate security decision by Google\n");

    out.push_str("\n🔒 Reasons:\n");
    out.push_str("   1. OAuth clients have access to user data\n");
    out.push_str("   2. Manual review prevents abuse\n");
    out.push_str("   3. The Console UI enforces human verification\n");

    out.push_str("\n✅ What IS possible:\n");
    out.push_str("   - IAP OAuth clients (for Identity-Aware Proxy)\n");
    out.push_str("   - Creating service accounts\n");
    out.push_str("   - Generating API keys\n");
    out.push_str("   - But NOT: regular OAuth clients for apps\n");

    out.push_str("\n📱 iOS OAuth Client - manual steps:\n");
    out.push_str(&format!("\n1. Open: {}\n", console_url(project_id)));
    out.push_str("2. Fill in:\n");
    out.push_str("   - Application type: iOS\n");
    out.push_str(&format!("   - Name: {IOS_CLIENT_NAME}\n"));
    out.push_str(&format!("   - Bundle ID: {IOS_BUNDLE_ID}\n"));
    out.push_str("3. Click Create\n");
    out.push_str("4. Copy the Client ID\n");
    out.push_str("\n⏱️ Time required: about 30 seconds\n");
    out
}

pub fn write_report<W: Write>(out: &mut W, project_id: &str) -> io::Result<()> {
    out.write_all(render_report(project_id).as_bytes())?;
    out.flush()
}

/// Prints the report to standard output.
pub fn report(project_id: &str) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), project_id)
}
