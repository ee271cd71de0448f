//! Webhook constants.

/// GitHub event header.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
/// GitHub SHA-1 signature header.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature";
/// GitHub SHA-256 signature header, preferred when present.
pub const GITHUB_SIGNATURE_256_HEADER: &str = "X-Hub-Signature-256";
/// Repository links base.
pub const GITHUB_WEB_URL: &str = "https://github.com";
