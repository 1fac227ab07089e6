//! Static asset helpers: file name sanitization, content-type sniffing,
//! and HTTP cache header values.

use std::sync::OnceLock;
use std::time::SystemTime;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use sha2::{Digest, Sha256};

// Cached for performance
static IMAGE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Reduce a requested image name to a safe file name.
///
/// Takes the final path component and strips every character outside
/// `[a-zA-Z0-9._-]`, so separators and traversal tricks cannot reach
/// outside the public directory. Returns `None` when nothing survives.
pub fn sanitize_image_name(raw: &str) -> Option<String> {
    let regex = IMAGE_NAME_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9._-]").unwrap());

    let base = raw.rsplit(['/', '\\']).next().unwrap_or("");
    let clean = regex.replace_all(base, "").into_owned();
    if clean.is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Sniff a served file's content type from its magic bytes.
///
/// Unrecognized content is served as `application/octet-stream`.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) => "application/octet-stream",
    }
}

/// Strong ETag over the exact bytes served.
pub fn content_etag(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("\"{}\"", hex::encode(digest))
}

/// Format a timestamp the way HTTP date headers expect.
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// `Expires` header value a number of seconds from now.
pub fn expires_after(seconds: i64) -> String {
    http_date(Utc::now() + Duration::seconds(seconds))
}

/// `Last-Modified` header value for a file's modification time.
pub fn last_modified(time: SystemTime) -> String {
    http_date(DateTime::<Utc>::from(time))
}
