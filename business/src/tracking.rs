//! Tracking payload construction.
//!
//! When a Google Analytics tracking id is set, the URL embedded in the QR
//! symbol carries four fixed query parameters so scans can be attributed
//! to the printed code. Without a tracking id the base URL passes through
//! untouched.

/// Build the URL string embedded in the QR symbol.
///
/// Pure function of its inputs: an empty `tracking_id` returns `base_url`
/// unchanged, otherwise the four analytics parameters are appended in a
/// fixed order. The tracking id is percent-encoded; the base URL is the
/// user's to get right.
pub fn build_tracking_payload(base_url: &str, tracking_id: &str) -> String {
    if tracking_id.is_empty() {
        return base_url.to_owned();
    }

    format!(
        "{base_url}?utm_source=qr_code&utm_medium=offline&utm_campaign=qr_campaign&ga_tracking_id={}",
        urlencoding::encode(tracking_id)
    )
}
