use axum::http::HeaderMap;

/// The reporter's IP as observed by the reverse proxy. Deployment assumes
/// a proxy in front of this service that sets `X-Real-IP`; there is no
/// fallback to the socket peer address, matching the source's behavior.
pub fn client_ip(headers: &HeaderMap) -> Option<&str> {
    headers.get("X-Real-IP")?.to_str().ok()
}
