/// Raw bytes of a source plus the content type the transport declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPayload {
    pub bytes: Vec<u8>,
    /// Full `Content-Type` header value, parameters included. Absent for
    /// local files.
    pub content_type: Option<String>,
}

impl FetchedPayload {
    pub fn local(bytes: Vec<u8>) -> Self {
        Self { bytes, content_type: None }
    }

    pub fn remote(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self { bytes, content_type }
    }
}
