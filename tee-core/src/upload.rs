//! Uploaded image values and file-read bookkeeping.
//!
//! Reading a selected or dropped file completes asynchronously. Each read
//! takes a [`ReadTicket`] from the [`ImageSlot`]; when the read finishes,
//! its result is kept only if no newer read has started since. The slot
//! keeps showing the previous image until then.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Opaque reference to an uploaded image, held as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Build image data from a file's MIME type and raw bytes.
    ///
    /// Returns `None` when the content type is missing or not `image/*`;
    /// such files are ignored without surfacing an error.
    pub fn from_upload(content_type: Option<&str>, bytes: &[u8]) -> Option<Self> {
        let mime = content_type?.trim();
        if !is_image_mime(mime) {
            log::warn!("ignoring upload with content type {mime:?}");
            return None;
        }
        Some(Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes))))
    }

    /// Wrap an existing URL (data URL or asset path) without checking it.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_url(&self) -> &str {
        &self.0
    }
}

/// True for `image/...` MIME types.
pub fn is_image_mime(mime: &str) -> bool {
    mime.split_once('/')
        .map(|(kind, sub)| kind.eq_ignore_ascii_case("image") && !sub.is_empty())
        .unwrap_or(false)
}

/// Token identifying one in-flight file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// The draft's single custom image plus read tracking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSlot {
    current: Option<ImageData>,
    generation: u64,
}

impl ImageSlot {
    pub fn current(&self) -> Option<&ImageData> {
        self.current.as_ref()
    }

    /// Start a new read, superseding any read still in flight.
    pub fn begin_read(&mut self) -> ReadTicket {
        self.generation += 1;
        ReadTicket(self.generation)
    }

    /// Deliver the result of a read.
    ///
    /// Stores `data` and returns `true` only if `ticket` is the latest one
    /// and the read produced an image.
    pub fn finish_read(&mut self, ticket: ReadTicket, data: Option<ImageData>) -> bool {
        if ticket.0 != self.generation {
            log::debug!("discarding superseded image read {}", ticket.0);
            return false;
        }
        match data {
            Some(image) => {
                self.current = Some(image);
                true
            }
            None => false,
        }
    }

    /// Replace the image directly, cancelling interest in pending reads.
    #[cfg(test)]
    pub fn set(&mut self, image: ImageData) {
        self.generation += 1;
        self.current = Some(image);
    }
}
