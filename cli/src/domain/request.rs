//! The caller's provisioning request.

use crate::domain::error::ProvisionError;

/// What to provision: currently only the machine image to boot.
///
/// Construction validates the input, so holding a `ProvisionRequest` means
/// the image identifier is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    image_id: String,
}

impl ProvisionRequest {
    /// Build a request from raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::MissingImage`] if `image_id` is empty or
    /// whitespace only.
    pub fn new(image_id: &str) -> Result<Self, ProvisionError> {
        let image_id = image_id.trim();
        if image_id.is_empty() {
            return Err(ProvisionError::MissingImage);
        }
        Ok(Self {
            image_id: image_id.to_owned(),
        })
    }

    #[must_use]
    pub fn image_id(&self) -> &str {
        &self.image_id
    }
}
