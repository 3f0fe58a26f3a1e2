//! Property-based tests for status classification and request validation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use wplaunch_cli::domain::instance::public_url;
use wplaunch_cli::domain::{InstanceStatus, ProvisionError, ProvisionRequest};

proptest! {
    /// Every code whose low byte is neither pending nor running is a failure
    /// carrying the original code.
    #[test]
    fn prop_other_codes_are_failed(code in any::<i32>()) {
        let low = code & 0xff;
        prop_assume!(low != 0 && low != 16);
        prop_assert_eq!(InstanceStatus::from_code(code), InstanceStatus::Failed(code));
    }

    /// Non-blank image ids are accepted and trimmed.
    #[test]
    fn prop_non_blank_images_accepted(id in "[a-z0-9-]{1,32}", pad in " {0,3}") {
        let request = ProvisionRequest::new(&format!("{pad}{id}{pad}"))
            .expect("non-blank image accepted");
        prop_assert_eq!(request.image_id(), id.as_str());
    }

    /// Whitespace-only image ids never produce a request.
    #[test]
    fn prop_blank_images_rejected(blank in "[ \t\n]{0,8}") {
        prop_assert!(matches!(
            ProvisionRequest::new(&blank),
            Err(ProvisionError::MissingImage)
        ));
    }

    /// URLs always carry the http scheme in front of the DNS name.
    #[test]
    fn prop_public_url_prefixes_scheme(host in "[a-z0-9.-]{1,64}") {
        let url = public_url(&host);
        prop_assert!(url.starts_with("http://"));
        prop_assert!(url.ends_with(&host));
    }
}
