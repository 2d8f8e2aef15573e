//! Requester number validation for the booking boundary.
//!
//! The dispatch core treats requester ids as opaque strings. Front ends that
//! accept phone numbers from a form run them through [`validate_phone`] first.

/// Required length of a requester phone number.
pub const PHONE_LEN: usize = 10;

/// Operator prefixes accepted by [`validate_phone`].
pub const ALLOWED_PHONE_PREFIXES: [&str; 4] = ["078", "079", "072", "073"];

/// Returns `true` when `phone` is exactly ten ASCII digits with an allowed prefix.
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == PHONE_LEN
        && phone.bytes().all(|b| b.is_ascii_digit())
        && ALLOWED_PHONE_PREFIXES
            .iter()
            .any(|prefix| phone.starts_with(prefix))
}
