use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating email addresses
    /// Alphanumerics, dots, underscores, percent signs, plus signs and dashes
    /// before the @; a top-level domain of at least two letters after it.
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

    /// Regex for validating full names: letters and spaces only
    pub static ref FULL_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z\s]+$").unwrap();

    /// Regex for validating phone numbers: 10 to 15 digits
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\d{10,15}$").unwrap();

    /// Regex for validating timezones: "UTC" or "Area/Location" form
    /// - Valid: "UTC", "Asia/Dhaka", "America/New_York"
    /// - Invalid: "EST5EDT", "asia dhaka"
    pub static ref TIMEZONE_REGEX: Regex =
        Regex::new(r"^(UTC|[A-Za-z]+(?:/[A-Za-z_]+)+)$").unwrap();

    /// Regex for validating entity status filters
    pub static ref STATUS_REGEX: Regex = Regex::new(r"^(active|inactive|deleted)$").unwrap();

    /// Regex for validating sign-up options
    pub static ref SIGN_UP_OPTION_REGEX: Regex = Regex::new(r"^(general|google)$").unwrap();

    /// Regex for validating category and brand names
    /// Alphanumerics, spaces, hyphens, underscores and ampersands
    /// - Valid: "Phones", "Sound Equipment", "Type-C", "Audio & Video"
    /// - Invalid: "Sound@Equipment", "Phones!"
    pub static ref ENTITY_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9\s\-_&]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("jane.doe@example.com"));
        assert!(EMAIL_REGEX.is_match("jane+tag@sub.example.co"));
        assert!(EMAIL_REGEX.is_match("a_b%c@example.io"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("jane.doe@example")); // no TLD
        assert!(!EMAIL_REGEX.is_match("@example.com")); // no local part
        assert!(!EMAIL_REGEX.is_match("jane doe@example.com")); // space
    }

    #[test]
    fn test_full_name_regex() {
        assert!(FULL_NAME_REGEX.is_match("Jane Doe"));
        assert!(!FULL_NAME_REGEX.is_match("Jane Doe 2"));
        assert!(!FULL_NAME_REGEX.is_match(""));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_REGEX.is_match("0123456789"));
        assert!(PHONE_REGEX.is_match("012345678901234"));
        assert!(!PHONE_REGEX.is_match("012345678")); // 9 digits
        assert!(!PHONE_REGEX.is_match("0123456789012345")); // 16 digits
        assert!(!PHONE_REGEX.is_match("01234-56789"));
    }

    #[test]
    fn test_timezone_regex() {
        assert!(TIMEZONE_REGEX.is_match("UTC"));
        assert!(TIMEZONE_REGEX.is_match("Asia/Dhaka"));
        assert!(TIMEZONE_REGEX.is_match("America/New_York"));
        assert!(!TIMEZONE_REGEX.is_match("EST5EDT"));
        assert!(!TIMEZONE_REGEX.is_match("asia dhaka"));
    }

    #[test]
    fn test_status_regex() {
        assert!(STATUS_REGEX.is_match("active"));
        assert!(STATUS_REGEX.is_match("inactive"));
        assert!(STATUS_REGEX.is_match("deleted"));
        assert!(!STATUS_REGEX.is_match("Active"));
        assert!(!STATUS_REGEX.is_match("archived"));
    }

    #[test]
    fn test_sign_up_option_regex() {
        assert!(SIGN_UP_OPTION_REGEX.is_match("general"));
        assert!(SIGN_UP_OPTION_REGEX.is_match("google"));
        assert!(!SIGN_UP_OPTION_REGEX.is_match("github"));
    }

    #[test]
    fn test_entity_name_regex() {
        assert!(ENTITY_NAME_REGEX.is_match("Phones"));
        assert!(ENTITY_NAME_REGEX.is_match("Sound Equipment"));
        assert!(ENTITY_NAME_REGEX.is_match("Type-C"));
        assert!(ENTITY_NAME_REGEX.is_match("Audio & Video"));
        assert!(!ENTITY_NAME_REGEX.is_match("Sound@Equipment"));
        assert!(!ENTITY_NAME_REGEX.is_match("Phones!"));
    }
}
