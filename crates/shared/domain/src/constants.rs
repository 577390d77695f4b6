//! Domain-level constants.
//!
//! These constants define business rules and the user-facing messages
//! attached to them.

// =============================================================================
// Employee Roles
// =============================================================================

/// Role name for doctors
pub const ROLE_DOCTOR: &str = "Doctor";

/// Role name for nurses
pub const ROLE_NURSE: &str = "Nurse";

/// Generic role assigned when the requested role is not recognized
pub const ROLE_EMPLOYEE: &str = "Employee";

// =============================================================================
// CUIL
// =============================================================================

/// Structural pattern of a CUIL: 2 digits, hyphen, 8 digits, hyphen, check digit
pub const CUIL_PATTERN: &str = r"^[0-9]{2}-[0-9]{8}-[0-9]$";

pub const CUIL_EMPTY_MESSAGE: &str = "CUIL cannot be empty.";

pub const CUIL_FORMAT_MESSAGE: &str = "CUIL has an invalid format.";

// =============================================================================
// Authentication
// =============================================================================

/// Returned for both unknown emails and wrong passwords
pub const INVALID_LOGIN_MESSAGE: &str = "Incorrect user or password.";

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required.";

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

// =============================================================================
// Patient intake
// =============================================================================

pub const PARTIAL_AFFILIATION_MESSAGE: &str =
    "If a social work is provided, the affiliate number must be provided too (and vice versa).";

pub const UNKNOWN_SOCIAL_WORK_MESSAGE: &str =
    "The social work does not exist, so the patient cannot be registered.";

pub const NOT_AFFILIATED_MESSAGE: &str =
    "The patient is not affiliated with the social work, so the patient cannot be registered.";
