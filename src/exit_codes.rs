//! Exit code constants for the mlkit CLI.
//!
//! One code per error class in the crate taxonomy:
//! - 0: Success
//! - 1: Not found (a required path does not exist)
//! - 2: Parse failure (malformed YAML/JSON/base64)
//! - 3: Serialization failure (value cannot cross the disk boundary)
//! - 4: Filesystem failure (permissions, disk-full, other OS errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// A required file or directory does not exist.
pub const NOT_FOUND: i32 = 1;

/// Input content was malformed: invalid YAML, JSON, or base64.
pub const PARSE_FAILURE: i32 = 2;

/// A value could not be serialized or deserialized.
pub const SERIALIZATION_FAILURE: i32 = 3;

/// An OS-level I/O failure: permission denied, disk full, and similar.
pub const FILESYSTEM_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            NOT_FOUND,
            PARSE_FAILURE,
            SERIALIZATION_FAILURE,
            FILESYSTEM_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
