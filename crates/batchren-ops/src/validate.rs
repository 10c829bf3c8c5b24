//! File name validation.

/// Maximum length of a single file name in bytes.
const MAX_NAME_LEN: usize = 255;

/// Check that a staged name is a single, usable path component.
///
/// Returns a short reason when the name cannot be used.
pub fn validate_filename(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }

    if name.len() > MAX_NAME_LEN {
        return Err(format!("name is too long (max {MAX_NAME_LEN} bytes)"));
    }

    for c in ['/', '\0'] {
        if name.contains(c) {
            return Err(format!("name cannot contain {c:?}"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        for c in ['\\', ':', '*', '?', '"', '<', '>', '|'] {
            if name.contains(c) {
                return Err(format!("name cannot contain {c:?}"));
            }
        }
    }

    if name == "." || name == ".." {
        return Err("'.' and '..' are reserved names".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filename_valid() {
        assert!(validate_filename("test.txt").is_ok());
        assert!(validate_filename(".hidden").is_ok());
        assert!(validate_filename("file with spaces").is_ok());
        assert!(validate_filename("x_c_t.txt").is_ok());
    }

    #[test]
    fn test_validate_filename_invalid() {
        assert!(validate_filename("").is_err());
        assert!(validate_filename("sub/file").is_err());
        assert!(validate_filename("nul\0byte").is_err());
        assert!(validate_filename(".").is_err());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename(&"a".repeat(256)).is_err());
    }
}
