use thiserror::Error;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoUploadError {
    #[error("Logo file is empty")]
    Empty,

    #[error("Logo must be a PNG image")]
    NotPng,

    #[error("Logo exceeds {max} bytes")]
    TooLarge { max: usize },
}

#[derive(Debug, Clone)]
pub struct LogoUploadPolicy {
    pub max_file_size_bytes: usize,
}

impl LogoUploadPolicy {
    pub const CONTENT_TYPE: &'static str = "image/png";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 2 * 1024 * 1024;

    pub fn check(&self, bytes: &[u8]) -> Result<(), LogoUploadError> {
        if bytes.is_empty() {
            return Err(LogoUploadError::Empty);
        }
        if bytes.len() > self.max_file_size_bytes {
            return Err(LogoUploadError::TooLarge {
                max: self.max_file_size_bytes,
            });
        }
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(LogoUploadError::NotPng);
        }
        Ok(())
    }

    /// `logo-<unix millis>.png`
    pub fn file_name(millis: i64) -> String {
        format!("logo-{}.png", millis)
    }
}

impl Default for LogoUploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

#[cfg(test)]
pub(crate) fn png_bytes() -> Vec<u8> {
    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend_from_slice(b"\0\0\0\rIHDR");
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_passes() {
        assert!(LogoUploadPolicy::default().check(&png_bytes()).is_ok());
    }

    #[test]
    fn test_non_png_is_rejected() {
        let policy = LogoUploadPolicy::default();
        assert_eq!(policy.check(b"GIF89a...."), Err(LogoUploadError::NotPng));
        assert_eq!(policy.check(&[]), Err(LogoUploadError::Empty));
    }

    #[test]
    fn test_size_limit() {
        let policy = LogoUploadPolicy {
            max_file_size_bytes: 4,
        };
        assert_eq!(
            policy.check(&png_bytes()),
            Err(LogoUploadError::TooLarge { max: 4 })
        );
    }

    #[test]
    fn test_file_name_uses_millis() {
        assert_eq!(LogoUploadPolicy::file_name(1717171717171), "logo-1717171717171.png");
    }
}
