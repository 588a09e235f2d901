use crate::models::upload_types::Toast;

const SUPPORTED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/tiff",
    "application/dicom",
    "application/octet-stream",
    "application/json",
    "text/plain",
    "application/x-ipynb+json",
    "text/csv",
    "application/pdf",
    "application/zip",
    "application/x-zip-compressed",
];

const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "dcm", "dicom", "json", "txt", "ipynb",
    "csv", "pdf", "zip",
];

pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnsupportedType,
    TooLarge,
}

impl Rejection {
    pub fn toast(&self) -> Toast {
        match self {
            Rejection::UnsupportedType => Toast::destructive(
                "Invalid File Type",
                "Please upload medical images, datasets, or analysis files (JPEG, PNG, DICOM, \
                 JSON, CSV, Jupyter notebooks, etc.)"
                    .to_string(),
            ),
            Rejection::TooLarge => Toast::destructive(
                "File Too Large",
                "Please upload images smaller than 50MB".to_string(),
            ),
        }
    }
}

/// Validates declared metadata only; file bytes are never inspected. Either a
/// known media type or a known extension is enough to pass the type check.
pub fn validate(name: &str, size: u64, content_type: Option<&str>) -> Result<(), Rejection> {
    let type_ok = content_type
        .map(|t| SUPPORTED_TYPES.contains(&t))
        .unwrap_or(false);

    let lowered = name.to_lowercase();
    let extension = lowered.rsplit('.').next().unwrap_or("");
    let extension_ok = SUPPORTED_EXTENSIONS.contains(&extension);

    if !type_ok && !extension_ok {
        return Err(Rejection::UnsupportedType);
    }

    if size > MAX_FILE_SIZE {
        return Err(Rejection::TooLarge);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_jpeg_by_declared_type() {
        assert!(validate("scan", 2 * 1024 * 1024, Some("image/jpeg")).is_ok());
    }

    #[test]
    fn accepts_by_extension_when_type_unknown() {
        // DICOM files often arrive with a generic or missing media type
        assert!(validate("ct_scan_045.DCM", 1024, Some("application/foo")).is_ok());
        assert!(validate("results.ipynb", 1024, None).is_ok());
    }

    #[test]
    fn rejects_unknown_type_and_extension() {
        assert_eq!(
            validate("malware.exe", 1024, Some("application/x-msdownload")),
            Err(Rejection::UnsupportedType)
        );
    }

    #[test]
    fn rejects_oversize_file() {
        // Scenario: a 60MB scan must be refused even with a valid type
        assert_eq!(
            validate("scan.jpg", 60 * 1024 * 1024, Some("image/jpeg")),
            Err(Rejection::TooLarge)
        );
        assert_eq!(
            Rejection::TooLarge.toast().title,
            "File Too Large".to_string()
        );
    }

    #[test]
    fn accepts_file_at_exact_size_limit() {
        assert!(validate("scan.jpg", MAX_FILE_SIZE, None).is_ok());
        assert!(validate("scan.jpg", MAX_FILE_SIZE + 1, None).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(validate("CHEST_XRAY.JPG", 1024, None).is_ok());
    }
}
