//! Image naming rules for uploaded concert pictures.

use std::path::{Component, Path};

use uuid::Uuid;

/// Extension of an uploaded filename, including the leading dot.
///
/// Extensions that are not plain ASCII alphanumerics are dropped.
pub fn image_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(format!(".{}", ext))
}

/// Generate a random stored name for an upload.
///
/// The base is 32 lowercase hex characters; the original extension is kept.
pub fn generate_image_name(original_filename: &str) -> String {
    let base = Uuid::new_v4().simple().to_string();
    match image_extension(original_filename) {
        Some(ext) => format!("{}{}", base, ext),
        None => base,
    }
}

/// Check that a requested image name is a single plain path component.
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}
