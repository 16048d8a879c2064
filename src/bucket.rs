/// Extension-based bucket classification.
///
/// Every file swept out of the source directory lands in a destination
/// subdirectory ("bucket") named after its lower-cased file extension.
/// Files without an extension are not skipped; they route to the `noext`
/// sentinel bucket so that every discovered file is classified.
///
/// # Examples
///
/// ```
/// use sweepdir::bucket::BucketKey;
///
/// assert_eq!(BucketKey::from_file_name("Report.PDF").as_str(), "pdf");
/// assert_eq!(BucketKey::from_file_name("archive.tar.gz").as_str(), "gz");
/// assert_eq!(BucketKey::from_file_name("notes").as_str(), "noext");
/// ```

/// Sentinel bucket for files without a usable extension.
pub const NO_EXTENSION_BUCKET: &str = "noext";

/// The destination bucket a file routes to, keyed by extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey(String);

impl BucketKey {
    /// Classifies a file name into its bucket key.
    ///
    /// The key is the substring after the last `.`, lower-cased. Names with
    /// no `.`, names that are only a leading dot (hidden files like `.env`),
    /// and names with a trailing dot all route to [`NO_EXTENSION_BUCKET`].
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                BucketKey(ext.to_lowercase())
            }
            _ => BucketKey(NO_EXTENSION_BUCKET.to_string()),
        }
    }

    /// Returns the bucket key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the directory name for this bucket under the destination root.
    pub fn dir_name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
