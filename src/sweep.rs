/// The sweep engine: one best-effort pass over a source directory.
///
/// Each discovered entry is classified by extension, relocated into its
/// bucket directory under the destination root, and reported. Relocation is
/// copy-then-verified-delete so a crash between steps always leaves the file
/// recoverable at the source. Per-entry failures are recorded in the report
/// and never abort the pass; the only fatal error is failing to list the
/// source directory itself.
use crate::bucket::BucketKey;
use crate::config::CompiledFilters;
use crate::notify::{Notifier, RelocationEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, DirEntry};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Fatal errors that abort a whole sweep.
///
/// Everything else is a per-entry outcome captured in the [`SweepReport`].
#[derive(Debug)]
pub enum SweepError {
    /// The source directory could not be enumerated at all.
    DirectoryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryUnavailable { path, source } => {
                write!(f, "Cannot list source directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// What to do when a same-named file already exists in the target bucket.
///
/// The destination is never silently overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Leave the source file untouched and record a `Collision` outcome.
    #[default]
    Skip,
    /// Disambiguate the destination name with a numeric suffix (`a-1.txt`).
    Rename,
}

/// Terminal outcome for one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Copied, verified, and removed from the source.
    Moved,
    /// Copied and verified, but the source could not be removed. The file
    /// exists in both locations and needs external cleanup.
    Orphaned { reason: String },
    /// A same-named file already occupies the target bucket.
    Collision,
    /// The entry is a directory or other non-file; never recursed into.
    NotAFile,
    /// Excluded by the configured filter rules.
    Excluded,
    /// The copy to the destination failed; the source is untouched.
    CopyFailed { reason: String },
    /// The bucket directory could not be created.
    BucketUnavailable { reason: String },
}

impl EntryOutcome {
    /// True for the outcomes where the file ended up in its bucket.
    pub fn is_relocated(&self) -> bool {
        matches!(self, EntryOutcome::Moved | EntryOutcome::Orphaned { .. })
    }
}

/// Whether a notification was attempted for an entry, and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyStatus {
    /// No notification was due (the entry was not confirmed as moved).
    NotAttempted,
    /// The collaborator acknowledged the event.
    Notified,
    /// The single attempt failed; the file stays moved regardless.
    Failed { reason: String },
}

/// The recorded fate of one directory entry.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    /// File name as discovered in the source directory.
    pub name: String,
    /// Bucket key the entry classified into, when it got that far.
    pub bucket: Option<String>,
    /// Destination path, for entries that were copied there.
    pub new_path: Option<PathBuf>,
    /// MIME type sniffed from content, for display only.
    pub mime_type: Option<String>,
    /// Terminal outcome of the relocation.
    pub outcome: EntryOutcome,
    /// Notification status for this entry.
    pub notify: NotifyStatus,
}

/// Complete accounting of one sweep pass.
#[derive(Debug, Serialize)]
pub struct SweepReport {
    /// RFC 3339 timestamp of when the sweep started.
    pub started_at: String,
    /// The directory that was swept.
    pub source: PathBuf,
    /// The destination root the buckets live under.
    pub dest_root: PathBuf,
    /// One record per discovered entry, in discovery order.
    pub records: Vec<SweepRecord>,
}

impl SweepReport {
    fn new(source: &Path, dest_root: &Path) -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            source: source.to_path_buf(),
            dest_root: dest_root.to_path_buf(),
            records: Vec::new(),
        }
    }

    /// Number of entries fully moved (copied, verified, source removed).
    pub fn moved(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == EntryOutcome::Moved)
            .count()
    }

    /// Number of entries left in both locations after a failed delete.
    pub fn orphaned(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, EntryOutcome::Orphaned { .. }))
            .count()
    }

    /// Number of entries that failed to relocate (collisions and errors).
    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| {
                matches!(
                    r.outcome,
                    EntryOutcome::Collision
                        | EntryOutcome::CopyFailed { .. }
                        | EntryOutcome::BucketUnavailable { .. }
                )
            })
            .count()
    }

    /// Number of acknowledged notifications.
    pub fn notified(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.notify == NotifyStatus::Notified)
            .count()
    }

    /// Number of failed notification attempts.
    pub fn notify_failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.notify, NotifyStatus::Failed { .. }))
            .count()
    }

    /// True when the sweep discovered nothing to do.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-bucket counts of files that ended up in their bucket, for
    /// summary display. Orphaned files count too: their copy is in place
    /// even though the source lingers.
    pub fn bucket_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            if record.outcome.is_relocated() {
                if let Some(bucket) = &record.bucket {
                    *counts.entry(bucket.clone()).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

/// How many bytes of a file to sniff for MIME detection.
const MIME_SNIFF_LEN: usize = 8192;

/// Upper bound on numeric suffixes tried by the rename collision policy.
const MAX_RENAME_ATTEMPTS: u32 = 1000;

/// Relocates files from a source directory into extension buckets.
///
/// The engine is configured once (destination root, collision policy,
/// filters) and can then sweep any number of times; re-sweeping a directory
/// whose files were already relocated is a no-op because only entries
/// currently present in the source are candidates.
pub struct SweepEngine {
    dest_root: PathBuf,
    collision: CollisionPolicy,
    filters: CompiledFilters,
}

impl SweepEngine {
    /// Creates an engine that relocates into buckets under `dest_root`.
    pub fn new(dest_root: impl Into<PathBuf>) -> Self {
        Self {
            dest_root: dest_root.into(),
            collision: CollisionPolicy::default(),
            filters: CompiledFilters::default(),
        }
    }

    /// Sets the collision policy for same-named destination files.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    /// Sets the compiled filter rules applied to each discovered entry.
    pub fn with_filters(mut self, filters: CompiledFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Performs one complete, best-effort pass over `source`.
    ///
    /// Every discovered entry yields exactly one [`SweepRecord`]; no failure
    /// path is silently dropped. One entry's failure never affects another.
    ///
    /// # Errors
    ///
    /// Fails only with [`SweepError::DirectoryUnavailable`] when the source
    /// directory cannot be listed. An empty source directory is not an
    /// error; the report simply carries no records.
    pub fn sweep(&self, source: &Path, notifier: &dyn Notifier) -> SweepResult<SweepReport> {
        let entries = fs::read_dir(source).map_err(|e| SweepError::DirectoryUnavailable {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut report = SweepReport::new(source, &self.dest_root);
        for entry in entries.flatten() {
            report.records.push(self.process_entry(&entry, notifier));
        }
        Ok(report)
    }

    /// Drives one entry through the relocation state machine:
    /// classify, prepare bucket, copy + verify, delete, notify.
    fn process_entry(&self, entry: &DirEntry, notifier: &dyn Notifier) -> SweepRecord {
        let name = entry.file_name().to_string_lossy().to_string();
        let source_path = entry.path();

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            return SweepRecord {
                name,
                bucket: None,
                new_path: None,
                mime_type: None,
                outcome: EntryOutcome::NotAFile,
                notify: NotifyStatus::NotAttempted,
            };
        }

        if !self.filters.should_sweep(&source_path) {
            return SweepRecord {
                name,
                bucket: None,
                new_path: None,
                mime_type: None,
                outcome: EntryOutcome::Excluded,
                notify: NotifyStatus::NotAttempted,
            };
        }

        let key = BucketKey::from_file_name(&name);
        let bucket = Some(key.as_str().to_string());
        let mime_type = detect_mime(&source_path);

        let record = |outcome, new_path| SweepRecord {
            name: name.clone(),
            bucket: bucket.clone(),
            new_path,
            mime_type: mime_type.clone(),
            outcome,
            notify: NotifyStatus::NotAttempted,
        };

        // Bucket creation is idempotent: "already exists" is success.
        let bucket_dir = self.dest_root.join(key.dir_name());
        if let Err(e) = fs::create_dir_all(&bucket_dir) {
            return record(
                EntryOutcome::BucketUnavailable {
                    reason: e.to_string(),
                },
                None,
            );
        }

        let dest_path = match self.resolve_destination(&bucket_dir, &name) {
            Some(path) => path,
            None => return record(EntryOutcome::Collision, None),
        };

        if let Err(e) = copy_verified(&source_path, &dest_path) {
            return record(
                EntryOutcome::CopyFailed {
                    reason: e.to_string(),
                },
                None,
            );
        }

        if let Err(e) = fs::remove_file(&source_path) {
            // The copy is verified, so the file now exists in both places.
            return record(
                EntryOutcome::Orphaned {
                    reason: e.to_string(),
                },
                Some(dest_path),
            );
        }

        let event = RelocationEvent {
            path: dest_path.to_string_lossy().to_string(),
            original_name: name.clone(),
        };
        let notify = match notifier.notify(&event) {
            Ok(()) => NotifyStatus::Notified,
            Err(e) => NotifyStatus::Failed {
                reason: e.to_string(),
            },
        };

        let mut rec = record(EntryOutcome::Moved, Some(dest_path));
        rec.notify = notify;
        rec
    }

    /// Picks the destination path inside the bucket, applying the collision
    /// policy when a same-named file is already present. Returns `None` when
    /// the collision cannot be resolved under the configured policy.
    fn resolve_destination(&self, bucket_dir: &Path, name: &str) -> Option<PathBuf> {
        let direct = bucket_dir.join(name);
        if !direct.exists() {
            return Some(direct);
        }

        match self.collision {
            CollisionPolicy::Skip => None,
            CollisionPolicy::Rename => {
                for n in 1..MAX_RENAME_ATTEMPTS {
                    let candidate = bucket_dir.join(suffixed_name(name, n));
                    if !candidate.exists() {
                        return Some(candidate);
                    }
                }
                None
            }
        }
    }
}

/// Builds `a-1.txt` from `a.txt`, or `notes-1` from `notes`.
fn suffixed_name(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{}-{}.{}", stem, n, ext)
        }
        _ => format!("{}-{}", name, n),
    }
}

/// Copies `src` to `dst` and verifies the byte count before declaring
/// success. On any copy failure the partial destination file is removed
/// best-effort and the source is never touched. Callers guarantee `dst`
/// did not exist beforehand, so anything present there after a failure is
/// garbage from this attempt.
fn copy_verified(src: &Path, dst: &Path) -> std::io::Result<()> {
    let expected = fs::metadata(src)?.len();
    let written = match fs::copy(src, dst) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(dst);
            return Err(e);
        }
    };
    if written != expected {
        let _ = fs::remove_file(dst);
        return Err(std::io::Error::new(
            std::io::ErrorKind::WriteZero,
            format!("short copy: {} of {} bytes", written, expected),
        ));
    }
    Ok(())
}

/// Sniffs the MIME type from the leading bytes of a file.
///
/// Display metadata only; routing is strictly by extension.
fn detect_mime(path: &Path) -> Option<String> {
    let mut file = fs::File::open(path).ok()?;
    let mut buf = vec![0u8; MIME_SNIFF_LEN];
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(_) => return None,
        }
    }
    infer::get(&buf[..filled]).map(|kind| kind.mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotifyError, Notifier};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records every event it is handed; optionally fails each attempt.
    struct RecordingNotifier {
        events: Mutex<Vec<RelocationEvent>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn seen(&self) -> Vec<RelocationEvent> {
            self.events.lock().expect("Lock poisoned").clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, event: &RelocationEvent) -> Result<(), NotifyError> {
            self.events
                .lock()
                .expect("Lock poisoned")
                .push(event.clone());
            if self.fail {
                Err(NotifyError::Transport {
                    reason: "connection refused".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_sweep_moves_file_into_extension_bucket() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        let dest = temp.path().join("out");
        fs::create_dir(&source).expect("Failed to create source");
        fs::write(source.join("report.pdf"), b"pdf bytes").expect("Failed to write file");

        let engine = SweepEngine::new(&dest);
        let notifier = RecordingNotifier::new();
        let report = engine.sweep(&source, &notifier).expect("Sweep failed");

        assert_eq!(report.moved(), 1);
        assert!(dest.join("pdf").join("report.pdf").exists());
        assert!(!source.join("report.pdf").exists());
        assert_eq!(report.records[0].notify, NotifyStatus::Notified);
    }

    #[test]
    fn test_notification_carries_new_path_and_original_name() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        let dest = temp.path().join("out");
        fs::create_dir(&source).expect("Failed to create source");
        fs::write(source.join("Report.PDF"), b"x").expect("Failed to write file");

        let engine = SweepEngine::new(&dest);
        let notifier = RecordingNotifier::new();
        engine.sweep(&source, &notifier).expect("Sweep failed");

        let events = notifier.seen();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].original_name, "Report.PDF");
        assert_eq!(
            events[0].path,
            dest.join("pdf").join("Report.PDF").to_string_lossy()
        );
    }

    #[test]
    fn test_empty_source_is_not_an_error() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        fs::create_dir(&source).expect("Failed to create source");

        let engine = SweepEngine::new(temp.path().join("out"));
        let report = engine
            .sweep(&source, &RecordingNotifier::new())
            .expect("Sweep failed");

        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let engine = SweepEngine::new(temp.path().join("out"));

        let result = engine.sweep(&temp.path().join("missing"), &RecordingNotifier::new());
        assert!(matches!(
            result,
            Err(SweepError::DirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn test_subdirectory_is_not_a_file_and_not_recursed() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        fs::create_dir_all(source.join("archive")).expect("Failed to create subdir");
        fs::write(source.join("archive").join("inner.txt"), b"x")
            .expect("Failed to write inner file");

        let engine = SweepEngine::new(temp.path().join("out"));
        let report = engine
            .sweep(&source, &RecordingNotifier::new())
            .expect("Sweep failed");

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].outcome, EntryOutcome::NotAFile);
        assert!(source.join("archive").join("inner.txt").exists());
    }

    #[test]
    fn test_collision_skip_keeps_both_files_intact() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        let dest = temp.path().join("out");
        fs::create_dir(&source).expect("Failed to create source");
        fs::create_dir_all(dest.join("txt")).expect("Failed to create bucket");
        fs::write(dest.join("txt").join("a.txt"), b"existing").expect("Failed to write dest");
        fs::write(source.join("a.txt"), b"incoming").expect("Failed to write source");

        let engine = SweepEngine::new(&dest);
        let notifier = RecordingNotifier::new();
        let report = engine.sweep(&source, &notifier).expect("Sweep failed");

        assert_eq!(report.records[0].outcome, EntryOutcome::Collision);
        assert_eq!(
            fs::read(dest.join("txt").join("a.txt")).expect("Failed to read dest"),
            b"existing"
        );
        assert_eq!(
            fs::read(source.join("a.txt")).expect("Failed to read source"),
            b"incoming"
        );
        assert!(notifier.seen().is_empty());
    }

    #[test]
    fn test_collision_rename_disambiguates() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        let dest = temp.path().join("out");
        fs::create_dir(&source).expect("Failed to create source");
        fs::create_dir_all(dest.join("txt")).expect("Failed to create bucket");
        fs::write(dest.join("txt").join("a.txt"), b"existing").expect("Failed to write dest");
        fs::write(source.join("a.txt"), b"incoming").expect("Failed to write source");

        let engine = SweepEngine::new(&dest).with_collision_policy(CollisionPolicy::Rename);
        let report = engine
            .sweep(&source, &RecordingNotifier::new())
            .expect("Sweep failed");

        assert_eq!(report.records[0].outcome, EntryOutcome::Moved);
        assert!(dest.join("txt").join("a-1.txt").exists());
        assert_eq!(
            fs::read(dest.join("txt").join("a.txt")).expect("Failed to read dest"),
            b"existing"
        );
        assert!(!source.join("a.txt").exists());
    }

    #[test]
    fn test_notify_failure_does_not_roll_back_the_move() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        let dest = temp.path().join("out");
        fs::create_dir(&source).expect("Failed to create source");
        fs::write(source.join("a.txt"), b"x").expect("Failed to write file");

        let engine = SweepEngine::new(&dest);
        let notifier = RecordingNotifier::failing();
        let report = engine.sweep(&source, &notifier).expect("Sweep failed");

        assert_eq!(report.records[0].outcome, EntryOutcome::Moved);
        assert!(matches!(
            report.records[0].notify,
            NotifyStatus::Failed { .. }
        ));
        assert!(dest.join("txt").join("a.txt").exists());
        assert!(!source.join("a.txt").exists());
        // Exactly one attempt, no retry
        assert_eq!(notifier.seen().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_yields_copy_failed_and_source_intact() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        fs::create_dir(&source).expect("Failed to create source");
        let file = source.join("secret.txt");
        fs::write(&file, b"x").expect("Failed to write file");
        fs::set_permissions(&file, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");

        // Permission bits don't bind root; skip when the file stays readable.
        if fs::read(&file).is_ok() {
            fs::set_permissions(&file, fs::Permissions::from_mode(0o644))
                .expect("Failed to restore permissions");
            return;
        }

        let engine = SweepEngine::new(temp.path().join("out"));
        let notifier = RecordingNotifier::new();
        let report = engine.sweep(&source, &notifier).expect("Sweep failed");

        assert!(matches!(
            report.records[0].outcome,
            EntryOutcome::CopyFailed { .. }
        ));
        assert!(file.exists());
        assert!(
            !temp.path().join("out").join("txt").join("secret.txt").exists(),
            "No destination file should remain after a failed copy"
        );
        assert!(notifier.seen().is_empty());

        fs::set_permissions(&file, fs::Permissions::from_mode(0o644))
            .expect("Failed to restore permissions");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_copy_cleans_up_partial_destination() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("Failed to create temp directory");
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("a-copy.txt");
        fs::write(&src, b"payload").expect("Failed to write source");
        fs::set_permissions(&src, fs::Permissions::from_mode(0o200))
            .expect("Failed to set permissions");

        // Permission bits don't bind root; skip when the file stays readable.
        if fs::read(&src).is_ok() {
            return;
        }

        // Stands in for bytes written before the copy erred.
        fs::write(&dst, b"part").expect("Failed to write destination");

        assert!(copy_verified(&src, &dst).is_err());
        assert!(!dst.exists(), "Partial destination should be removed");
        assert!(src.exists());
    }

    #[test]
    fn test_suffixed_name_variants() {
        assert_eq!(suffixed_name("a.txt", 1), "a-1.txt");
        assert_eq!(suffixed_name("backup.tar.gz", 2), "backup.tar-2.gz");
        assert_eq!(suffixed_name("notes", 1), "notes-1");
        assert_eq!(suffixed_name(".env", 3), ".env-3");
    }

    #[test]
    fn test_bucket_counts_include_orphaned_copies() {
        let record = |bucket: &str, outcome| SweepRecord {
            name: format!("file.{}", bucket),
            bucket: Some(bucket.to_string()),
            new_path: None,
            mime_type: None,
            outcome,
            notify: NotifyStatus::NotAttempted,
        };
        let report = SweepReport {
            started_at: chrono::Utc::now().to_rfc3339(),
            source: PathBuf::from("/in"),
            dest_root: PathBuf::from("/out"),
            records: vec![
                record("txt", EntryOutcome::Moved),
                record(
                    "txt",
                    EntryOutcome::Orphaned {
                        reason: "source is read-only".to_string(),
                    },
                ),
                record("pdf", EntryOutcome::Collision),
            ],
        };

        // Moved and orphaned copies sit in their bucket; collisions do not.
        let counts = report.bucket_counts();
        assert_eq!(counts.get("txt"), Some(&2));
        assert_eq!(counts.get("pdf"), None);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("in");
        fs::create_dir(&source).expect("Failed to create source");
        fs::write(source.join("a.txt"), b"x").expect("Failed to write file");

        let engine = SweepEngine::new(temp.path().join("out"));
        let report = engine
            .sweep(&source, &RecordingNotifier::new())
            .expect("Sweep failed");

        let json = serde_json::to_value(&report).expect("Failed to serialize report");
        assert_eq!(json["records"][0]["name"], "a.txt");
        assert_eq!(json["records"][0]["outcome"], "moved");
        assert_eq!(json["records"][0]["notify"], "notified");
    }
}
