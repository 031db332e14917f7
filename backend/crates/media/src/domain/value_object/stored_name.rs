//! Stored Name Value Object
//!
//! Files are stored as `<stamp>-<original name>`. Stamps are milliseconds
//! since the epoch, forced strictly increasing across the process so two
//! uploads in the same millisecond still get distinct names.
//!
//! The original name is reduced to `[A-Za-z0-9._-]` (anything else becomes
//! `_`) and shortened so the whole stored name fits in [`MAX_STORED_LEN`]
//! bytes. The result is a single path segment that needs no escaping.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use kernel::validation::ValidationError;

/// Strictly increasing millisecond stamps
#[derive(Debug, Default)]
pub struct MonotonicStamp {
    last: AtomicI64,
}

impl MonotonicStamp {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Next stamp: `now_ms`, or one past the previous stamp if that is later
    pub fn next_at(&self, now_ms: i64) -> i64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now_ms.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }

    pub fn next(&self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }
}

static PROCESS_STAMP: MonotonicStamp = MonotonicStamp::new();

/// Common filesystem limit for a single path component
pub const MAX_STORED_LEN: usize = 255;

/// Extensions longer than this are treated as part of the base when shortening
const MAX_EXTENSION_LEN: usize = 16;

/// Name a file is stored under inside its bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredName(String);

impl StoredName {
    /// Stamp a client-supplied name with the process-wide clock
    pub fn new(original_name: &str) -> Result<Self, ValidationError> {
        Self::with_stamp(PROCESS_STAMP.next(), original_name)
    }

    pub fn with_stamp(stamp: i64, original_name: &str) -> Result<Self, ValidationError> {
        let prefix = format!("{}-", stamp);
        let base = sanitize(original_name)?;
        let base = shorten(base, MAX_STORED_LEN - prefix.len());
        Ok(Self(prefix + &base))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keep only the final path component, whatever the separator, and map
/// every character outside `[A-Za-z0-9._-]` to `_`
fn sanitize(original_name: &str) -> Result<String, ValidationError> {
    let base = original_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        return Err(ValidationError::Required { field: "File name" });
    }

    Ok(base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect())
}

/// Cut an ASCII name to `max` bytes, keeping a short extension intact
fn shorten(mut name: String, max: usize) -> String {
    if name.len() <= max {
        return name;
    }
    match name.rfind('.') {
        Some(dot) if dot > 0 && name.len() - dot <= MAX_EXTENSION_LEN => {
            let ext = name.split_off(dot);
            name.truncate(max - ext.len());
            name + &ext
        }
        _ => {
            name.truncate(max);
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_strictly_increases() {
        let stamp = MonotonicStamp::new();
        assert_eq!(stamp.next_at(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(stamp.next_at(1_700_000_000_000), 1_700_000_000_001);
        // Clock going backwards still moves forward
        assert_eq!(stamp.next_at(1_600_000_000_000), 1_700_000_000_002);
        assert_eq!(stamp.next_at(1_800_000_000_000), 1_800_000_000_000);
    }

    #[test]
    fn test_concurrent_stamps_are_unique() {
        let stamp = std::sync::Arc::new(MonotonicStamp::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stamp = stamp.clone();
                std::thread::spawn(move || (0..500).map(|_| stamp.next_at(42)).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 4000);
    }

    #[test]
    fn test_stored_name_format() {
        let name = StoredName::with_stamp(1_700_000_000_000, "avatar.png").unwrap();
        assert_eq!(name.as_str(), "1700000000000-avatar.png");
    }

    #[test]
    fn test_path_components_dropped() {
        let name = StoredName::with_stamp(1, "../../etc/passwd").unwrap();
        assert_eq!(name.as_str(), "1-passwd");

        let name = StoredName::with_stamp(1, r"C:\Users\ada\clip.mp4").unwrap();
        assert_eq!(name.as_str(), "1-clip.mp4");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(StoredName::with_stamp(1, "").is_err());
        assert!(StoredName::with_stamp(1, "dir/").is_err());
        assert!(StoredName::with_stamp(1, "..").is_err());
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        let name = StoredName::with_stamp(1, "clip#1.png").unwrap();
        assert_eq!(name.as_str(), "1-clip_1.png");

        let name = StoredName::with_stamp(1, "my pic?.png").unwrap();
        assert_eq!(name.as_str(), "1-my_pic_.png");

        let name = StoredName::with_stamp(1, "café%20.jpg").unwrap();
        assert_eq!(name.as_str(), "1-caf__20.jpg");
    }

    #[test]
    fn test_long_name_fits_filesystem_limit() {
        let long = "a".repeat(260) + ".png";
        let name = StoredName::with_stamp(1_700_000_000_000, &long).unwrap();
        assert_eq!(name.as_str().len(), MAX_STORED_LEN);
        assert!(name.as_str().starts_with("1700000000000-aaa"));
        assert!(name.as_str().ends_with("a.png"));

        // No usable extension: plain cut
        let long = "b".repeat(400);
        let name = StoredName::with_stamp(i64::MAX, &long).unwrap();
        assert_eq!(name.as_str().len(), MAX_STORED_LEN);
    }

    #[test]
    fn test_same_original_name_gets_distinct_names() {
        let a = StoredName::new("clip.mp4").unwrap();
        let b = StoredName::new("clip.mp4").unwrap();
        assert_ne!(a, b);
    }
}
