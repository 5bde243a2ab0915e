//! Seek-and-decode loop over a whole cache file.

use std::collections::HashMap;
use std::path::Path;

use appshelf_core::TitleRecord;

use crate::decoder::Decoder;
use crate::error::VdfError;
use crate::extract::extract_record;

/// Bytes that open every title's `common` section: the end of the enclosing
/// name, the array tag, then `common` and its terminator.
pub const RECORD_BOUNDARY: &[u8] = b"\x00\x00common\x00";

/// Result of scanning one cache buffer.
#[derive(Debug, Clone, Default)]
pub struct CacheScan {
    /// One record per id, in first-seen order.
    pub records: Vec<TitleRecord>,
    /// Sections that failed to decode and were skipped.
    pub skipped: usize,
}

/// Decode every title section in `data`.
///
/// Sections that fail to decode are skipped by seeking to the next
/// boundary. Repeated ids are merged, so the result does not depend on how
/// many times a raw entry appears.
pub fn scan_records(data: &[u8]) -> CacheScan {
    let mut decoder = Decoder::new(data);
    let mut scan = CacheScan::default();
    let mut index: HashMap<u32, usize> = HashMap::new();

    while decoder.seek_to(RECORD_BOUNDARY) {
        let node = match decoder.decode() {
            Ok(Some(node)) => node,
            Ok(None) => break,
            Err(e) => {
                log::debug!("Cache: skipping unreadable section: {e}");
                scan.skipped += 1;
                continue;
            }
        };
        let Some(record) = extract_record(&node) else {
            continue;
        };
        match index.get(&record.id) {
            Some(&i) => scan.records[i].merge_in(&record),
            None => {
                index.insert(record.id, scan.records.len());
                scan.records.push(record);
            }
        }
    }

    scan
}

/// Read and scan a cache file.
pub fn scan_file(path: &Path) -> Result<CacheScan, VdfError> {
    let data = std::fs::read(path)?;
    let scan = scan_records(&data);
    log::debug!(
        "Cache: scanned {} bytes from {}: {} records, {} skipped",
        data.len(),
        path.display(),
        scan.records.len(),
        scan.skipped
    );
    Ok(scan)
}

#[cfg(test)]
#[path = "tests/scan_tests.rs"]
mod tests;
