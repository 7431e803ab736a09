//! Upload plan construction.

use sitepush_compress::{Compression, sibling_path};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The deduplicated, deterministically ordered set of local files scheduled
/// for upload in one run.
///
/// Entries come out in two buckets: everything else first, then anything
/// whose path contains `index.htm` — the publish-ordering invariant. An
/// entry-point page referencing hashed assets must never be reachable
/// before those assets exist at the destination. The partition is
/// structural; it does not rely on a stable sort surviving the lexical
/// dedupe ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    entries: Vec<PathBuf>,
}

impl UploadPlan {
    /// Builds the final plan from the scan result and the list of originals
    /// that gained compressed siblings.
    ///
    /// For every compressed original the `.br` and `.gz` artifact paths are
    /// appended, the whole set is deduplicated (overlapping discovery could
    /// otherwise upload the same key twice), and each bucket is ordered
    /// lexically for run-to-run determinism.
    pub fn build(scanned: Vec<PathBuf>, compressed: &[PathBuf]) -> Self {
        let mut everything: BTreeSet<PathBuf> = scanned.into_iter().collect();
        for original in compressed {
            for format in Compression::ARTIFACTS {
                everything.insert(sibling_path(original, format));
            }
        }
        // BTreeSet iteration is lexical; the partition keeps that order
        // within each bucket.
        let (index, mut entries): (Vec<_>, Vec<_>) =
            everything.into_iter().partition(|path| is_index(path));
        entries.extend(index);
        Self { entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for UploadPlan {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Whether a path names an entry point that must upload last.
fn is_index(path: &Path) -> bool {
    path.to_string_lossy().contains("index.htm")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        raw.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_artifacts_are_appended() {
        let plan = UploadPlan::build(
            paths(&["site/app.a1b2c3.js", "site/index.html", "site/logo.png"]),
            &paths(&["site/app.a1b2c3.js"]),
        );
        assert_eq!(
            plan.entries(),
            paths(&[
                "site/app.a1b2c3.js",
                "site/app.a1b2c3.js.br",
                "site/app.a1b2c3.js.gz",
                "site/logo.png",
                "site/index.html",
            ])
            .as_slice()
        );
    }

    #[test]
    fn test_deduplicates_entries() {
        let plan = UploadPlan::build(paths(&["a.css", "a.css", "b.css"]), &[]);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_index_is_last_even_when_lexically_first() {
        // "index.html" sorts before "zz.txt" lexically; the plan must not care.
        let plan = UploadPlan::build(paths(&["index.html", "zz.txt"]), &[]);
        assert_eq!(plan.entries(), paths(&["zz.txt", "index.html"]).as_slice());
    }

    #[test]
    fn test_all_index_variants_are_last() {
        let plan = UploadPlan::build(
            paths(&["docs/index.htm", "index.html", "app.js", "zebra.css"]),
            &[],
        );
        assert_eq!(
            plan.entries(),
            paths(&["app.js", "zebra.css", "docs/index.htm", "index.html"]).as_slice()
        );
    }

    #[test]
    fn test_index_siblings_stay_in_the_index_bucket() {
        // A compressed index sibling still contains the marker substring and
        // must not land before the assets either.
        let plan = UploadPlan::build(paths(&["index.html", "app.js"]), &paths(&["index.html"]));
        assert_eq!(
            plan.entries(),
            paths(&["app.js", "index.html", "index.html.br", "index.html.gz"]).as_slice()
        );
    }

    #[test]
    fn test_empty_scan_is_an_empty_plan() {
        let plan = UploadPlan::build(vec![], &[]);
        assert!(plan.is_empty());
    }
}
