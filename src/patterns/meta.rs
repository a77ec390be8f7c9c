//! Discourse markers that introduce examples or referenced material
//!
//! Lines carrying these markers often discuss quoted or sample content rather
//! than being quoted content themselves. The set is small and curated; it is
//! owned by this module so it can evolve without touching the feature layer.

const META_DISCUSSION_MARKERS: [&str; 10] = [
    "例えば",
    "以下の",
    "下記の",
    "次の",
    "サンプル",
    "具体例",
    "参考まで",
    "添付の",
    "上記の",
    "前述の",
];

/// Check whether a line contains a meta-discussion marker.
#[must_use]
pub fn has_meta_discussion(line: &str) -> bool {
    META_DISCUSSION_MARKERS.iter().any(|m| line.contains(m))
}
