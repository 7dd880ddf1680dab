use crate::value::{Key, Snapshot};

/// Keys of two same-kind containers partitioned by presence.
///
/// `shared` and `missing` follow expected's listing order; `extra` follows
/// actual's. The implicit array length is never a key, so it never appears
/// in any partition.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PropertySplit {
    pub(crate) shared: Vec<Key>,
    pub(crate) missing: Vec<Key>,
    pub(crate) extra: Vec<Key>,
}

impl PropertySplit {
    pub(crate) fn of(expected: &Snapshot, actual: &Snapshot) -> Self {
        let mut split = Self::default();
        for key in expected.properties.keys() {
            if actual.properties.contains_key(key) {
                split.shared.push(key.clone());
            } else {
                split.missing.push(key.clone());
            }
        }
        split.extra = actual
            .properties
            .keys()
            .filter(|key| !expected.properties.contains_key(*key))
            .cloned()
            .collect();
        split
    }
}
