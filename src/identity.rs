use serde::{Deserialize, Serialize};

/// One typed component of a selection key.
///
/// Hosts compose keys from the query names of the columns a data point was
/// produced from, so a part is either the measure (series) component or the
/// category (x position) component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyPart {
    /// Measure / series component (the column's query name).
    Measure(String),
    /// Category component (the category label).
    Category(String),
}

/// Opaque, equality-comparable identity token for a data point or series.
///
/// Keys correlate points across redraws: point objects are recreated on every
/// update, so structural equality of their keys is the only valid way to
/// match them. Two keys are equal iff their part sequences are equal;
/// there is no prefix or containment matching.
///
/// # Examples
///
/// ```
/// use dotchart::SelectionKey;
///
/// let a = SelectionKey::builder().with_measure("sales").with_category("Jan").build();
/// let b = SelectionKey::builder().with_measure("sales").with_category("Jan").build();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    parts: Vec<KeyPart>,
}

impl SelectionKey {
    /// Starts building a new key.
    pub fn builder() -> SelectionKeyBuilder {
        SelectionKeyBuilder { parts: Vec::new() }
    }

    /// Returns a new key with a category part appended.
    ///
    /// Used to derive per-point keys from a series key when the host does
    /// not supply explicit point identities.
    pub fn with_category(&self, category: &str) -> SelectionKey {
        let mut parts = self.parts.clone();
        parts.push(KeyPart::Category(category.to_string()));
        SelectionKey { parts }
    }

    /// Returns the key's parts in build order.
    pub fn parts(&self) -> &[KeyPart] {
        &self.parts
    }

    /// Returns a stable textual form of the key, usable as a host selector.
    pub fn selector(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            match part {
                KeyPart::Measure(name) => {
                    out.push_str("measure:");
                    out.push_str(name);
                }
                KeyPart::Category(label) => {
                    out.push_str("category:");
                    out.push_str(label);
                }
            }
        }
        out
    }
}

/// Builder for [`SelectionKey`], mirroring how hosts assemble identities
/// from the columns backing a data point.
pub struct SelectionKeyBuilder {
    parts: Vec<KeyPart>,
}

impl SelectionKeyBuilder {
    /// Appends a measure part (the series column's query name).
    pub fn with_measure(mut self, query_name: &str) -> Self {
        self.parts.push(KeyPart::Measure(query_name.to_string()));
        self
    }

    /// Appends a category part (the category label).
    pub fn with_category(mut self, label: &str) -> Self {
        self.parts.push(KeyPart::Category(label.to_string()));
        self
    }

    /// Finishes the key.
    pub fn build(self) -> SelectionKey {
        SelectionKey { parts: self.parts }
    }
}

/// An ordered set of selection keys.
///
/// Preserves host confirmation order (useful for stable overlay ordering)
/// while providing set semantics. Sets are small, a handful of selected
/// points, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: Vec<SelectionKey>,
}

impl SelectionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Creates a set from a confirmed key list, dropping duplicates.
    pub fn from_keys(keys: Vec<SelectionKey>) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.insert(key);
        }
        set
    }

    /// Returns true if the key is a member.
    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Inserts a key if not already present. Returns true if inserted.
    pub fn insert(&mut self, key: SelectionKey) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Removes a key if present. Returns true if removed.
    pub fn remove(&mut self, key: &SelectionKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates keys in confirmation order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectionKey> {
        self.keys.iter()
    }

    /// Returns the keys as a slice, in confirmation order.
    pub fn as_slice(&self) -> &[SelectionKey] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(measure: &str, category: &str) -> SelectionKey {
        SelectionKey::builder()
            .with_measure(measure)
            .with_category(category)
            .build()
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(key("m1", "A"), key("m1", "A"));
        assert_ne!(key("m1", "A"), key("m1", "B"));
        assert_ne!(key("m1", "A"), key("m2", "A"));
    }

    #[test]
    fn test_no_containment_matching() {
        // A series-level key is not equal to a point-level key derived from it
        let series = SelectionKey::builder().with_measure("m1").build();
        let point = series.with_category("A");
        assert_ne!(series, point);
    }

    #[test]
    fn test_part_order_matters() {
        let a = SelectionKey::builder()
            .with_measure("m")
            .with_category("A")
            .build();
        let b = SelectionKey::builder()
            .with_category("A")
            .with_measure("m")
            .build();
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_insert_remove_round_trip() {
        let mut set = SelectionSet::new();
        assert!(set.insert(key("m", "A")));
        assert!(!set.insert(key("m", "A")));
        assert_eq!(set.len(), 1);

        assert!(set.remove(&key("m", "A")));
        assert!(set.is_empty());
        assert!(!set.remove(&key("m", "A")));
    }

    #[test]
    fn test_set_preserves_order() {
        let mut set = SelectionSet::new();
        set.insert(key("m", "B"));
        set.insert(key("m", "A"));
        let order: Vec<_> = set.iter().cloned().collect();
        assert_eq!(order, vec![key("m", "B"), key("m", "A")]);
    }

    #[test]
    fn test_selector_text() {
        assert_eq!(key("sales", "Jan").selector(), "measure:sales/category:Jan");
    }
}
