/// Insertion-ordered attribute storage with unique keys.
///
/// Backed by a flat list because real-world tags carry few attributes; a
/// linear scan beats a map here and keeps serialization order stable.
/// A `None` value models a boolean attribute (`<input disabled>`), which
/// serializes back as the bare key.
///
/// Re-setting an existing key overwrites its value in place, keeping the
/// key's original position. Key lookups are exact (case-sensitive).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrList {
    entries: Vec<(String, Option<String>)>,
}

impl AttrList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the value of `key`, or `None` when the key is absent or the
    /// attribute is boolean.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns true if `key` is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes `key` and returns its value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl FromIterator<(String, Option<String>)> for AttrList {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::AttrList;

    #[test]
    fn insertion_order_is_preserved() {
        let mut attrs = AttrList::new();
        attrs.set("id", Some("a".to_string()));
        attrs.set("class", Some("b".to_string()));
        attrs.set("title", None);

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["id", "class", "title"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut attrs = AttrList::new();
        attrs.set("id", Some("a".to_string()));
        attrs.set("class", Some("b".to_string()));
        attrs.set("id", Some("c".to_string()));

        let entries: Vec<(&str, Option<&str>)> = attrs.iter().collect();
        assert_eq!(entries, [("id", Some("c")), ("class", Some("b"))]);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn boolean_attribute_is_present_without_value() {
        let mut attrs = AttrList::new();
        attrs.set("disabled", None);

        assert!(attrs.contains("disabled"));
        assert_eq!(attrs.value("disabled"), None);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let mut attrs = AttrList::new();
        attrs.set("Data", Some("x".to_string()));

        assert!(attrs.contains("Data"));
        assert!(!attrs.contains("data"));
    }

    #[test]
    fn remove_returns_the_old_value() {
        let mut attrs = AttrList::new();
        attrs.set("id", Some("a".to_string()));

        assert_eq!(attrs.remove("id"), Some(Some("a".to_string())));
        assert_eq!(attrs.remove("id"), None);
        assert!(attrs.is_empty());
    }
}
