use serde::ser::{Serialize, SerializeMap, Serializer};

/// Records from a list response, in the order the daemon sent them.
pub type RecordList = Vec<Record>;

/// One decoded entity: a song, a status snapshot, an output device.
///
/// Field names are unique. Fields keep the order the daemon emitted them in
/// so printed output reads like the wire response; lookups ignore order.
/// The typed accessors are lenient views that fall back to the supplied
/// default when a field is absent or does not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Inserts a field, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let owned_key: String = key.into();
        let owned_value: String = value.into();
        match self
            .fields
            .iter_mut()
            .find(|(existing, _)| *existing == owned_key)
        {
            Some((_, slot)) => Some(std::mem::replace(slot, owned_value)),
            None => {
                self.fields.push((owned_key, owned_value));
                None
            }
        }
    }

    /// Raw value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the record holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Values in emission order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// Field value, or `default` when the field is absent or empty.
    #[must_use]
    pub fn string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).filter(|value| !value.is_empty()).unwrap_or(default)
    }

    /// Field parsed as `i32`.
    #[must_use]
    pub fn int(&self, key: &str, default: i32) -> i32 {
        self.parsed(key).unwrap_or(default)
    }

    /// Field parsed as `i64`.
    #[must_use]
    pub fn int64(&self, key: &str, default: i64) -> i64 {
        self.parsed(key).unwrap_or(default)
    }

    /// Field parsed as `u8`.
    #[must_use]
    pub fn byte(&self, key: &str, default: u8) -> u8 {
        self.parsed(key).unwrap_or(default)
    }

    /// Field interpreted as a daemon flag, where `1` means set.
    #[must_use]
    pub fn bool(&self, key: &str, default: bool) -> bool {
        self.parsed::<i64>(key).map_or(default, |flag| flag == 1)
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|value| value.parse().ok())
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
