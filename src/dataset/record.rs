// src/dataset/record.rs

use csv::StringRecord;

/// One dataset row: header names (case as written) paired with cell text.
///
/// Only case-insensitive lookup is exposed; callers never walk the raw keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Pairs `headers` with `row`. Cells missing from a short row are left
    /// out; cells beyond the header width are dropped.
    pub fn from_csv(headers: &StringRecord, row: &StringRecord) -> Self {
        Self {
            fields: headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Value of the first field whose name matches `name` ignoring case, or
    /// `""` when there is none.
    pub fn get(&self, name: &str) -> &str {
        let wanted = name.to_lowercase();
        self.fields
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Free-function form of [`Record::get`].
pub fn get_field<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name)
}
