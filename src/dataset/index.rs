// src/dataset/index.rs

use csv::ReaderBuilder;
use std::{collections::HashMap, io::Read};
use tracing::{debug, trace};

use super::record::Record;
use crate::text::normalize;

/// Normalized title → row, plus every normalized title in the order it was
/// first seen.
///
/// When two rows normalize to the same title the later row replaces the
/// earlier one, but the title keeps its original position in `titles`.
#[derive(Debug, Default)]
pub struct DatasetIndex {
    rows_by_title: HashMap<String, Record>,
    titles: Vec<String>,
}

impl DatasetIndex {
    /// Parse a headed CSV stream. Rows without a usable `title` cell are
    /// skipped; any CSV or UTF-8 error aborts the whole build.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut index = Self::default();
        let mut skipped = 0usize;
        for result in rdr.records() {
            let row = result?;
            if !index.insert(Record::from_csv(&headers, &row)) {
                skipped += 1;
            }
        }

        debug!(
            titles = index.titles.len(),
            skipped, "indexed dataset rows"
        );
        Ok(index)
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut index = Self::default();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Returns `false` if the row had no title to index under.
    fn insert(&mut self, record: Record) -> bool {
        let title = record.get("title").trim();
        if title.is_empty() {
            return false;
        }
        let key = normalize(title);
        if key.is_empty() {
            trace!(title, "title normalizes to nothing; skipping");
            return false;
        }

        if self.rows_by_title.insert(key.clone(), record).is_none() {
            self.titles.push(key);
        }
        true
    }

    /// Row stored under an already-normalized title.
    pub fn get(&self, normalized_title: &str) -> Option<&Record> {
        self.rows_by_title.get(normalized_title)
    }

    /// Normalized titles in first-seen order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
