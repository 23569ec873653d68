// Wed Jan 21 2026 - Alex

use crate::catalog::{CatalogClient, RawRecord, RecordKind, AUTHOR_SECTIONS};
use crate::credentials::Credential;
use crate::normalize::{
    expect_kind, NormalizeError, NormalizedAuthor, NormalizedCoauthor, NormalizedPublication, Schema,
};
use log::debug;
use serde_json::Value;

pub struct RecordNormalizer<'a> {
    catalog: &'a dyn CatalogClient,
    credential: Option<&'a Credential>,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(catalog: &'a dyn CatalogClient, credential: Option<&'a Credential>) -> Self {
        Self { catalog, credential }
    }

    pub fn normalize_author(&self, raw: &mut RawRecord) -> Result<NormalizedAuthor, NormalizeError> {
        expect_kind(raw, NormalizedAuthor::KIND)?;

        if !raw.covers_sections(AUTHOR_SECTIONS) {
            debug!(
                "filling author {} (sections {:?})",
                raw.get_str("scholar_id").unwrap_or("?"),
                raw.filled_sections()
            );
            self.catalog.fill(raw, self.credential)?;
        }

        let mut author = NormalizedAuthor::default();
        author.copy_fields(raw.as_map(), |_| false)?;

        author.publications = self.normalize_list(raw, "publications", RecordKind::Publication, |n, r| {
            n.normalize_publication(r)
        })?;
        author.coauthors = self.normalize_list(raw, "coauthors", RecordKind::Author, |_, r| {
            Self::normalize_coauthor(r)
        })?;

        Ok(author)
    }

    pub fn normalize_publication(&self, raw: &mut RawRecord) -> Result<NormalizedPublication, NormalizeError> {
        expect_kind(raw, NormalizedPublication::KIND)?;

        if !raw.is_filled() {
            debug!("filling publication {}", raw.get_str("author_pub_id").unwrap_or("?"));
            self.catalog.fill(raw, self.credential)?;
        }

        NormalizedPublication::merge(raw.as_map(), raw.bib())
    }

    pub fn normalize_coauthor(raw: &RawRecord) -> Result<NormalizedCoauthor, NormalizeError> {
        expect_kind(raw, NormalizedCoauthor::KIND)?;

        let mut coauthor = NormalizedCoauthor::default();
        coauthor.copy_fields(raw.as_map(), |_| false)?;
        Ok(coauthor)
    }

    /// Normalizes each element of a nested list in order. Fills performed on an
    /// element are written back into `raw`. A missing or non-list value leaves
    /// the output field unset.
    fn normalize_list<T, F>(
        &self,
        raw: &mut RawRecord,
        key: &str,
        expected: RecordKind,
        normalize: F,
    ) -> Result<Option<Vec<T>>, NormalizeError>
    where
        F: Fn(&Self, &mut RawRecord) -> Result<T, NormalizeError>,
    {
        let Some(Value::Array(items)) = raw.get_mut(key) else {
            return Ok(None);
        };

        let mut normalized = Vec::with_capacity(items.len());
        for item in items.iter_mut() {
            let Value::Object(map) = item else {
                return Err(NormalizeError::SchemaMismatch { expected, found: None });
            };

            let mut record = RawRecord::from_map(std::mem::take(map));
            let result = normalize(self, &mut record);
            *map = record.into_map();
            normalized.push(result?);
        }

        Ok(Some(normalized))
    }
}
