//! The media catalog: an ordered record collection with a case-insensitive
//! name index, user-defined groups and similarity queries.
//!
//! Every mutation goes through [`MediaCatalog`] so the record list, the name
//! index and the group table stay in step. Records are shared as
//! `Arc<Record>` between the list, the index buckets and query results.
//!
//! Record equality ignores kind, so a book and a movie with the same name and
//! details are equal. The catalog always matches on kind as well: they are
//! separate entries with separate groups.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use bucket_tree::BucketTree;
use media_model::{MediaKind, Record};
use tracing::{debug, info, instrument};

use crate::error::{CatalogError, CatalogResult};
use crate::filters::KindFilter;
use crate::neighbors::{Neighbor, SimilarityIndexBuilder};
use crate::sort::{SortKey, compare_text};

type GroupKey = (MediaKind, Arc<Record>);

fn group_key(record: &Arc<Record>) -> GroupKey {
    (record.kind(), Arc::clone(record))
}

pub struct MediaCatalog {
    /// Always ordered by `sort_key`
    records: Vec<Arc<Record>>,
    name_index: BucketTree<String, Arc<Record>>,
    groups: HashMap<GroupKey, String>,
    sort_key: SortKey,
    index: SimilarityIndexBuilder,
}

impl MediaCatalog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            name_index: BucketTree::with_comparator(|a: &String, b: &String| {
                compare_text(a, b)
            }),
            groups: HashMap::new(),
            sort_key: SortKey::default(),
            index: SimilarityIndexBuilder::new(),
        }
    }

    /// Use a custom similarity configuration for [`find_similar`](Self::find_similar)
    pub fn with_similarity(mut self, index: SimilarityIndexBuilder) -> Self {
        self.index = index;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the current sort order. Records with equal keys keep their
    /// insertion order.
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The catalog's shared handle for a record of the same kind equal to
    /// `record`
    pub fn get(&self, record: &Record) -> Option<&Arc<Record>> {
        self.records.iter().find(|r| same_entry(r, record))
    }

    pub fn contains(&self, record: &Record) -> bool {
        self.get(record).is_some()
    }

    /// Validates `record`, inserts it at its place in the current sort order
    /// and indexes it by name.
    ///
    /// Duplicates are allowed; each copy gets its own slot in the name
    /// bucket.
    ///
    /// # Errors
    /// `InvalidRecord` if the record fails [`Record::validate`].
    pub fn add(&mut self, record: Record) -> CatalogResult<Arc<Record>> {
        record.validate()?;

        let record = Arc::new(record);
        let key = self.sort_key;
        let pos = self
            .records
            .partition_point(|r| key.compare(r, &record) != Ordering::Greater);
        self.name_index.add(record.index_key(), Arc::clone(&record));
        self.records.insert(pos, Arc::clone(&record));

        debug!(name = record.name(), kind = %record.kind(), "Added record");
        Ok(record)
    }

    /// Adds every record in turn, stopping at the first invalid one
    pub fn extend(&mut self, records: impl IntoIterator<Item = Record>) -> CatalogResult<()> {
        for record in records {
            self.add(record)?;
        }
        Ok(())
    }

    /// Removes the first record of the same kind equal to `record`, along
    /// with its index entry and group assignment. Returns `false` if it was
    /// not cataloged.
    pub fn remove(&mut self, record: &Record) -> bool {
        let Some(pos) = self.records.iter().position(|r| same_entry(r, record)) else {
            return false;
        };
        let removed = self.records.remove(pos);
        self.name_index
            .remove_value_by(&removed.index_key(), |r| Arc::ptr_eq(r, &removed));

        if !self.contains(&removed) {
            self.groups.remove(&group_key(&removed));
        }

        debug!(name = removed.name(), "Removed record");
        true
    }

    /// Drops every record, index entry and group
    pub fn clear(&mut self) {
        self.records.clear();
        self.name_index.clear();
        self.groups.clear();
    }

    /// Records whose name equals `name`, ignoring case, in insertion order
    pub fn lookup_by_name(&self, name: &str) -> &[Arc<Record>] {
        self.name_index.get(&name.to_lowercase()).unwrap_or(&[])
    }

    /// Records whose name starts with `prefix`, ignoring case, ordered by name
    pub fn lookup_prefix(&self, prefix: &str) -> Vec<Arc<Record>> {
        let prefix = prefix.to_lowercase();
        self.name_index
            .iter_from(&prefix)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect()
    }

    /// Records of the given kinds whose name contains `fragment`, ignoring
    /// case, in catalog order
    pub fn search(&self, fragment: &str, kinds: &[MediaKind]) -> Vec<Arc<Record>> {
        let fragment = fragment.to_lowercase();
        self.records
            .iter()
            .filter(|r| kinds.contains(&r.kind()) && r.index_key().contains(&fragment))
            .cloned()
            .collect()
    }

    /// Re-orders the records by `key`; later additions are placed by it too
    pub fn sort(&mut self, key: SortKey) {
        self.sort_key = key;
        self.records.sort_by(|a, b| key.compare(a, b));
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Puts `record` in group `name`, replacing any previous group.
    ///
    /// # Errors
    /// `RecordNotFound` if the record is not cataloged.
    pub fn assign_group(
        &mut self,
        record: &Record,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        let key = self
            .get(record)
            .map(group_key)
            .ok_or_else(|| CatalogError::RecordNotFound {
                name: record.name().to_string(),
            })?;
        self.groups.insert(key, name.into());
        Ok(())
    }

    /// Takes `record` out of its group; returns the group it was in
    pub fn remove_from_group(&mut self, record: &Record) -> Option<String> {
        let key = self.get(record).map(group_key)?;
        self.groups.remove(&key)
    }

    pub fn group_of(&self, record: &Record) -> Option<&str> {
        let key = self.get(record).map(group_key)?;
        self.groups.get(&key).map(String::as_str)
    }

    /// Members of group `name`, in catalog order
    pub fn group(&self, name: &str) -> Vec<Arc<Record>> {
        self.records
            .iter()
            .filter(|r| self.groups.get(&group_key(r)).is_some_and(|g| g == name))
            .cloned()
            .collect()
    }

    pub fn is_group(&self, name: &str) -> bool {
        self.groups.values().any(|g| g == name)
    }

    /// Distinct group names, sorted
    pub fn group_names(&self) -> Vec<&str> {
        self.groups
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // =========================================================================
    // Similarity
    // =========================================================================

    /// Up to `k` cataloged records most similar to `record`, best first.
    ///
    /// `record` does not need to be in the catalog. Only records of the same
    /// kind are considered.
    #[instrument(skip(self, record), fields(name = record.name()))]
    pub fn find_similar(&self, record: &Record, k: usize) -> CatalogResult<Vec<Neighbor>> {
        let root = match self.get(record) {
            Some(handle) => Arc::clone(handle),
            None => Arc::new(record.clone()),
        };

        let filter = KindFilter::single(root.kind());
        let neighbors = self
            .index
            .build_and_rank_neighbors(&self.records, &filter, &root, k)?;

        info!(returned = neighbors.len(), "Found similar records");
        Ok(neighbors)
    }
}

fn same_entry(cataloged: &Record, record: &Record) -> bool {
    cataloged.kind() == record.kind() && cataloged == record
}

impl Default for MediaCatalog {
    fn default() -> Self {
        Self::new()
    }
}
