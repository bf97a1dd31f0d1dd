use std::collections::HashMap;

use bomkit_core::ItemCode;

use crate::record::ItemRecord;

/// In-memory inventory table, loaded once and read-only afterwards.
///
/// Records keep their spreadsheet order. Code lookups go through an index
/// built at construction time; when a code appears more than once the first
/// row wins.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    records: Vec<ItemRecord>,
    by_code: HashMap<String, usize>,
    duplicates: Vec<ItemCode>,
}

impl InventoryTable {
    pub fn new(records: Vec<ItemRecord>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();

        for (pos, record) in records.iter().enumerate() {
            let Some(code) = record.code() else {
                continue;
            };
            if by_code.contains_key(code) {
                duplicates.push(ItemCode::from(code));
            } else {
                by_code.insert(code.to_string(), pos);
            }
        }

        Self {
            records,
            by_code,
            duplicates,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    /// Codes that occur on more than one row (one entry per extra occurrence).
    pub fn duplicate_codes(&self) -> &[ItemCode] {
        &self.duplicates
    }

    /// First record (in table order) whose `Item Code` equals `code`.
    pub fn find(&self, code: &str) -> Option<&ItemRecord> {
        self.by_code.get(code).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Case-insensitive substring search over `Item Description`.
    ///
    /// Records without a text description never match. An empty query matches
    /// every record that has one. Results keep table order; no ranking, no limit.
    pub fn search(&self, query: &str) -> Vec<&ItemRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

impl FromIterator<ItemRecord> for InventoryTable {
    fn from_iter<T: IntoIterator<Item = ItemRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    use crate::record::{ITEM_CODE, ITEM_DESCRIPTION};

    fn table() -> InventoryTable {
        InventoryTable::new(vec![
            ItemRecord::with_description("A1", Some("Hex Bolt M8")),
            ItemRecord::with_description("B2", Some("Nut M8")),
            ItemRecord::with_description("C3", None),
            ItemRecord::with_description("D4", Some("BOLT carriage")),
        ])
    }

    fn codes<'a>(records: &[&'a ItemRecord]) -> Vec<&'a str> {
        records.iter().filter_map(|r| r.code()).collect()
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_table_order() {
        let t = table();
        assert_eq!(codes(&t.search("bolt")), vec!["A1", "D4"]);
        assert_eq!(codes(&t.search("m8")), vec!["A1", "B2"]);
        assert!(t.search("washer").is_empty());
    }

    #[test]
    fn empty_query_returns_every_record_with_text_description() {
        let t = table();
        assert_eq!(codes(&t.search("")), vec!["A1", "B2", "D4"]);
    }

    #[test]
    fn non_text_descriptions_are_skipped() {
        let t = InventoryTable::new(vec![
            [
                (ITEM_CODE.to_string(), json!("N1")),
                (ITEM_DESCRIPTION.to_string(), json!(12345)),
            ]
            .into_iter()
            .collect(),
            [(ITEM_CODE.to_string(), json!("N2"))].into_iter().collect(),
        ]);
        assert!(t.search("").is_empty());
        assert!(t.search("123").is_empty());
    }

    #[test]
    fn find_returns_first_match_for_duplicate_codes() {
        let t = InventoryTable::new(vec![
            ItemRecord::with_description("A1", Some("first")),
            ItemRecord::with_description("A1", Some("second")),
        ]);
        assert_eq!(t.find("A1").and_then(|r| r.description()), Some("first"));
        assert_eq!(t.duplicate_codes(), &[ItemCode::from("A1")]);
        assert!(t.find("a1").is_none());
        assert!(!t.contains("Z9"));
    }

    proptest! {
        /// A record is returned iff its description is text and contains the
        /// query case-insensitively.
        #[test]
        fn search_membership_matches_substring_rule(
            descriptions in prop::collection::vec(prop::option::of("[a-zA-Z ]{0,12}"), 0..20),
            query in "[a-zA-Z]{0,3}",
        ) {
            let records: Vec<ItemRecord> = descriptions
                .iter()
                .enumerate()
                .map(|(i, d)| ItemRecord::with_description(&format!("C{i}"), d.as_deref()))
                .collect();
            let t = InventoryTable::new(records);

            let hits: Vec<&str> = codes(&t.search(&query));
            let expected: Vec<String> = descriptions
                .iter()
                .enumerate()
                .filter(|(_, d)| {
                    d.as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&query.to_lowercase()))
                })
                .map(|(i, _)| format!("C{i}"))
                .collect();

            prop_assert_eq!(hits, expected.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
