use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use genbasis_core::{Item, Itemset, TransactionDataset};
use tracing::warn;

use crate::errors::LoadError;
use crate::options::CsvLayout;
use crate::source::TransactionSource;

/// Row-per-item CSV (e.g. grocery receipts) grouped into transactions.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    layout: CsvLayout,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>, layout: CsvLayout) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout,
        }
    }
}

impl TransactionSource for CsvSource {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn load(&self) -> Result<TransactionDataset, LoadError> {
        let file = File::open(&self.path)?;
        read_grouped_csv(file, &self.layout)
    }
}

/// Group CSV rows by the layout key columns.
///
/// Transactions come out ordered by group key; rows with an empty item are
/// skipped.
pub fn read_grouped_csv<R: Read>(
    reader: R,
    layout: &CsvLayout,
) -> Result<TransactionDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(layout.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };

    let key_positions = layout
        .group_by
        .iter()
        .map(|column| position(column))
        .collect::<Result<Vec<_>, _>>()?;
    let item_position = position(&layout.item_column)?;

    let mut groups: BTreeMap<Vec<String>, Vec<Item>> = BTreeMap::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let item = record.get(item_position).unwrap_or_default();
        if item.is_empty() {
            warn!(row = row_idx + 1, "skipping row without item");
            continue;
        }

        let key = key_positions
            .iter()
            .map(|&pos| record.get(pos).unwrap_or_default().to_string())
            .collect::<Vec<_>>();
        groups.entry(key).or_default().push(item.to_string());
    }

    Ok(groups.into_values().map(Itemset::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_rows_by_member_and_date() {
        let input = "\
Member_number,Date,itemDescription
1808,21-07-2015,tropical fruit
2552,05-01-2015,whole milk
1808,21-07-2015,whole milk
1808,21-07-2015,tropical fruit
2552,19-09-2015,pastry
";
        let dataset = read_grouped_csv(input.as_bytes(), &CsvLayout::default()).expect("parse csv");

        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.transactions()[0],
            Itemset::new(["tropical fruit", "whole milk"])
        );
        assert_eq!(dataset.transactions()[1], Itemset::new(["whole milk"]));
        assert_eq!(dataset.transactions()[2], Itemset::new(["pastry"]));
    }

    #[test]
    fn reports_missing_columns() {
        let input = "member,date,item\n1,2,bread\n";
        let err = read_grouped_csv(input.as_bytes(), &CsvLayout::default())
            .expect_err("missing columns must fail");
        assert!(matches!(err, LoadError::MissingColumn(column) if column == "Member_number"));
    }

    #[test]
    fn custom_layout() {
        let layout = CsvLayout {
            group_by: vec!["basket".to_string()],
            item_column: "product".to_string(),
            delimiter: b';',
        };
        let input = "basket;product\nb1;a\nb2;c\nb1;b\n";
        let dataset = read_grouped_csv(input.as_bytes(), &layout).expect("parse csv");
        assert_eq!(dataset.transactions()[0], Itemset::new(["a", "b"]));
        assert_eq!(dataset.transactions()[1], Itemset::new(["c"]));
    }
}
