/// Column layout for grouped CSV files.
///
/// Each distinct combination of `group_by` values becomes one transaction
/// holding the values of `item_column`.
#[derive(Debug, Clone)]
pub struct CsvLayout {
    pub group_by: Vec<String>,
    pub item_column: String,
    pub delimiter: u8,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            group_by: vec!["Member_number".to_string(), "Date".to_string()],
            item_column: "itemDescription".to_string(),
            delimiter: b',',
        }
    }
}
