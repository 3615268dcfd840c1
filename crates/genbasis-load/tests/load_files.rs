use std::fs;
use std::path::PathBuf;

use genbasis_core::Itemset;
use genbasis_load::{LoadError, TransactionSource, load_transactions, source_for_path};

#[test]
fn loads_txt_file_by_extension() {
    let dir = temp_dir("txt");
    let path = dir.join("baskets.txt");
    fs::write(&path, "bread,milk\nmilk,butter\nbread,butter\nbread,milk,butter\n")
        .expect("write txt");

    let dataset = load_transactions(&path).expect("load txt");
    assert_eq!(dataset.len(), 4);
    assert_eq!(
        dataset.transactions()[3],
        Itemset::new(["bread", "butter", "milk"])
    );
}

#[test]
fn loads_grouped_csv_file_by_extension() {
    let dir = temp_dir("csv");
    let path = dir.join("Groceries.CSV");
    fs::write(
        &path,
        "Member_number,Date,itemDescription\n1,01-01-2015,a\n1,01-01-2015,b\n2,01-01-2015,c\n",
    )
    .expect("write csv");

    let source = source_for_path(&path).expect("csv source");
    assert_eq!(source.format(), "csv");

    let dataset = source.load().expect("load csv");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.transactions()[0], Itemset::new(["a", "b"]));
}

#[test]
fn rejects_unknown_extension() {
    let path = PathBuf::from("baskets.parquet");
    let err = load_transactions(&path).expect_err("unsupported extension");
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_dir("missing").join("absent.txt");
    let err = load_transactions(&path).expect_err("missing file");
    assert!(matches!(err, LoadError::Io(_)));
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("genbasis_load_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
