mod helpers;

use csv2tsv::{writer::RecordWriter, ConvertStats, Delimiter, Error, ErrorKind};
use helpers::FailingWriter;

fn write(delimiter: Delimiter, records: &[&[&str]]) -> (String, ConvertStats) {
    let mut writer = RecordWriter::new(Vec::new(), delimiter);
    for record in records {
        writer.write_record(record.iter()).unwrap();
    }
    let stats = writer.stats();
    (String::from_utf8(writer.into_inner()).unwrap(), stats)
}

#[test]
fn joins_with_tab() {
    let (out, _) = write(Delimiter::Tab, &[&["a", "b", "c"]]);
    assert_eq!(out, "a\tb\tc\n");
}

#[test]
fn joins_with_comma() {
    let (out, _) = write(Delimiter::Comma, &[&["a", "b", "c"]]);
    assert_eq!(out, "a,b,c\n");
}

#[test]
fn single_field_has_no_delimiter() {
    let (out, _) = write(Delimiter::Tab, &[&["only"]]);
    assert_eq!(out, "only\n");
}

#[test]
fn empty_fields_are_kept() {
    let (out, stats) = write(Delimiter::Comma, &[&["", "", ""]]);
    assert_eq!(out, ",,\n");
    assert_eq!(stats.fields, 3);
}

#[test]
fn record_without_fields_is_an_empty_line() {
    let (out, stats) = write(Delimiter::Tab, &[&[]]);
    assert_eq!(out, "\n");
    assert_eq!(stats.records, 1);
}

#[test]
fn fields_are_not_requoted() {
    let (out, stats) = write(Delimiter::Comma, &[&["a,b", "c"], &["say \"hi\"", "x"]]);
    assert_eq!(out, "a,b,c\nsay \"hi\",x\n");
    assert_eq!(stats.ambiguous_fields, 2);
}

#[test]
fn input_delimiter_in_field_is_not_ambiguous() {
    let (out, stats) = write(Delimiter::Tab, &[&["a,b", "c"]]);
    assert_eq!(out, "a,b\tc\n");
    assert_eq!(stats.ambiguous_fields, 0);
}

#[test]
fn counts_records_and_fields() {
    let (_, stats) = write(Delimiter::Tab, &[&["a", "b"], &["c", "d"], &["e", "f"]]);
    assert_eq!(
        stats,
        ConvertStats {
            records: 3,
            fields: 6,
            ambiguous_fields: 0,
        }
    );
}

#[test]
fn write_failure_is_an_output_error() {
    let mut writer = RecordWriter::new(FailingWriter, Delimiter::Tab);
    let err = writer.write_record(["a", "b"]).unwrap_err();
    assert!(matches!(err, Error::Output(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Output);
    assert_eq!(writer.stats().records, 0);
}
