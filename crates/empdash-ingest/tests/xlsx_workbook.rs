//! Loading real `.xlsx` workbooks written to disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use polars::prelude::DataType;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use empdash_common::{cell_at, column_names};
use empdash_ingest::load_table;
use empdash_model::{CellValue, ProcessingError, Role};
use empdash_transform::detect_roles_in_frame;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Employees" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Worksheet XML with numbers as plain values and everything else as
/// inline strings. Empty strings leave the cell out.
fn sheet_xml(rows: &[&[&str]]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (row_idx, row) in rows.iter().enumerate() {
        let row_number = row_idx + 1;
        xml.push_str(&format!(r#"<row r="{row_number}">"#));
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let reference = format!("{}{row_number}", char::from(b'A' + col_idx as u8));
            if value.parse::<f64>().is_ok() {
                xml.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#));
            } else {
                xml.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t>{value}</t></is></c>"#
                ));
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn write_xlsx(dir: &TempDir, name: &str, rows: &[&[&str]]) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).expect("create xlsx");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let sheet = sheet_xml(rows);
    let entries = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
    ];
    for (entry, contents) in entries {
        zip.start_file(entry, options).expect("start entry");
        zip.write_all(contents.as_bytes()).expect("write entry");
    }
    zip.finish().expect("finish xlsx");
    path
}

const EMPLOYEES: &[&[&str]] = &[
    &["", "Name", "Salary", "Salary", "Department", "Age"],
    &["0", "Ana", "100", "110", "IT", "30"],
    &["1", "Bo", "200", "", "NA", "41"],
    &["2", "Cy", "300", "330", "HR", "52"],
];

const EMPLOYEES_CSV: &str = "\
,Name,Salary,Salary,Department,Age
0,Ana,100,110,IT,30
1,Bo,200,,NA,41
2,Cy,300,330,HR,52
";

#[test]
fn workbook_columns_are_typed() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_xlsx(&dir, "employees.xlsx", EMPLOYEES);

    let df = load_table(&path).expect("load xlsx");

    assert_eq!(
        column_names(&df),
        vec!["Unnamed: 0", "Name", "Salary", "Salary.1", "Department", "Age"]
    );
    assert_eq!(df.height(), 3);
    assert_eq!(df.column("Salary").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Name").unwrap().dtype(), &DataType::String);
    assert_eq!(cell_at(&df, "Name", 0), CellValue::Text("Ana".to_string()));
    assert_eq!(cell_at(&df, "Age", 2), CellValue::Number(52.0));
    assert_eq!(cell_at(&df, "Salary.1", 1), CellValue::Missing);
    assert_eq!(cell_at(&df, "Department", 1), CellValue::Missing);
}

#[test]
fn workbook_roles_are_detected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_xlsx(&dir, "employees.xlsx", EMPLOYEES);

    let df = load_table(&path).expect("load xlsx");
    let roles = detect_roles_in_frame(&df);

    assert_eq!(roles.get(Role::Salary), Some("Salary.1"));
    assert_eq!(roles.get(Role::Department), Some("Department"));
    assert_eq!(roles.get(Role::Age), Some("Age"));
    assert_eq!(roles.get(Role::Experience), None);
}

#[test]
fn workbook_and_csv_load_the_same_table() {
    let dir = TempDir::new().expect("temp dir");
    let xlsx_path = write_xlsx(&dir, "employees.xlsx", EMPLOYEES);
    let csv_path = dir.path().join("employees.csv");
    fs::write(&csv_path, EMPLOYEES_CSV).expect("write csv");

    let from_xlsx = load_table(&xlsx_path).expect("load xlsx");
    let from_csv = load_table(&csv_path).expect("load csv");

    let names = column_names(&from_xlsx);
    assert_eq!(names, column_names(&from_csv));
    for name in &names {
        for row in 0..from_xlsx.height() {
            assert_eq!(
                cell_at(&from_xlsx, name, row),
                cell_at(&from_csv, name, row),
                "{name} row {row}"
            );
        }
    }
}

#[test]
fn header_only_workbook_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_xlsx(&dir, "employees.xlsx", &[&["Name", "Salary"]]);

    assert!(matches!(
        load_table(&path),
        Err(ProcessingError::EmptyTable { .. })
    ));
}
