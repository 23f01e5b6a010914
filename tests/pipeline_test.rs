//! End-to-end label generation tests
//!
//! Builds spreadsheet fixtures with rust_xlsxwriter and runs the full pipeline.

use arherb::common::{Column, FieldMapping, HerbariumConfig, LogicalField, SpecimenType};
use arherb::pipeline::{build_table, generate_document, GenerateOptions};
use arherb::reader::read_dataset;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const HEADERS: &[&str] = &[
    "family", "familyrus", "species", "speciesrus", "region", "point", "habitats",
    "date", "leg.", "det.", "num", "N", "E",
];

/// 4 specimens, distinct num, all with coordinates
fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }

    let species = [
        ("Rosaceae", "Розовые", "Rosa majalis", "Шиповник майский"),
        ("Poaceae", "Злаки", "Poa annua", "Мятлик однолетний"),
        ("Apiaceae", "Зонтичные", "Aegopodium podagraria", "Сныть обыкновенная"),
        ("Fabaceae", "Бобовые", "Trifolium pratense", "Клевер луговой"),
    ];

    for (i, (family, familyrus, name, namerus)) in species.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, *family).unwrap();
        worksheet.write_string(row, 1, *familyrus).unwrap();
        worksheet.write_string(row, 2, *name).unwrap();
        worksheet.write_string(row, 3, *namerus).unwrap();
        worksheet.write_string(row, 4, "Moscow oblast").unwrap();
        worksheet.write_string(row, 5, "Zvenigorod").unwrap();
        worksheet.write_string(row, 6, "meadow").unwrap();
        let date = ExcelDateTime::parse_from_str("2024-03-05 10:00:00").unwrap();
        worksheet.write_datetime_with_format(row, 7, &date, &date_format).unwrap();
        worksheet.write_string(row, 8, "Ivanova").unwrap();
        worksheet.write_string(row, 9, "Petrov").unwrap();
        worksheet.write_number(row, 10, (i + 1) as f64).unwrap();
        worksheet.write_number(row, 11, 55.7 + i as f64 / 100.0).unwrap();
        worksheet.write_number(row, 12, 36.85).unwrap();
    }

    workbook.save(path).unwrap();
}

fn config(include_qr: bool) -> HerbariumConfig {
    HerbariumConfig::new("MW", SpecimenType::VascularPlant, include_qr, FieldMapping::new()).unwrap()
}

/// 4 rows + QR: 2×2 table, all cells filled, 4 PNG files
#[test]
fn test_four_rows_with_qr() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("specimens.xlsx");
    write_fixture(&input);
    let qr_dir = dir.path().join("qr_codes");

    let options = GenerateOptions { input: input.clone(), output: None, qr_dir: qr_dir.clone() };
    let summary = generate_document(&config(true), &options).expect("pipeline failed");

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.labels, 4);
    assert_eq!(summary.qr_codes, 4);
    assert_eq!(summary.output_path, dir.path().join("specimens_output.docx"));
    assert!(summary.output_path.exists());
    assert!(std::fs::metadata(&summary.output_path).unwrap().len() > 0);

    for num in 1..=4 {
        assert!(qr_dir.join(format!("qr_{}.png", num)).exists(), "qr_{}.png missing", num);
    }
}

/// Dates, bilingual names and pairing survive the spreadsheet round trip
#[test]
fn test_label_contents_from_spreadsheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("specimens.xlsx");
    write_fixture(&input);

    let dataset = read_dataset(&input).unwrap();
    assert_eq!(dataset.len(), 4);

    let (table, _) = build_table(&dataset, &config(false), &dir.path().join("qr")).unwrap();
    assert_eq!(table.row_count(), 2);

    let left = table.get(0, Column::Left).unwrap().plain_text();
    assert!(left.starts_with("MW\n"));
    assert!(left.contains("Rosaceae\nРозовые\nRosa majalis\nШиповник майский\n"));
    assert!(left.contains("Moscow oblast, Zvenigorod, meadow"));
    assert!(left.contains("2024-03-05"));
    assert!(!left.contains("10:00:00"));
    assert!(left.contains("leg.: Ivanova"));
    assert!(left.contains("№ 1 "));
    assert!(left.contains("det.: Petrov"));

    // record 0 beside record 2
    let right = table.get(0, Column::Right).unwrap().plain_text();
    assert!(right.contains("Apiaceae"));
}

/// Same input and config without QR → identical tables
#[test]
fn test_pipeline_is_idempotent_without_qr() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("specimens.xlsx");
    write_fixture(&input);
    let qr_dir = dir.path().join("qr");

    let first = build_table(&read_dataset(&input).unwrap(), &config(false), &qr_dir).unwrap();
    let second = build_table(&read_dataset(&input).unwrap(), &config(false), &qr_dir).unwrap();

    assert_eq!(first, second);
    assert!(!qr_dir.exists());
}

/// Renamed columns are picked up through the mapping
#[test]
fn test_csv_with_column_mapping() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("fungi.csv");
    std::fs::write(
        &input,
        "Семейство,Вид,Номер,Дата\nBoletaceae,Boletus edulis,17,2023-08-17 14:30:05\nRussulaceae,Lactarius deliciosus,18,\n",
    )
    .unwrap();

    let mut mapping = FieldMapping::new();
    mapping.set(LogicalField::Family, "Семейство");
    mapping.set(LogicalField::Species, "Вид");
    mapping.set(LogicalField::Num, "Номер");
    mapping.set(LogicalField::Date, "Дата");
    let config = HerbariumConfig::new("LE", SpecimenType::Fungi, false, mapping).unwrap();

    let out_dir = dir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();
    let options = GenerateOptions {
        input,
        output: Some(out_dir.clone()),
        qr_dir: PathBuf::from("unused"),
    };
    let summary = generate_document(&config, &options).unwrap();

    assert_eq!(summary.output_path, out_dir.join("fungi_output.docx"));
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.labels, 2);

    let (table, _) = build_table(&read_dataset(&options.input).unwrap(), &config, Path::new("unused")).unwrap();
    let left = table.get(0, Column::Left).unwrap().plain_text();
    assert!(left.contains("Boletaceae\nBoletus edulis\n"));
    assert!(left.contains("2023-08-17"));
    assert!(left.contains("№ 17"));
}

/// The written document parses back with one two-column table
#[test]
fn test_written_docx_parses() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("specimens.xlsx");
    write_fixture(&input);

    let options = GenerateOptions { input, output: None, qr_dir: dir.path().join("qr") };
    let summary = generate_document(&config(false), &options).unwrap();

    let bytes = std::fs::read(&summary.output_path).unwrap();
    let docx = docx_rs::read_docx(&bytes).expect("docx should parse");

    let tables: Vec<&docx_rs::Table> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Table(table) => {
                let table: &docx_rs::Table = table;
                Some(table)
            }
            _ => None,
        })
        .collect();

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows.len(), 2);
    for row in &tables[0].rows {
        let docx_rs::TableChild::TableRow(row) = row;
        assert_eq!(row.cells.len(), 2);
    }
}
