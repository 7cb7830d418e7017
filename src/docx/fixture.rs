// src/docx/fixture.rs
// Builders for small .docx packages, shared by unit and CLI tests.
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const W_NS_DECL: &str =
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Renders `word/document.xml` with one body table per entry; each table is
/// a list of rows of cell texts. Every row must have the same length.
pub fn document_xml(tables: &[Vec<Vec<&str>>]) -> String {
    let mut xml = format!("<w:document {}><w:body>", W_NS_DECL);
    for table in tables {
        let width = table.first().map(|r| r.len()).unwrap_or(0);
        xml.push_str("<w:tbl><w:tblGrid>");
        for _ in 0..width {
            xml.push_str("<w:gridCol/>");
        }
        xml.push_str("</w:tblGrid>");
        for row in table {
            xml.push_str("<w:tr>");
            for cell in row {
                if cell.is_empty() {
                    xml.push_str("<w:tc><w:p/></w:tc>");
                } else {
                    xml.push_str(&format!(
                        r#"<w:tc><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
                        escape(cell)
                    ));
                }
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl><w:p/>");
    }
    xml.push_str("</w:body></w:document>");
    xml
}

/// Packs a document XML into a minimal .docx container.
pub fn docx_bytes(document_xml: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buf));
        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/document.xml", document_xml),
        ] {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buf
}

pub const REASON: &str = "SVT has passed Sunset and has no active users ";

/// Field values of a change-request form; defaults describe a valid
/// deletion request.
#[derive(Debug, Clone)]
pub struct FormValues {
    pub software_version: String,
    pub load_before: String,
    pub request_by: String,
    pub project_id: String,
    pub reason: String,
    pub confirm: String,
    pub status: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            software_version: "S92031MODPMK2102".to_string(),
            load_before: "31-12-2099".to_string(),
            request_by: "J. Smith".to_string(),
            project_id: "PRJ-0042".to_string(),
            reason: REASON.to_string(),
            confirm: "Yes".to_string(),
            status: "00".to_string(),
        }
    }
}

fn text_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// The six tables of the change-request template filled with `values`.
pub fn change_request_tables(values: &FormValues) -> Vec<Vec<Vec<String>>> {
    let request = vec![
        text_row(&[
            "Request By",
            values.request_by.as_str(),
            "Load Before",
            values.load_before.as_str(),
            "Project ID",
            values.project_id.as_str(),
        ]),
        text_row(&["", "", "", "", "", ""]),
    ];
    let signatures = vec![text_row(&["Snr Sig", "A", "Co-ord Sig", "B", "ADD", "UPDATE", "DELETE"])];

    // Software table: two label cells, one cell per version character across
    // columns 2..18, a character count, a label, and one cell per status digit.
    let mut software = text_row(&["Software", "Version"]);
    let chars: Vec<char> = values.software_version.chars().collect();
    for i in 0..16 {
        software.push(chars.get(i).map(|c| c.to_string()).unwrap_or_default());
    }
    software.push(chars.len().to_string());
    software.push("Chars".to_string());
    software.push("Status".to_string());
    let status: Vec<char> = values.status.chars().collect();
    for i in 0..2 {
        software.push(status.get(i).map(|c| c.to_string()).unwrap_or_default());
    }

    let certification = vec![
        text_row(&["Certification Use", "No", "", ""]),
        text_row(&["Reason", values.reason.as_str(), "", ""]),
        text_row(&["No Term Active", "", values.confirm.as_str(), ""]),
    ];

    vec![
        request,
        signatures,
        vec![software],
        vec![text_row(&["DB Notes", "None"])],
        certification,
        vec![text_row(&["OPs Use", "No"])],
    ]
}

/// Borrowed view of owned fixture tables, for `document_xml`.
pub fn borrow_tables(tables: &[Vec<Vec<String>>]) -> Vec<Vec<Vec<&str>>> {
    tables
        .iter()
        .map(|t| t.iter().map(|r| r.iter().map(String::as_str).collect()).collect())
        .collect()
}

/// A complete form package holding the first `table_count` template tables.
pub fn form_docx(values: &FormValues, table_count: usize) -> Vec<u8> {
    let mut tables = change_request_tables(values);
    tables.truncate(table_count);
    docx_bytes(&document_xml(&borrow_tables(&tables)))
}

/// Writes a full form named `DELETE - <software version>.docx` into `dir`.
pub fn write_form(dir: &Path, values: &FormValues) -> PathBuf {
    let path = dir.join(format!("DELETE - {}.docx", values.software_version));
    std::fs::write(&path, form_docx(values, 6)).unwrap();
    path
}
