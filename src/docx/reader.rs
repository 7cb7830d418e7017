// src/docx/reader.rs

// --- Imports ---
use crate::docx::model::{Document, RawCell, RawRow, RawTable, VMerge};
use crate::utils::error::DocxError;
use roxmltree::Node;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

// --- Constants ---
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const PACKAGE_RELS_PART: &str = "_rels/.rels";
const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
// Where Word puts the main part; used when the package relationships do not say.
const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";

/// Opens a `.docx` file and reads its body tables.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document, DocxError> {
    let path = path.as_ref();
    tracing::info!("Loading document: {}", path.display());

    let file = File::open(path)?;
    let document = from_reader(BufReader::new(file))?;

    tracing::info!("Loaded {} tables from {}", document.tables().len(), path.display());
    Ok(document)
}

/// Reads a document package from any seekable source.
pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Document, DocxError> {
    let mut archive = ZipArchive::new(reader)?;

    let part_name = match read_part(&mut archive, PACKAGE_RELS_PART)? {
        Some(rels) => main_part_name(&rels)?.unwrap_or_else(|| DEFAULT_DOCUMENT_PART.to_string()),
        None => DEFAULT_DOCUMENT_PART.to_string(),
    };
    tracing::debug!("Main document part: {}", part_name);

    let xml = read_part(&mut archive, &part_name)?
        .ok_or_else(|| DocxError::MissingPart(part_name.clone()))?;

    parse_document_xml(&xml)
}

/// Reads one part of the package as text; `None` if the package lacks it.
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocxError> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    part.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// Finds the target of the officeDocument relationship in `_rels/.rels`.
fn main_part_name(rels_xml: &str) -> Result<Option<String>, DocxError> {
    let rels = roxmltree::Document::parse(rels_xml)?;

    let target = rels
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
        .find(|n| n.attribute("Type") == Some(OFFICE_DOCUMENT_REL))
        .and_then(|n| n.attribute("Target"))
        .map(|t| t.trim_start_matches('/').to_string());

    Ok(target)
}

/// Parses the main document XML into the table model.
/// Only tables that are direct children of `w:body` are collected.
pub fn parse_document_xml(xml: &str) -> Result<Document, DocxError> {
    let xml_doc = roxmltree::Document::parse(xml)?;
    let root = xml_doc.root_element();

    if !is_w(root, "document") {
        return Err(DocxError::NotADocument(format!(
            "unexpected root element <{}>",
            root.tag_name().name()
        )));
    }

    let body = child_w(root, "body")
        .ok_or_else(|| DocxError::NotADocument("missing <w:body>".to_string()))?;

    let tables: Vec<RawTable> = body
        .children()
        .filter(|n| is_w(*n, "tbl"))
        .map(parse_table)
        .collect();

    for (i, table) in tables.iter().enumerate() {
        tracing::debug!("Table {}: {} rows, {} grid columns", i, table.rows.len(), table.grid_cols);
    }

    Ok(Document::new(tables))
}

fn parse_table(tbl: Node) -> RawTable {
    let grid_cols = child_w(tbl, "tblGrid")
        .map(|grid| grid.children().filter(|n| is_w(*n, "gridCol")).count())
        .unwrap_or(0);

    let rows = tbl
        .children()
        .filter(|n| is_w(*n, "tr"))
        .map(parse_row)
        .collect();

    RawTable { grid_cols, rows }
}

fn parse_row(tr: Node) -> RawRow {
    let grid_before = child_w(tr, "trPr")
        .and_then(|pr| child_w(pr, "gridBefore"))
        .and_then(|n| w_val(n))
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    let cells = tr
        .children()
        .filter(|n| is_w(*n, "tc"))
        .map(parse_cell)
        .collect();

    RawRow { grid_before, cells }
}

fn parse_cell(tc: Node) -> RawCell {
    let props = child_w(tc, "tcPr");

    let grid_span = props
        .and_then(|pr| child_w(pr, "gridSpan"))
        .and_then(|n| w_val(n))
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    // A bare <w:vMerge/> means "continue".
    let v_merge = match props.and_then(|pr| child_w(pr, "vMerge")) {
        None => VMerge::None,
        Some(n) => match w_val(n) {
            Some("restart") => VMerge::Restart,
            _ => VMerge::Continue,
        },
    };

    let text = tc
        .children()
        .filter(|n| is_w(*n, "p"))
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n");

    tracing::trace!("Cell text {:?} (span {}, vmerge {:?})", text, grid_span, v_merge);
    RawCell { text, grid_span, v_merge }
}

fn paragraph_text(p: Node) -> String {
    let mut text = String::new();
    for child in p.children() {
        if is_w(child, "r") {
            push_run_text(child, &mut text);
        } else if is_w(child, "hyperlink") {
            for run in child.children().filter(|n| is_w(*n, "r")) {
                push_run_text(run, &mut text);
            }
        }
    }
    text
}

fn push_run_text(run: Node, out: &mut String) {
    for child in run.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match child.tag_name().name() {
            "t" => out.push_str(child.text().unwrap_or("")),
            "tab" | "ptab" => out.push('\t'),
            "cr" => out.push('\n'),
            // Page and column breaks carry no text
            "br" => match w_type(child) {
                None | Some("textWrapping") => out.push('\n'),
                Some(_) => {}
            },
            "noBreakHyphen" => out.push('-'),
            _ => {}
        }
    }
}

// --- XML helpers ---

fn is_w(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(W_NS)
}

fn child_w<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_w(*n, name))
}

fn w_val<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((W_NS, "val"))
}

fn w_type<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((W_NS, "type"))
}
