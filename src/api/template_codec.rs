//! Reads and writes a `TemplateStore` as a `<drinkTemplateManager>` XML file.
//!
//! The boolean `write_templates`/`read_templates` pair reports failure through
//! their return value and a debug log line. The `try_`/`_with_report` variants
//! return the reason instead.

use std::fs;
use std::path::{ Path, PathBuf };
use std::str::FromStr;
use hard_xml::{ XmlError, XmlReader, XmlWrite };
use hard_xml::utils::xml_unescape;
use hard_xml::xmlparser::{ ElementEnd, Token };
use crate::api::errors::CodecError;
use crate::api::models::DrinkTemplate;
use crate::api::models::templates_xml::*;
use crate::api::TemplateStore;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const TEMPLATE_FILE_EXTENSION: &str = "xml";

/// Outcome of a successful read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadReport {
    pub inserted: usize,
    /// Records dropped because a field failed to parse or an unknown tag was present.
    pub discarded: usize,
    /// Well-formed records whose name was already in the store.
    pub skipped_existing: usize
}

#[derive(Debug, Default)]
pub struct ParsedTemplates {
    pub templates: Vec<DrinkTemplate>,
    pub discarded: usize
}

pub fn template_file_path(directory: &Path, base_file_name: &str) -> PathBuf {
    directory.join(format!("{}.{}", base_file_name, TEMPLATE_FILE_EXTENSION))
}

pub fn write_templates(directory: &Path, base_file_name: &str, store: &TemplateStore) -> bool {
    match try_write_templates(directory, base_file_name, store) {
        Ok(_) => true,
        Err(error) => {
            log::debug!("{}", error);
            false
        }
    }
}

/// Writes `<base_file_name>.xml` inside `directory`, truncating any previous file.
pub fn try_write_templates(directory: &Path, base_file_name: &str, store: &TemplateStore) -> Result<PathBuf, CodecError> {
    if !directory.is_dir() {
        return Err(CodecError::DirectoryNotFound(directory.to_path_buf()));
    }
    let document = render_templates(store)?;
    let file_path = template_file_path(directory, base_file_name);
    fs::write(&file_path, document).map_err(|source| CodecError::Io { path: file_path.clone(), source })?;
    Ok(file_path)
}

/// Renders the whole store, ordered by template name.
pub fn render_templates(store: &TemplateStore) -> Result<String, CodecError> {
    let mut templates = store.list();
    templates.sort_by(|a, b| a.name().cmp(b.name()));
    let manager_element = DrinkTemplateManagerElement {
        templates: templates.into_iter().map(DrinkTemplateElement::from).collect()
    };
    let body = XmlWrite::to_string(&manager_element)?;
    Ok(format!("{}{}", XML_DECLARATION, body))
}

pub fn read_templates(directory: &Path, base_file_name: &str, store: &mut TemplateStore, append: bool) -> bool {
    match read_templates_with_report(directory, base_file_name, store, append) {
        Ok(report) => {
            if report.discarded > 0 {
                log::debug!("Discarded {} malformed drink template(s) from {}", report.discarded, base_file_name);
            }
            true
        },
        Err(error) => {
            log::debug!("{}", error);
            false
        }
    }
}

/// Loads `<base_file_name>.xml` into `store`.
///
/// The store is only touched once the whole document has parsed. Without
/// `append` it is cleared first; with `append` existing names are kept and
/// records under those names are skipped.
pub fn read_templates_with_report(
    directory: &Path,
    base_file_name: &str,
    store: &mut TemplateStore,
    append: bool
) -> Result<ReadReport, CodecError> {
    if !directory.is_dir() {
        return Err(CodecError::DirectoryNotFound(directory.to_path_buf()));
    }
    let file_path = template_file_path(directory, base_file_name);
    if !file_path.is_file() {
        return Err(CodecError::FileNotFound(file_path));
    }
    let document = fs::read_to_string(&file_path).map_err(|source| CodecError::Io { path: file_path.clone(), source })?;
    let parsed = parse_templates(&document)?;

    if !append {
        store.clear();
    }
    let mut report = ReadReport { discarded: parsed.discarded, ..ReadReport::default() };
    for template in parsed.templates {
        if store.put(template) {
            report.inserted += 1;
        } else {
            report.skipped_existing += 1;
        }
    }
    Ok(report)
}

/// Parses a document into templates, dropping any record that has a field
/// which fails to parse, an unrecognized child tag, or no name.
pub fn parse_templates(document: &str) -> Result<ParsedTemplates, CodecError> {
    let mut reader = XmlReader::new(document);
    match reader.find_element_start(None)? {
        Some(DRINK_TEMPLATE_MANAGER_TAG) => {},
        Some(tag) => return Err(CodecError::UnexpectedRoot { found: format!("<{}>", tag) }),
        None => return Err(CodecError::UnexpectedRoot { found: String::from("no root element") })
    }
    reader.read_till_element_start(DRINK_TEMPLATE_MANAGER_TAG)?;

    let mut parsed = ParsedTemplates::default();
    if is_empty_element(&mut reader)? {
        return Ok(parsed);
    }
    while let Some(tag) = reader.find_element_start(Some(DRINK_TEMPLATE_MANAGER_TAG))? {
        if tag != DRINK_TEMPLATE_TAG {
            skip_element(&mut reader, tag)?;
            continue;
        }
        match read_template(&mut reader)? {
            Some(template) => parsed.templates.push(template),
            None => parsed.discarded += 1
        }
    }
    Ok(parsed)
}

fn read_template(reader: &mut XmlReader) -> Result<Option<DrinkTemplate>, CodecError> {
    reader.read_till_element_start(DRINK_TEMPLATE_TAG)?;
    if is_empty_element(reader)? {
        return Ok(None);
    }
    let mut template = DrinkTemplate::default();
    let mut is_valid = true;
    while let Some(tag) = reader.find_element_start(Some(DRINK_TEMPLATE_TAG))? {
        if !is_valid || !is_template_field(tag) {
            skip_element(reader, tag)?;
            is_valid = false;
            continue;
        }
        reader.read_till_element_start(tag)?;
        is_valid = match read_field_text(reader, tag)? {
            Some(text) => apply_field(&mut template, tag, &text),
            None => false
        };
    }
    if is_valid && !template.name().is_empty() {
        Ok(Some(template))
    } else {
        Ok(None)
    }
}

/// Skips the attributes of the element just opened and reports whether it was self-closing.
fn is_empty_element(reader: &mut XmlReader) -> Result<bool, CodecError> {
    while reader.find_attribute()?.is_some() {}
    match reader.next() {
        Some(token) => Ok(matches!(token.map_err(XmlError::from)?, Token::ElementEnd { end: ElementEnd::Empty, .. })),
        None => Err(XmlError::UnexpectedEof.into())
    }
}

fn skip_element(reader: &mut XmlReader, tag: &str) -> Result<(), CodecError> {
    reader.read_till_element_start(tag)?;
    reader.read_to_end(tag)?;
    Ok(())
}

/// Collects the text of the field element just opened, up to its end tag.
/// Returns `None` when the field holds child elements, which are skipped.
fn read_field_text(reader: &mut XmlReader, tag: &str) -> Result<Option<String>, CodecError> {
    if is_empty_element(reader)? {
        return Ok(Some(String::new()));
    }
    let mut text = String::new();
    let mut has_children = false;
    while let Some(token) = reader.next() {
        match token.map_err(XmlError::from)? {
            Token::Text { text: content } => text.push_str(&xml_unescape(content.as_str())?),
            Token::Cdata { text: content, .. } => text.push_str(content.as_str()),
            Token::ElementStart { span, .. } => {
                reader.read_to_end(&span.as_str()[1..])?;
                has_children = true;
            },
            Token::ElementEnd { end: ElementEnd::Close(_, _), span } => {
                let span = span.as_str();
                let found = &span[2..span.len() - 1];
                if found != tag {
                    return Err(XmlError::TagMismatch { expected: tag.to_string(), found: found.to_string() }.into());
                }
                return Ok(if has_children { None } else { Some(text) });
            },
            Token::Comment { .. } | Token::ProcessingInstruction { .. } => {},
            token => return Err(XmlError::UnexpectedToken { token: format!("{:?}", token) }.into())
        }
    }
    Err(XmlError::UnexpectedEof.into())
}

fn is_template_field(tag: &str) -> bool {
    matches!(tag, NAME_TAG | SERVINGS_TAG | TYPE_TAG | APV_TAG | CALORIES_TAG | PRICE_TAG | IMAGE_FILE_PATH_TAG)
}

fn apply_field(template: &mut DrinkTemplate, tag: &str, text: &str) -> bool {
    match tag {
        NAME_TAG => template.set_name(text),
        IMAGE_FILE_PATH_TAG => template.set_image_file_path(text),
        SERVINGS_TAG => match parse_number::<i16>(text) {
            Some(servings) => template.set_servings(servings),
            None => return false
        },
        TYPE_TAG => match parse_number::<i16>(text) {
            Some(ordinal) => template.set_type_ordinal(ordinal),
            None => return false
        },
        APV_TAG => match parse_number(text) {
            Some(alcohol_per_volume) => template.set_alcohol_per_volume(alcohol_per_volume),
            None => return false
        },
        CALORIES_TAG => match parse_number(text) {
            Some(calories) => template.set_calories(calories),
            None => return false
        },
        PRICE_TAG => match parse_number(text) {
            Some(price) => template.set_price(price),
            None => return false
        },
        _ => return false
    }
    true
}

fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse::<T>().ok()
}
