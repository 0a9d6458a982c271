use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

const BODY_PART: &str = "word/document.xml";

static HEADER_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^word/header[0-9]*\.xml$").expect("header part pattern is valid"));
static FOOTER_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^word/footer[0-9]*\.xml$").expect("footer part pattern is valid"));

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#x([0-9a-fA-F]+)|#([0-9]+)|(lt|gt|quot|apos|amp));").expect("entity pattern is valid")
});

// Text runs, tabs, line breaks and paragraph ends of the WordprocessingML body.
static BODY_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab/>|<w:(?:br|cr)(?:\s[^>]*)?/>|</w:p>")
        .expect("body token pattern is valid")
});

/// Pulls the plain text out of a `.docx` package: page headers first, then
/// the body, then page footers. Images and other embedded parts are never
/// opened.
pub fn extract_docx_text(name: &str, bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::unreadable(name, e))?;

    // Archive order is not stable, so parts of one kind are read sorted by name.
    let mut part_names: Vec<String> = archive.file_names().map(str::to_string).collect();
    part_names.sort();
    let headers = part_names.iter().filter(|p| HEADER_PART.is_match(p));
    let footers = part_names.iter().filter(|p| FOOTER_PART.is_match(p));

    let mut sections = Vec::new();
    for part in headers {
        sections.push(read_part(&mut archive, name, part)?);
    }
    sections.push(read_part(&mut archive, name, BODY_PART)?);
    for part in footers {
        sections.push(read_part(&mut archive, name, part)?);
    }

    tracing::debug!("Read {} text parts from {}", sections.len(), name);

    let text: Vec<String> = sections
        .iter()
        .map(|xml| body_text(xml))
        .filter(|t| !t.is_empty())
        .collect();

    Ok(text.join("\n\n"))
}

fn read_part<R: Read + std::io::Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
    part: &str,
) -> Result<String> {
    let mut xml = String::new();
    archive
        .by_name(part)
        .map_err(|e| Error::unreadable(name, format!("{}: {}", part, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::unreadable(name, e))?;
    Ok(xml)
}

fn body_text(xml: &str) -> String {
    let mut text = String::new();

    for caps in BODY_TOKEN.captures_iter(xml) {
        if let Some(run) = caps.get(1) {
            text.push_str(&unescape_xml(run.as_str()));
            continue;
        }

        match &caps[0] {
            "<w:tab/>" => text.push('\t'),
            "</w:p>" => text.push_str("\n\n"),
            _ => text.push('\n'),
        }
    }

    text.trim().to_string()
}

fn unescape_xml(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    ENTITY
        .replace_all(raw, |caps: &regex::Captures| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, Some(dec)) => dec.as_str().parse().ok(),
                (None, None) => {
                    return match &caps[3] {
                        "lt" => "<",
                        "gt" => ">",
                        "quot" => "\"",
                        "apos" => "'",
                        _ => "&",
                    }
                    .to_string();
                }
            };

            // Invalid code points are left as written.
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
