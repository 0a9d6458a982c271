use std::fs;
use std::io::{Cursor, Write};

use anyhow::Result;
use tempfile::tempdir;

use resuscan::analysis::ScanPipeline;
use resuscan::config::PipelineConfig;
use resuscan::models::{Document, DocumentFormat};
use resuscan::{run_pipeline, Error};

const JOB: &str = "Looking for a Python developer with SQL and AWS skills";

fn word_part(root: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", p))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:{root} xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         {body}</w:{root}>",
        root = root,
        body = body
    )
}

fn build_docx_parts(parts: &[(&str, String)]) -> Result<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("[Content_Types].xml", zip::write::FileOptions::default())?;
    zip.write_all(b"<?xml version=\"1.0\"?><Types/>")?;
    for (name, xml) in parts {
        zip.start_file(*name, zip::write::FileOptions::default())?;
        zip.write_all(xml.as_bytes())?;
    }
    zip.start_file("word/media/image1.png", zip::write::FileOptions::default())?;
    zip.write_all(&[0x89, b'P', b'N', b'G', 0, 1, 2, 3])?;

    Ok(zip.finish()?.into_inner())
}

fn document_part(paragraphs: &[&str]) -> String {
    word_part("document", paragraphs)
        .replace("main\">", "main\"><w:body>")
        .replace("</w:document>", "</w:body></w:document>")
}

fn build_docx(paragraphs: &[&str]) -> Result<Vec<u8>> {
    build_docx_parts(&[("word/document.xml", document_part(paragraphs))])
}

/// Minimal PDF with one Helvetica text line per page; an empty string gives
/// a page with an empty content stream.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            (0..pages.len())
                .map(|i| format!("{} 0 R", 4 + 2 * i))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
    ];

    for (i, text) in pages.iter().enumerate() {
        let content = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text)
        };
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
    }

    let xref = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref
        )
        .as_bytes(),
    );

    pdf
}

#[test]
fn test_plain_text_file_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("resume.txt");
    fs::write(&path, "5 years of Python and SQL experience")?;

    let document = Document::from_path(&path)?;
    assert_eq!(document.format, DocumentFormat::PlainText);

    let report = ScanPipeline::default().run(&document, JOB)?;
    assert_eq!(report.skills, vec!["python", "sql"]);
    assert_eq!(report.experience_years, 5);
    assert!((report.score - 85.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_docx_resume() -> Result<()> {
    let bytes = build_docx(&[
        "Jane Doe, Data Analyst",
        "3+ years building Tableau &amp; Power BI dashboards",
        "Tools: Excel, SQL",
    ])?;

    let report = run_pipeline(&bytes, "Jane_Doe.DOCX", "Analyst with Excel, SQL and Tableau")?;

    assert_eq!(report.skills, vec!["sql", "excel", "tableau", "power bi"]);
    assert_eq!(report.experience_years, 3);

    let matched: Vec<_> = report.matches.iter().map(|m| m.skill.as_str()).collect();
    assert!(matched.contains(&"sql"));
    assert!(matched.contains(&"excel"));
    assert!(matched.contains(&"tableau"));
    assert!(report.score >= 85.0 && report.score <= 100.0);

    Ok(())
}

#[test]
fn test_unsupported_file_is_not_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("resume.odt");
    fs::write(&path, "10 years of Java")?;

    let report = ScanPipeline::default().run(&Document::from_path(&path)?, JOB)?;
    assert!(report.skills.is_empty());
    assert_eq!(report.experience_years, 0);
    assert!(report.matches.is_empty());

    Ok(())
}

#[test]
fn test_corrupt_documents_are_unreadable() {
    for name in ["resume.pdf", "resume.docx"] {
        let err = run_pipeline(b"definitely not a document", name, JOB).unwrap_err();
        assert!(
            matches!(err, Error::UnreadableDocument { .. }),
            "{} gave {:?}",
            name,
            err
        );
    }
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempdir().unwrap();
    let err = Document::from_path(&dir.path().join("gone.txt")).unwrap_err();
    assert!(matches!(err, Error::UnreadableDocument { .. }));
}

#[test]
fn test_empty_job_description_is_neutral_for_any_resume() -> Result<()> {
    for text in ["", "nothing relevant", "20 years of Python, Java, AWS, Docker"] {
        let report = run_pipeline(text.as_bytes(), "cv.txt", "")?;
        assert_eq!(report.score, 90.0);
        assert!(report.matches.is_empty());
    }
    Ok(())
}

#[test]
fn test_custom_vocabulary_file() -> Result<()> {
    let dir = tempdir()?;
    let vocabulary_path = dir.path().join("skills.json");
    fs::write(
        &vocabulary_path,
        r#"{"skills": [{"name": "rust", "aliases": ["rustlang"]}, {"name": "kubernetes", "aliases": ["k8s"]}]}"#,
    )?;

    let pipeline = ScanPipeline::new(&PipelineConfig {
        match_threshold: 60.0,
        vocabulary_path: Some(vocabulary_path),
    })?;

    let report = pipeline.analyze_text(
        "Rustlang services on K8s, 4 years. Also Python.",
        "Rust engineer for our kubernetes platform",
    );

    assert_eq!(report.skills, vec!["rust", "kubernetes"]);
    assert_eq!(report.matches.len(), 2);
    assert_eq!(report.matches[1].matched_token, "kubernetes");

    Ok(())
}

#[test]
fn test_invalid_vocabulary_file() {
    let dir = tempdir().unwrap();
    let vocabulary_path = dir.path().join("skills.json");
    fs::write(&vocabulary_path, r#"{"skills": [{"name": "go"}, {"name": "Go"}]}"#).unwrap();

    let result = ScanPipeline::new(&PipelineConfig {
        match_threshold: 60.0,
        vocabulary_path: Some(vocabulary_path),
    });
    assert!(matches!(result, Err(Error::Vocabulary(_))));
}

#[test]
fn test_docx_header_and_footer_text() -> Result<()> {
    let bytes = build_docx_parts(&[
        ("word/header1.xml", word_part("hdr", &["Python Developer, 6 years"])),
        ("word/document.xml", document_part(&["Summary"])),
        ("word/footer1.xml", word_part("ftr", &["Certified in AWS"])),
    ])?;

    let text = resuscan::extraction::extract_docx_text("cv.docx", &bytes)?;
    let header = text.find("Python Developer").expect("header text present");
    let body = text.find("Summary").expect("body text present");
    let footer = text.find("Certified in AWS").expect("footer text present");
    assert!(header < body && body < footer);

    let report = run_pipeline(&bytes, "cv.docx", "python")?;
    assert_eq!(report.skills, vec!["python", "aws"]);
    assert_eq!(report.experience_years, 6);
    assert_eq!(report.matches.len(), 1);
    // 0.7 * 100 + 0.3 * 60, above the floor so not rescaled.
    assert!((report.score - 88.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_pdf_pages_in_order_with_blank_page() -> Result<()> {
    let bytes = build_pdf(&["5 years of Python experience", "", "SQL and AWS"]);

    let text = resuscan::extraction::extract_pdf_text("cv.pdf", &bytes)?;
    let python = text.find("Python").expect("first page text present");
    let sql = text.find("SQL").expect("last page text present");
    assert!(python < sql);

    let report = run_pipeline(&bytes, "cv.pdf", JOB)?;
    assert_eq!(report.skills, vec!["python", "sql", "aws"]);
    assert_eq!(report.experience_years, 5);
    assert!((report.score - 85.0).abs() < 1e-9);

    Ok(())
}
