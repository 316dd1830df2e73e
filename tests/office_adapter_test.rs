mod common;

use multidoc::infrastructure::text_processing::DocumentLoader;

const DOCX_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:body>"#,
    r#"<w:p><w:r><w:t>Hello from Word</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>Second paragraph &amp; more</w:t></w:r></w:p>"#,
    r#"</w:body></w:document>"#,
);

fn slide_xml(text: &str) -> String {
    format!(
        concat!(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
            r#"<p:cSld><p:spTree><p:sp><p:txBody>"#,
            r#"<a:p><a:r><a:t>{}</a:t></a:r></a:p>"#,
            r#"</p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
        ),
        text
    )
}

#[tokio::test]
async fn given_docx_when_loading_then_paragraph_text_is_extracted() {
    let dir = tempfile::TempDir::new().unwrap();
    let file_path = dir.path().join("letter.docx");
    common::write_ooxml(&file_path, &[("word/document.xml", DOCX_XML)]);

    let loader = DocumentLoader::new();
    let documents = loader
        .load_with_image_dir(&file_path, &dir.path().join("images"))
        .await
        .unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(
        documents[0].content,
        "Hello from Word\nSecond paragraph & more"
    );
    assert!(documents[0].metadata.images.is_none());
}

#[tokio::test]
async fn given_pptx_when_loading_then_one_document_per_slide_in_deck_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let file_path = dir.path().join("deck.pptx");
    // slide10 written before slide2 to prove numeric ordering
    let slide_one = slide_xml("First slide");
    let slide_two = slide_xml("Second slide");
    let slide_ten = slide_xml("Tenth slide");
    common::write_ooxml(
        &file_path,
        &[
            ("ppt/slides/slide10.xml", slide_ten.as_str()),
            ("ppt/slides/slide1.xml", slide_one.as_str()),
            ("ppt/slides/slide2.xml", slide_two.as_str()),
        ],
    );

    let loader = DocumentLoader::new();
    let documents = loader
        .load_with_image_dir(&file_path, &dir.path().join("images"))
        .await
        .unwrap();

    assert_eq!(documents.len(), 3);
    assert_eq!(documents[0].content, "First slide");
    assert_eq!(documents[0].metadata.slide, Some(1));
    assert_eq!(documents[1].content, "Second slide");
    assert_eq!(documents[2].content, "Tenth slide");
    assert_eq!(documents[2].metadata.slide, Some(3));
}

#[tokio::test]
async fn given_archive_without_document_xml_when_loading_then_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let file_path = dir.path().join("empty.docx");
    common::write_ooxml(&file_path, &[("word/other.xml", "<w:document/>")]);

    let loader = DocumentLoader::new();
    let result = loader
        .load_with_image_dir(&file_path, &dir.path().join("images"))
        .await;

    assert!(result.is_err());
}
