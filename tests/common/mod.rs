#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};

/// 2x2 DeviceRGB raster used by the synthetic image PDFs.
pub const RGB_SAMPLES: [u8; 12] = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];

/// A synthetic PDF with `page_count` empty pages.
pub fn text_pdf(page_count: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for _ in 0..page_count {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            Content { operations: vec![] }.encode().unwrap(),
        ));
        page_ids.push(doc.add_object(page_dict(pages_id, content_id, None)));
    }

    finish_pdf(doc, pages_id, page_ids)
}

/// One page with a raw (unfiltered) 2x2 RGB image `Im0`, drawn at
/// `20 30 cm`-translated, 100x50-scaled placement.
pub fn pdf_with_rgb_image() -> Vec<u8> {
    build_image_pdf(ImagePdf {
        draw: true,
        alias: false,
        filter: None,
        content: RGB_SAMPLES.to_vec(),
    })
}

/// Same layout, but the XObject dictionary holds the image under two names
/// (`Im0` and `Im1`) while the content stream only draws `Im0`.
pub fn pdf_with_aliased_image() -> Vec<u8> {
    build_image_pdf(ImagePdf {
        draw: true,
        alias: true,
        filter: None,
        content: RGB_SAMPLES.to_vec(),
    })
}

/// The image exists in the resources but is never drawn.
pub fn pdf_with_undrawn_image() -> Vec<u8> {
    build_image_pdf(ImagePdf {
        draw: false,
        alias: false,
        filter: None,
        content: RGB_SAMPLES.to_vec(),
    })
}

/// One page whose image placement uses fractional matrix coefficients.
pub fn pdf_with_fractional_placement() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(image_stream(None, RGB_SAMPLES.to_vec()));
    let operations = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(99.46),
                    Object::Real(0.0),
                    Object::Real(0.0),
                    Object::Real(50.11),
                    Object::Real(20.12),
                    Object::Real(30.07),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), operations.encode().unwrap()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let page_id = doc.add_object(page_dict(pages_id, content_id, Some(xobjects)));

    finish_pdf(doc, pages_id, vec![page_id])
}

/// DCT-encoded image carrying `bytes` verbatim.
pub fn pdf_with_jpeg_image(bytes: &[u8]) -> Vec<u8> {
    build_image_pdf(ImagePdf {
        draw: true,
        alias: false,
        filter: Some("DCTDecode"),
        content: bytes.to_vec(),
    })
}

/// Two pages; only the second carries (and draws) an image.
pub fn two_page_pdf_with_image_on_second() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let empty_content = doc.add_object(Stream::new(
        Dictionary::new(),
        Content { operations: vec![] }.encode().unwrap(),
    ));
    let first_page = doc.add_object(page_dict(pages_id, empty_content, None));

    let image_id = doc.add_object(image_stream(None, RGB_SAMPLES.to_vec()));
    let draw_content = doc.add_object(Stream::new(
        Dictionary::new(),
        draw_operations("Im0").encode().unwrap(),
    ));
    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let second_page = doc.add_object(page_dict(pages_id, draw_content, Some(xobjects)));

    finish_pdf(doc, pages_id, vec![first_page, second_page])
}

struct ImagePdf {
    draw: bool,
    alias: bool,
    filter: Option<&'static str>,
    content: Vec<u8>,
}

fn build_image_pdf(options: ImagePdf) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(image_stream(options.filter, options.content));

    let operations = if options.draw {
        draw_operations("Im0")
    } else {
        Content { operations: vec![] }
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), operations.encode().unwrap()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    if options.alias {
        xobjects.set("Im1", Object::Reference(image_id));
    }

    let page_id = doc.add_object(page_dict(pages_id, content_id, Some(xobjects)));
    finish_pdf(doc, pages_id, vec![page_id])
}

fn image_stream(filter: Option<&str>, content: Vec<u8>) -> Stream {
    let mut dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(2)),
        ("Height", Object::Integer(2)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
    ]);
    if let Some(name) = filter {
        dict.set("Filter", Object::Name(name.as_bytes().to_vec()));
    }
    Stream::new(dict, content)
}

fn draw_operations(name: &str) -> Content {
    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    100.into(),
                    0.into(),
                    0.into(),
                    50.into(),
                    20.into(),
                    30.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    }
}

fn page_dict(pages_id: lopdf::ObjectId, content_id: lopdf::ObjectId, xobjects: Option<Dictionary>) -> Dictionary {
    let mut page = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]),
        ),
        ("Contents", Object::Reference(content_id)),
    ]);
    if let Some(xobjects) = xobjects {
        page.set(
            "Resources",
            Object::Dictionary(Dictionary::from_iter(vec![(
                "XObject",
                Object::Dictionary(xobjects),
            )])),
        );
    }
    page
}

fn finish_pdf(
    mut doc: Document,
    pages_id: lopdf::ObjectId,
    page_ids: Vec<lopdf::ObjectId>,
) -> Vec<u8> {
    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Write a minimal OOXML archive containing the given entries.
pub fn write_ooxml(path: &Path, entries: &[(&str, &str)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (name, xml) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}
