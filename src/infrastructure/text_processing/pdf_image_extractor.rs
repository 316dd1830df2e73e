use std::path::Path;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::application::ports::DocumentParserError;
use crate::domain::{BoundingBox, ExtractedImage};

/// US Letter height, used when no MediaBox is resolvable.
const DEFAULT_PAGE_HEIGHT: f64 = 792.0;

/// Open `path` at the PDF object level and extract every embedded raster
/// image into `output_dir`, named `page<N>_img<K>.<ext>` (1-indexed page and
/// per-page ordinal).
///
/// The document handle lives only inside this call, so it is released on
/// every exit path, including failures raised mid-iteration.
pub fn extract_pdf_images(
    path: &Path,
    output_dir: &Path,
) -> Result<Vec<ExtractedImage>, DocumentParserError> {
    let doc = Document::load(path)
        .map_err(|e| DocumentParserError::ExtractionFailed(format!("failed to open PDF: {e}")))?;

    let mut images = Vec::new();

    for (page_number, page_id) in doc.get_pages() {
        let placements = image_placements(&doc, page_id);
        let page_height = page_height(&doc, page_id);
        let xobjects = page_image_xobjects(&doc, page_id);

        for (index, xobject) in xobjects.iter().enumerate() {
            let Some(payload) = image_payload(&doc, xobject.stream) else {
                tracing::warn!(
                    page = page_number,
                    name = %String::from_utf8_lossy(&xobject.name),
                    "Skipping image with unsupported encoding"
                );
                continue;
            };

            let filename = format!("page{}_img{}.{}", page_number, index + 1, payload.ext);
            let image_path = output_dir.join(filename);
            std::fs::write(&image_path, &payload.bytes)?;

            // Name lookup first; cross-reference aliases as the fallback.
            // An unresolved box is recorded as None, not an error.
            let rect = bbox_by_name(&placements, &xobject.name)
                .or_else(|| bbox_by_xref(&placements, &xobjects, xobject.id));

            images.push(ExtractedImage {
                page: page_number,
                image_path,
                bbox: rect.map(|r| r.to_bounding_box(page_height)),
                xref: xobject.id.map(|id| id.0).unwrap_or(0),
            });
        }
    }

    Ok(images)
}

struct ImageXObject<'a> {
    name: Vec<u8>,
    id: Option<ObjectId>,
    stream: &'a Stream,
}

struct ImagePayload {
    ext: &'static str,
    bytes: Vec<u8>,
}

/// Image XObjects reachable from the page's (possibly inherited) resource
/// dictionary, in dictionary order.
fn page_image_xobjects(doc: &Document, page_id: ObjectId) -> Vec<ImageXObject<'_>> {
    let mut found = Vec::new();

    let Some(resources) = inherited_dict(doc, page_id, b"Resources") else {
        return found;
    };
    let Some(xobjects) = resources
        .get(b"XObject")
        .ok()
        .and_then(|x| doc.dereference(x).ok())
        .and_then(|(_, object)| object.as_dict().ok())
    else {
        return found;
    };

    for (name, value) in xobjects.iter() {
        let Ok((id, object)) = doc.dereference(value) else {
            continue;
        };
        let Ok(stream) = object.as_stream() else {
            continue;
        };
        if is_image(stream) {
            found.push(ImageXObject {
                name: name.clone(),
                id,
                stream,
            });
        }
    }

    found
}

fn is_image(stream: &Stream) -> bool {
    matches!(stream.dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Image")
}

/// Native image bytes plus their file extension. JPEG and JPEG2000 streams
/// are written verbatim; flate-compressed 8-bit gray/RGB rasters are
/// re-encoded as PNG. Anything else yields `None`.
fn image_payload(doc: &Document, stream: &Stream) -> Option<ImagePayload> {
    match last_filter(doc, stream).as_deref() {
        Some("DCTDecode") => Some(ImagePayload {
            ext: "jpeg",
            bytes: stream.content.clone(),
        }),
        Some("JPXDecode") => Some(ImagePayload {
            ext: "jpx",
            bytes: stream.content.clone(),
        }),
        Some("FlateDecode") | Some("LZWDecode") => {
            let data = stream.decompressed_content().ok()?;
            encode_png(doc, &stream.dict, data)
        }
        None => encode_png(doc, &stream.dict, stream.content.clone()),
        Some(_) => None,
    }
}

fn last_filter(doc: &Document, stream: &Stream) -> Option<String> {
    let filter = stream.dict.get(b"Filter").ok()?;
    match doc.dereference(filter).ok()?.1 {
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::Array(filters) => filters.iter().rev().find_map(|f| match f {
            Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
            _ => None,
        }),
        _ => None,
    }
}

fn encode_png(doc: &Document, dict: &Dictionary, data: Vec<u8>) -> Option<ImagePayload> {
    let width = dict_number(doc, dict, b"Width")? as u32;
    let height = dict_number(doc, dict, b"Height")? as u32;
    let bits = dict_number(doc, dict, b"BitsPerComponent").unwrap_or(8.0) as u32;
    if bits != 8 {
        return None;
    }

    let components = color_components(doc, dict)?;
    let expected = (width as usize) * (height as usize) * (components as usize);
    if data.len() < expected {
        return None;
    }
    let samples = data[..expected].to_vec();

    let image = match components {
        1 => image::DynamicImage::ImageLuma8(image::GrayImage::from_raw(width, height, samples)?),
        3 => image::DynamicImage::ImageRgb8(image::RgbImage::from_raw(width, height, samples)?),
        _ => return None,
    };

    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .ok()?;

    Some(ImagePayload { ext: "png", bytes })
}

fn color_components(doc: &Document, dict: &Dictionary) -> Option<u32> {
    match doc.dereference(dict.get(b"ColorSpace").ok()?).ok()?.1 {
        Object::Name(name) => match name.as_slice() {
            b"DeviceRGB" => Some(3),
            b"DeviceGray" => Some(1),
            _ => None,
        },
        Object::Array(entries) => match entries.first()? {
            // ICCBased streams carry the component count in /N
            Object::Name(name) if name == b"ICCBased" => {
                let (_, profile) = doc.dereference(entries.get(1)?).ok()?;
                let n = dict_number(doc, &profile.as_stream().ok()?.dict, b"N")? as u32;
                match n {
                    1 => Some(1),
                    3 => Some(3),
                    _ => None,
                }
            }
            _ => None,
        },
        _ => None,
    }
}

#[derive(Clone, Copy)]
struct Matrix {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Matrix {
    const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// `self` concatenated onto `base`: points map through `self` first.
    fn concat(self, base: Self) -> Self {
        Self {
            a: self.a * base.a + self.b * base.c,
            b: self.a * base.b + self.b * base.d,
            c: self.c * base.a + self.d * base.c,
            d: self.c * base.b + self.d * base.d,
            e: self.e * base.a + self.f * base.c + base.e,
            f: self.e * base.b + self.f * base.d + base.f,
        }
    }

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    /// PDF user space has a bottom-left origin; reported coordinates use a
    /// top-left origin.
    fn to_bounding_box(self, page_height: f64) -> BoundingBox {
        BoundingBox::new(
            self.x0,
            page_height - self.y1,
            self.x1,
            page_height - self.y0,
        )
    }
}

/// Every XObject invocation in the page's content stream, paired with the
/// rectangle the transformation matrix in force maps the unit square to.
fn image_placements(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Rect)> {
    let Ok(content_data) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&content_data) else {
        return Vec::new();
    };

    let mut placements = Vec::new();
    let mut ctm = Matrix::IDENTITY;
    let mut stack: Vec<Matrix> = Vec::new();

    for operation in &content.operations {
        match operation.operator.as_str() {
            "q" => stack.push(ctm),
            "Q" => ctm = stack.pop().unwrap_or(Matrix::IDENTITY),
            "cm" => {
                if let Some(m) = operand_matrix(&operation.operands) {
                    ctm = m.concat(ctm);
                }
            }
            "Do" => {
                if let Some(Object::Name(name)) = operation.operands.first() {
                    placements.push((name.clone(), unit_square_rect(ctm)));
                }
            }
            _ => {}
        }
    }

    placements
}

fn operand_matrix(operands: &[Object]) -> Option<Matrix> {
    if operands.len() != 6 {
        return None;
    }
    Some(Matrix {
        a: number(&operands[0])?,
        b: number(&operands[1])?,
        c: number(&operands[2])?,
        d: number(&operands[3])?,
        e: number(&operands[4])?,
        f: number(&operands[5])?,
    })
}

fn unit_square_rect(ctm: Matrix) -> Rect {
    let corners = [
        ctm.apply(0.0, 0.0),
        ctm.apply(1.0, 0.0),
        ctm.apply(0.0, 1.0),
        ctm.apply(1.0, 1.0),
    ];

    let mut rect = Rect {
        x0: f64::INFINITY,
        y0: f64::INFINITY,
        x1: f64::NEG_INFINITY,
        y1: f64::NEG_INFINITY,
    };
    for (x, y) in corners {
        rect.x0 = rect.x0.min(x);
        rect.y0 = rect.y0.min(y);
        rect.x1 = rect.x1.max(x);
        rect.y1 = rect.y1.max(y);
    }
    rect
}

/// First placement drawn under exactly this symbolic name.
fn bbox_by_name(placements: &[(Vec<u8>, Rect)], name: &[u8]) -> Option<Rect> {
    placements
        .iter()
        .find(|(placed, _)| placed == name)
        .map(|(_, rect)| *rect)
}

/// Fallback lookup: any resource name on this page aliasing the same object
/// id counts; the first candidate rectangle wins.
fn bbox_by_xref(
    placements: &[(Vec<u8>, Rect)],
    xobjects: &[ImageXObject<'_>],
    id: Option<ObjectId>,
) -> Option<Rect> {
    let target = id?;
    placements
        .iter()
        .find(|(placed, _)| {
            xobjects
                .iter()
                .any(|x| x.id == Some(target) && x.name == *placed)
        })
        .map(|(_, rect)| *rect)
}

fn page_height(doc: &Document, page_id: ObjectId) -> f64 {
    inherited(doc, page_id, b"MediaBox")
        .and_then(|media_box| media_box.as_array().ok())
        .and_then(|coords| {
            let y0 = number(coords.get(1)?)?;
            let y1 = number(coords.get(3)?)?;
            Some(y1 - y0)
        })
        .unwrap_or(DEFAULT_PAGE_HEIGHT)
}

/// Resolve a page attribute, walking up the Pages tree for inheritable keys.
fn inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current = page_id;
    // depth guard against malformed Parent cycles
    for _ in 0..32 {
        let dict = doc.get_object(current).ok()?.as_dict().ok()?;
        if let Ok(value) = dict.get(key) {
            return doc.dereference(value).ok().map(|(_, object)| object);
        }
        match dict.get(b"Parent").ok()? {
            Object::Reference(parent) => current = *parent,
            _ => return None,
        }
    }
    None
}

fn inherited_dict<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Dictionary> {
    inherited(doc, page_id, key).and_then(|object| object.as_dict().ok())
}

fn dict_number(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<f64> {
    number(doc.dereference(dict.get(key).ok()?).ok()?.1)
}

fn number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}
