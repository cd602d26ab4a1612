//! PdfWriter - Serialises a paginated document with lopdf.
//!
//! Text uses the standard Helvetica faces with WinAnsi encoding, so no font
//! is embedded. Rasters become DeviceRGB image XObjects shared by all pages.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use crate::domain::layout::{Element, FontWeight, Page, PaginatedDocument, RasterImage};
use crate::ports::{ExportError, ExportFormat, PaginatedDocumentEncoder};

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";
const PDF_VERSION: &str = "1.5";

/// Encodes paginated documents as PDF bytes.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    compress: bool,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self { compress: true }
    }

    /// Leave content streams uncompressed (useful for inspecting output).
    pub fn uncompressed(mut self) -> Self {
        self.compress = false;
        self
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginatedDocumentEncoder for PdfWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn encode(&self, document: &PaginatedDocument) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary("Helvetica"));
        let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));

        let mut xobjects = Dictionary::new();
        for (index, image) in document.images.iter().enumerate() {
            let image_id = doc.add_object(image_stream(image));
            xobjects.set(image_name(index), image_id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
            "XObject" => xobjects,
        });

        let height = document.geometry.height;
        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            document.geometry.width.into(),
            height.into(),
        ];

        let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let operations = page_operations(page, height, document.images.len())?;
            let content = Content { operations }
                .encode()
                .map_err(|e| ExportError::pdf_failed(format!("page {}: {}", page.number, e)))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => document.pages.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if self.compress {
            doc.compress();
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::io_error(e.to_string()))?;

        debug!(pages = document.pages.len(), bytes = bytes.len(), "pdf encoded");
        Ok(bytes)
    }
}

fn font_dictionary(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn image_stream(image: &RasterImage) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width_px as i64,
            "Height" => image.height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        image.rgb.clone(),
    )
}

fn image_name(index: usize) -> String {
    format!("Im{}", index)
}

/// Content stream for one page: header, body, then footer.
fn page_operations(
    page: &Page,
    page_height: f32,
    image_count: usize,
) -> Result<Vec<Operation>, ExportError> {
    let mut ops = Vec::new();
    let elements = page
        .header
        .elements
        .iter()
        .chain(page.body.iter())
        .chain(page.footer.elements.iter());

    for element in elements {
        match element {
            Element::Text {
                x,
                y,
                size,
                weight,
                text,
            } => {
                let font = match weight {
                    FontWeight::Regular => REGULAR_FONT,
                    FontWeight::Bold => BOLD_FONT,
                };
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("Tf", vec![font.into(), (*size).into()]));
                ops.push(Operation::new("Td", vec![(*x).into(), (page_height - y).into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            Element::Rule {
                x1,
                x2,
                y,
                thickness,
            } => {
                let pdf_y = page_height - y - thickness / 2.0;
                ops.push(Operation::new("w", vec![(*thickness).into()]));
                ops.push(Operation::new("m", vec![(*x1).into(), pdf_y.into()]));
                ops.push(Operation::new("l", vec![(*x2).into(), pdf_y.into()]));
                ops.push(Operation::new("S", vec![]));
            }
            Element::Image {
                id,
                x,
                y,
                width,
                height,
            } => {
                if id.0 >= image_count {
                    return Err(ExportError::MissingImage(id.0));
                }
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new(
                    "cm",
                    vec![
                        (*width).into(),
                        0.into(),
                        0.into(),
                        (*height).into(),
                        (*x).into(),
                        (page_height - y - height).into(),
                    ],
                ));
                ops.push(Operation::new("Do", vec![Object::Name(image_name(id.0).into_bytes())]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }

    Ok(ops)
}

/// Maps text to WinAnsi (Windows-1252) bytes. Unmappable chars become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{
        Align, BannerSpec, ImageId, PageComposer, PageGeometry, TextStyle,
    };

    const BODY: TextStyle = TextStyle::new(10.0, FontWeight::Regular, Align::Left);

    fn document(paragraphs: usize, with_image: bool) -> PaginatedDocument {
        let header = if with_image {
            BannerSpec::Image {
                id: ImageId(0),
                height: 40.0,
            }
        } else {
            BannerSpec::Text {
                height: 70.0,
                lines: vec![("Selo Aurora".to_string(), BODY)],
            }
        };
        let footer = BannerSpec::Text {
            height: 40.0,
            lines: vec![("contato".to_string(), BODY)],
        };
        let images = if with_image {
            vec![RasterImage {
                width_px: 2,
                height_px: 1,
                rgb: vec![255, 0, 0, 0, 0, 255],
            }]
        } else {
            Vec::new()
        };

        let mut composer = PageComposer::new(PageGeometry::a4(), header, footer, images);
        for i in 0..paragraphs {
            composer.paragraph(&format!("Parágrafo {} da cláusula (teste)", i), BODY);
        }
        composer.finish()
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    #[test]
    fn writes_loadable_pdf_with_all_pages() {
        let doc = document(200, false);
        let bytes = PdfWriter::new().encode(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert_eq!(page_count(&bytes), doc.page_count());
    }

    #[test]
    fn embeds_banner_images() {
        let doc = document(3, true);
        let bytes = PdfWriter::new().uncompressed().encode(&doc).unwrap();
        let loaded = Document::load_mem(&bytes).unwrap();
        let has_image = loaded.objects.values().any(|object| {
            object
                .as_stream()
                .and_then(|s| s.dict.get(b"Subtype"))
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        });
        assert!(has_image);
    }

    #[test]
    fn missing_image_is_reported() {
        let mut doc = document(1, true);
        doc.images.clear();
        assert!(matches!(
            PdfWriter::new().encode(&doc),
            Err(ExportError::MissingImage(0))
        ));
    }

    #[test]
    fn encoding_is_deterministic() {
        let doc = document(50, false);
        let writer = PdfWriter::new();
        assert_eq!(writer.encode(&doc).unwrap(), writer.encode(&doc).unwrap());
    }

    #[test]
    fn win_ansi_keeps_portuguese_letters() {
        assert_eq!(encode_win_ansi("ção"), vec![0xE7, 0xE3, b'o']);
        assert_eq!(encode_win_ansi("1ª – nº"), vec![b'1', 0xAA, b' ', 0x96, b' ', b'n', 0xBA]);
        assert_eq!(encode_win_ansi("✓"), vec![b'?']);
    }
}
