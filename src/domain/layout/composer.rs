//! Cursor-driven page composition.
//!
//! The composer owns a vertical cursor on the current page. Every block asks
//! for the height it needs first; when `cursor + need` would cross the
//! printable limit (page height minus footer band minus a safety margin) the
//! current page is closed with its footer and a new page is opened with its
//! header. Each page therefore carries exactly one header and one footer.

use tracing::debug;

use super::document::{
    Banner, BannerKind, Element, FontWeight, ImageId, Page, PaginatedDocument, RasterImage,
};
use super::geometry::PageGeometry;
use super::text::{text_width, wrap};

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// Clearance kept above the footer band.
pub const SAFETY_MARGIN: f32 = 10.0;

/// Gap between the header band and the first body line.
const BODY_TOP_GAP: f32 = 12.0;

/// Vertical room left for a handwritten signature above the rule.
const SIGNATURE_SPACE: f32 = 36.0;

const RULE_THICKNESS: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(size: f32, weight: FontWeight, align: Align) -> Self {
        Self {
            size,
            weight,
            align,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }
}

/// What to stamp in a header or footer band.
#[derive(Debug, Clone, PartialEq)]
pub enum BannerSpec {
    /// Full page width image. `height` is the scaled height.
    Image { id: ImageId, height: f32 },
    /// Centred text lines inside a fixed-height band.
    Text {
        height: f32,
        lines: Vec<(String, TextStyle)>,
    },
}

impl BannerSpec {
    pub fn height(&self) -> f32 {
        match self {
            BannerSpec::Image { height, .. } | BannerSpec::Text { height, .. } => *height,
        }
    }
}

/// One signature column: name and role label centred under a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureColumn {
    pub name: String,
    pub label: String,
}

/// Lays out blocks into fixed-size pages.
pub struct PageComposer {
    geometry: PageGeometry,
    header: BannerSpec,
    footer: BannerSpec,
    images: Vec<RasterImage>,
    pages: Vec<Page>,
    current_header: Banner,
    current_body: Vec<Element>,
    cursor: f32,
}

impl PageComposer {
    /// Opens the first page. `images` are the rasters referenced by banners.
    pub fn new(
        geometry: PageGeometry,
        header: BannerSpec,
        footer: BannerSpec,
        images: Vec<RasterImage>,
    ) -> Self {
        let current_header = stamp(&geometry, &header, BandPosition::Top);
        let cursor = header.height() + BODY_TOP_GAP;
        Self {
            geometry,
            header,
            footer,
            images,
            pages: Vec::new(),
            current_header,
            current_body: Vec::new(),
            cursor,
        }
    }

    /// Lowest y a block may reach on the current page.
    pub fn limit(&self) -> f32 {
        self.geometry.height - self.footer.height() - SAFETY_MARGIN
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn content_width(&self) -> f32 {
        self.geometry.content_width()
    }

    /// Number of pages opened so far, including the current one.
    pub fn page_number(&self) -> usize {
        self.pages.len() + 1
    }

    /// Breaks the page when `need` does not fit below the cursor.
    ///
    /// An empty page never breaks, so oversized blocks are placed rather
    /// than looping.
    pub fn ensure_space(&mut self, need: f32) {
        if self.cursor + need > self.limit() && !self.current_body.is_empty() {
            self.new_page();
        }
    }

    /// Closes the current page with its footer and opens the next one.
    pub fn new_page(&mut self) {
        let footer = stamp(&self.geometry, &self.footer, BandPosition::Bottom);
        let header = stamp(&self.geometry, &self.header, BandPosition::Top);
        let finished = Page {
            number: self.page_number(),
            header: std::mem::replace(&mut self.current_header, header),
            body: std::mem::take(&mut self.current_body),
            footer,
        };
        debug!(page = finished.number, elements = finished.body.len(), "page break");
        self.pages.push(finished);
        self.cursor = self.header.height() + BODY_TOP_GAP;
    }

    /// Advances the cursor without drawing.
    pub fn space(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Wraps and places a paragraph, breaking between lines as needed.
    pub fn paragraph(&mut self, text: &str, style: TextStyle) {
        let lines = wrap(text, self.content_width(), style.size, style.weight);
        for line in lines {
            self.ensure_space(style.line_height());
            self.place_line(line, style, self.geometry.content_left(), self.content_width());
            self.cursor += style.line_height();
        }
    }

    /// Places a heading together with room for the first line after it.
    pub fn heading(&mut self, text: &str, style: TextStyle, next_line_height: f32) {
        let lines = wrap(text, self.content_width(), style.size, style.weight);
        let need = lines.len() as f32 * style.line_height() + next_line_height;
        self.ensure_space(need);
        for line in lines {
            self.place_line(line, style, self.geometry.content_left(), self.content_width());
            self.cursor += style.line_height();
        }
    }

    /// Two signature columns separated by `gutter`, kept on one page.
    pub fn signature_row(
        &mut self,
        left: &SignatureColumn,
        right: &SignatureColumn,
        gutter: f32,
        name_style: TextStyle,
        label_style: TextStyle,
    ) {
        let column_width = (self.content_width() - gutter) / 2.0;
        let columns = [left, right].map(|column| {
            (
                wrap(&column.name, column_width, name_style.size, name_style.weight),
                wrap(&column.label, column_width, label_style.size, label_style.weight),
            )
        });

        let tallest = columns
            .iter()
            .map(|(name, label)| {
                name.len() as f32 * name_style.line_height()
                    + label.len() as f32 * label_style.line_height()
            })
            .fold(0.0f32, f32::max);
        self.ensure_space(SIGNATURE_SPACE + RULE_THICKNESS + tallest);

        let rule_y = self.cursor + SIGNATURE_SPACE;
        for (index, (name_lines, label_lines)) in columns.into_iter().enumerate() {
            let x = self.geometry.content_left() + index as f32 * (column_width + gutter);
            self.current_body.push(Element::Rule {
                x1: x,
                x2: x + column_width,
                y: rule_y,
                thickness: RULE_THICKNESS,
            });

            let mut y = rule_y + RULE_THICKNESS;
            for line in name_lines {
                self.place_line_at(line, name_style, x, column_width, y);
                y += name_style.line_height();
            }
            for line in label_lines {
                self.place_line_at(line, label_style, x, column_width, y);
                y += label_style.line_height();
            }
        }

        self.cursor = rule_y + RULE_THICKNESS + tallest;
    }

    /// Heading plus `count` blank witness columns (rule, then fill-in lines),
    /// kept together on one page.
    pub fn witness_block(
        &mut self,
        heading: &str,
        heading_style: TextStyle,
        fill_lines: &[&str],
        count: usize,
        gutter: f32,
        line_style: TextStyle,
    ) {
        let columns = count.max(1);
        let column_width =
            (self.content_width() - gutter * (columns as f32 - 1.0)) / columns as f32;
        let block_height = heading_style.line_height()
            + SIGNATURE_SPACE
            + RULE_THICKNESS
            + fill_lines.len() as f32 * line_style.line_height();
        self.ensure_space(block_height);

        let left = self.geometry.content_left();
        self.place_line(heading.to_string(), heading_style, left, self.content_width());
        self.cursor += heading_style.line_height();

        let rule_y = self.cursor + SIGNATURE_SPACE;
        for index in 0..count {
            let x = left + index as f32 * (column_width + gutter);
            self.current_body.push(Element::Rule {
                x1: x,
                x2: x + column_width,
                y: rule_y,
                thickness: RULE_THICKNESS,
            });
            let mut y = rule_y + RULE_THICKNESS;
            for text in fill_lines {
                let left_aligned = TextStyle {
                    align: Align::Left,
                    ..line_style
                };
                self.place_line_at(text.to_string(), left_aligned, x, column_width, y);
                y += line_style.line_height();
            }
        }

        self.cursor = rule_y + RULE_THICKNESS + fill_lines.len() as f32 * line_style.line_height();
    }

    /// Stamps the last footer and returns the document.
    pub fn finish(mut self) -> PaginatedDocument {
        let footer = stamp(&self.geometry, &self.footer, BandPosition::Bottom);
        let last = Page {
            number: self.page_number(),
            header: self.current_header,
            body: self.current_body,
            footer,
        };
        self.pages.push(last);

        PaginatedDocument {
            geometry: self.geometry,
            pages: self.pages,
            images: self.images,
        }
    }

    fn place_line(&mut self, line: String, style: TextStyle, x: f32, width: f32) {
        let y = self.cursor;
        self.place_line_at(line, style, x, width, y);
    }

    /// Places a line whose box starts at `top`.
    fn place_line_at(&mut self, line: String, style: TextStyle, x: f32, width: f32, top: f32) {
        if line.is_empty() {
            return;
        }
        self.current_body.push(text_element(line, style, x, width, top));
    }
}

#[derive(Debug, Clone, Copy)]
enum BandPosition {
    Top,
    Bottom,
}

fn text_element(line: String, style: TextStyle, x: f32, width: f32, top: f32) -> Element {
    let x = match style.align {
        Align::Left => x,
        Align::Center => {
            let measured = text_width(&line, style.size, style.weight);
            x + ((width - measured) / 2.0).max(0.0)
        }
    };
    Element::Text {
        x,
        y: top + style.size,
        size: style.size,
        weight: style.weight,
        text: line,
    }
}

fn stamp(geometry: &PageGeometry, spec: &BannerSpec, position: BandPosition) -> Banner {
    let height = spec.height();
    let top = match position {
        BandPosition::Top => 0.0,
        BandPosition::Bottom => geometry.height - height,
    };

    match spec {
        BannerSpec::Image { id, height } => Banner {
            kind: BannerKind::Image,
            top,
            height: *height,
            elements: vec![Element::Image {
                id: *id,
                x: 0.0,
                y: top,
                width: geometry.width,
                height: *height,
            }],
        },
        BannerSpec::Text { height, lines } => {
            let block: f32 = lines.iter().map(|(_, style)| style.line_height()).sum();
            let mut y = top + ((height - block) / 2.0).max(0.0);
            let mut elements = Vec::with_capacity(lines.len() + 1);

            if let BandPosition::Bottom = position {
                elements.push(Element::Rule {
                    x1: geometry.content_left(),
                    x2: geometry.width - geometry.margin,
                    y: top,
                    thickness: RULE_THICKNESS,
                });
            }
            for (text, style) in lines {
                elements.push(text_element(
                    text.clone(),
                    *style,
                    geometry.content_left(),
                    geometry.content_width(),
                    y,
                ));
                y += style.line_height();
            }
            if let BandPosition::Top = position {
                elements.push(Element::Rule {
                    x1: geometry.content_left(),
                    x2: geometry.width - geometry.margin,
                    y: top + height - RULE_THICKNESS,
                    thickness: RULE_THICKNESS,
                });
            }

            Banner {
                kind: BannerKind::Text,
                top,
                height: *height,
                elements,
            }
        }
    }
}
