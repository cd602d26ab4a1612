//! PaginatedContractRenderer - Fixed-page layout of a contract.
//!
//! Banner images are loaded through the `ImageLoader` port, header first and
//! then footer. Any load or decode failure is logged and that band falls back
//! to a text banner; generation itself never fails on images.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::adapters::images::decode_raster;
use crate::domain::contract::{wording, ContractAssembly, CompanyData};
use crate::domain::layout::{
    Align, BannerSpec, FontWeight, ImageId, PageComposer, PageGeometry, PaginatedDocument,
    RasterImage, SignatureColumn, TextStyle,
};
use crate::ports::{
    ContractRequest, DocumentError, ImageLoadError, ImageLoader, PaginatedContractGenerator,
};

/// Height of the generated header band.
pub const TEXT_HEADER_HEIGHT: f32 = 70.0;

/// Height of the generated footer band.
pub const TEXT_FOOTER_HEIGHT: f32 = 40.0;

/// Gap between the two signature columns.
pub const SIGNATURE_GUTTER: f32 = 40.0;

/// An image banner taller than this share of the page is not used.
const MAX_BANNER_SHARE: f32 = 0.25;

const TITLE: TextStyle = TextStyle::new(16.0, FontWeight::Bold, Align::Center);
const BODY: TextStyle = TextStyle::new(10.0, FontWeight::Regular, Align::Left);
const CLAUSE_HEADING: TextStyle = TextStyle::new(11.0, FontWeight::Bold, Align::Left);
const SIGNATURE_NAME: TextStyle = TextStyle::new(10.0, FontWeight::Bold, Align::Center);
const SIGNATURE_LABEL: TextStyle = TextStyle::new(9.0, FontWeight::Regular, Align::Center);
const WITNESS_HEADING: TextStyle = TextStyle::new(10.0, FontWeight::Bold, Align::Left);
const WITNESS_LINE: TextStyle = TextStyle::new(9.0, FontWeight::Regular, Align::Left);
const BANNER_NAME: TextStyle = TextStyle::new(14.0, FontWeight::Bold, Align::Center);
const BANNER_TAGLINE: TextStyle = TextStyle::new(9.0, FontWeight::Regular, Align::Center);
const BANNER_CONTACT: TextStyle = TextStyle::new(8.0, FontWeight::Regular, Align::Center);

const PARAGRAPH_GAP: f32 = 8.0;
const SECTION_GAP: f32 = 16.0;

#[derive(Debug, Clone, Copy)]
enum Band {
    Header,
    Footer,
}

impl Band {
    fn as_str(&self) -> &'static str {
        match self {
            Band::Header => "header",
            Band::Footer => "footer",
        }
    }
}

/// Renders contracts into fixed-size pages.
pub struct PaginatedContractRenderer {
    image_loader: Arc<dyn ImageLoader>,
    geometry: PageGeometry,
}

impl PaginatedContractRenderer {
    pub fn new(image_loader: Arc<dyn ImageLoader>, geometry: PageGeometry) -> Self {
        Self {
            image_loader,
            geometry,
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// Loads and decodes one banner image, or `None` to fall back to text.
    async fn load_banner(&self, band: Band, reference: Option<&str>) -> Option<RasterImage> {
        let reference = reference?;
        match self.fetch_and_decode(reference).await {
            Ok(raster) => {
                let height = raster.height_at_width(self.geometry.width);
                if height > self.geometry.height * MAX_BANNER_SHARE {
                    warn!(
                        band = band.as_str(),
                        height,
                        "banner image too tall, using text banner"
                    );
                    return None;
                }
                Some(raster)
            }
            Err(e) => {
                warn!(
                    band = band.as_str(),
                    error = %e,
                    "banner image unavailable, using text banner"
                );
                None
            }
        }
    }

    async fn fetch_and_decode(&self, reference: &str) -> Result<RasterImage, ImageLoadError> {
        let bytes = self.image_loader.load(reference).await?;
        decode_raster(&bytes)
    }
}

#[async_trait]
impl PaginatedContractGenerator for PaginatedContractRenderer {
    async fn render_paginated(
        &self,
        request: &ContractRequest<'_>,
    ) -> Result<PaginatedDocument, DocumentError> {
        request.validate()?;
        let assembly = request.assemble();

        // Header first, then footer.
        let header = self
            .load_banner(Band::Header, assembly.header_image.as_deref())
            .await;
        let footer = self
            .load_banner(Band::Footer, assembly.footer_image.as_deref())
            .await;

        let document = layout_contract(self.geometry, &assembly, header, footer);
        info!(
            structure = %assembly.structure(),
            pages = document.page_count(),
            clauses = assembly.clauses.len(),
            "paginated contract rendered"
        );
        Ok(document)
    }
}

/// Lays out an assembled contract. Missing rasters become text banners.
pub fn layout_contract(
    geometry: PageGeometry,
    assembly: &ContractAssembly,
    header_image: Option<RasterImage>,
    footer_image: Option<RasterImage>,
) -> PaginatedDocument {
    let mut images = Vec::new();
    let header = banner_spec(&geometry, header_image, &mut images, || {
        text_header(&assembly.company)
    });
    let footer = banner_spec(&geometry, footer_image, &mut images, || {
        text_footer(&assembly.company)
    });

    let mut composer = PageComposer::new(geometry, header, footer, images);

    composer.paragraph(&assembly.title, TITLE);
    composer.space(SECTION_GAP);

    for party in [&assembly.parties.issuer, &assembly.parties.counter_party] {
        composer.paragraph(&party.paragraph, BODY);
        composer.space(PARAGRAPH_GAP);
    }
    composer.paragraph(wording::INTRODUCTION, BODY);
    composer.space(SECTION_GAP);

    for clause in &assembly.clauses {
        composer.heading(&clause.heading, CLAUSE_HEADING, BODY.line_height());
        composer.paragraph(&clause.body, BODY);
        composer.space(PARAGRAPH_GAP);
    }

    composer.space(PARAGRAPH_GAP);
    composer.paragraph(wording::CLOSING, BODY);
    composer.space(PARAGRAPH_GAP);
    composer.paragraph(&assembly.place_and_date, BODY);
    composer.space(SECTION_GAP);

    let (left, right) = assembly.parties.ordered();
    composer.signature_row(
        &SignatureColumn {
            name: left.name.clone(),
            label: left.label.clone(),
        },
        &SignatureColumn {
            name: right.name.clone(),
            label: right.label.clone(),
        },
        SIGNATURE_GUTTER,
        SIGNATURE_NAME,
        SIGNATURE_LABEL,
    );
    composer.space(SECTION_GAP);

    composer.witness_block(
        wording::WITNESSES_HEADING,
        WITNESS_HEADING,
        &[wording::WITNESS_NAME_LINE, wording::WITNESS_DOCUMENT_LINE],
        wording::WITNESS_COUNT,
        SIGNATURE_GUTTER,
        WITNESS_LINE,
    );

    composer.finish()
}

fn banner_spec(
    geometry: &PageGeometry,
    raster: Option<RasterImage>,
    images: &mut Vec<RasterImage>,
    fallback: impl FnOnce() -> BannerSpec,
) -> BannerSpec {
    match raster {
        Some(raster) => {
            let height = raster.height_at_width(geometry.width);
            let id = ImageId(images.len());
            images.push(raster);
            BannerSpec::Image { id, height }
        }
        None => fallback(),
    }
}

fn text_header(company: &CompanyData) -> BannerSpec {
    let mut lines = vec![(company.name.clone(), BANNER_NAME)];
    if !company.tagline.trim().is_empty() {
        lines.push((company.tagline.clone(), BANNER_TAGLINE));
    }
    BannerSpec::Text {
        height: TEXT_HEADER_HEIGHT,
        lines,
    }
}

fn text_footer(company: &CompanyData) -> BannerSpec {
    BannerSpec::Text {
        height: TEXT_FOOTER_HEIGHT,
        lines: vec![(company.contact_line(), BANNER_CONTACT)],
    }
}
