//! Integration tests for end-to-end contract generation.
//!
//! These tests verify the full flow:
//! 1. Template and data are parsed from JSON/YAML
//! 2. Tokens, parties and clauses are resolved
//! 3. HTML and paginated output are rendered
//! 4. The result is named and written to the output directory
//!
//! Banner images come from an in-memory loader, so no network is needed.

use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use tempfile::TempDir;

use label_contracts::adapters::document::input_loader::{parse_input, InputFormat};
use label_contracts::adapters::{
    HtmlContractRenderer, InMemoryImageLoader, LocalDocumentFileStorage,
    PaginatedContractRenderer, PdfWriter,
};
use label_contracts::application::{GenerateContractCommand, GenerateContractHandler};
use label_contracts::domain::contract::{
    Clause, CompanyData, ContractData, ContractTemplate, GenerationContext,
};
use label_contracts::domain::layout::{BannerKind, PageGeometry};
use label_contracts::ports::{
    ContractGenerator, ContractRequest, DocumentFileStorage, ExportFormat,
    PaginatedContractGenerator,
};

// =============================================================================
// Fixtures
// =============================================================================

const AGENCY_TEMPLATE: &str = r#"
name: "Contrato de Agenciamento - {{contracted_stage_name}}"
templateType: agenciamento_artistico
headerMarkup: '<div><img src="mem://header.png" alt="logo"></div>'
clauses:
  - title: Do Objeto
    content: "Agenciamento da carreira de {{contracted_stage_name}}."
  - title: Da Remuneração
    content: "O REPRESENTANTE receberá {{royalties_percentage}}% ({{royalties_percentage_words}}) e adiantamento de {{advance_value}} ({{advance_value_words}})."
"#;

const DATA_JSON: &str = r#"{
  "contractedName": "João da Silva",
  "contractedStageName": "MC Aurora",
  "contractedEmail": "joao@example.com",
  "royaltiesPercentage": 15,
  "advanceValue": 1500.5,
  "startDate": "2024-06-01"
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([20, 20, 60]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .unwrap();
    bytes.into_inner()
}

fn agency_template() -> ContractTemplate {
    parse_input(AGENCY_TEMPLATE, InputFormat::Yaml, "agency.yaml").unwrap()
}

fn data() -> ContractData {
    parse_input(DATA_JSON, InputFormat::Json, "data.json").unwrap()
}

fn long_template(clauses: usize) -> ContractTemplate {
    let mut template = agency_template();
    template.header_markup = None;
    template.clauses = (1..=clauses)
        .map(|i| {
            Clause::new(
                format!("Cláusula de teste {}", i),
                "Texto contratual extenso que ocupa várias linhas na página. ".repeat(12),
            )
        })
        .collect();
    template
}

// =============================================================================
// Markup output
// =============================================================================

#[test]
fn agency_contract_renders_resolved_html() {
    let template = agency_template();
    let data = data();
    let context = GenerationContext::new(CompanyData::default_identity(), today());
    let request = ContractRequest::new(&template, &data, None, &context);

    let html = HtmlContractRenderer::new().render(&request).unwrap();

    assert!(html.contains("Contrato de Agenciamento - MC Aurora"));
    assert!(html.contains("&quot;REPRESENTANTE&quot;"));
    assert!(html.contains("&quot;REPRESENTADO(A)&quot;"));
    assert!(html.contains("conhecido(a) artisticamente como &quot;MC Aurora&quot;"));
    assert!(html.contains("15% (quinze por cento)"));
    assert!(html.contains("R$ 1.500,50"));
    assert!(html.contains("CLÁUSULA 2ª - Da Remuneração"));
    assert!(html.contains(r#"src="mem://header.png""#));
    assert!(!html.contains("{{"));
}

#[test]
fn markup_is_byte_identical_on_repeat() {
    let template = agency_template();
    let data = data();
    let context = GenerationContext::new(CompanyData::default_identity(), today());
    let request = ContractRequest::new(&template, &data, None, &context);
    let renderer = HtmlContractRenderer::new();

    assert_eq!(renderer.render(&request).unwrap(), renderer.render(&request).unwrap());
}

// =============================================================================
// Paginated output
// =============================================================================

#[tokio::test]
async fn long_contract_spans_pages_with_banners_on_each() {
    let template = long_template(20);
    let data = data();
    let context = GenerationContext::new(CompanyData::default_identity(), today());
    let request = ContractRequest::new(&template, &data, None, &context);
    let renderer =
        PaginatedContractRenderer::new(Arc::new(InMemoryImageLoader::new()), PageGeometry::a4());

    let document = renderer.render_paginated(&request).await.unwrap();

    assert!(document.page_count() > 1);
    for (index, page) in document.pages.iter().enumerate() {
        assert_eq!(page.number, index + 1);
        assert_eq!(page.header.kind, BannerKind::Text);
        assert!(!page.header.elements.is_empty());
        assert!(!page.footer.elements.is_empty());
    }
    let all_text = document
        .pages
        .iter()
        .flat_map(|p| p.body_text())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(all_text.contains("CLÁUSULA 20ª - Cláusula de teste 20"));
    assert!(all_text.contains("TESTEMUNHAS:"));
}

#[tokio::test]
async fn header_image_is_repeated_on_every_page() {
    let mut template = long_template(20);
    template.header_markup = Some(r#"<img src="mem://header.png">"#.to_string());
    let data = data();
    let context = GenerationContext::new(CompanyData::default_identity(), today());
    let request = ContractRequest::new(&template, &data, None, &context);
    let loader = InMemoryImageLoader::new().with_image("mem://header.png", png(600, 60));
    let renderer = PaginatedContractRenderer::new(Arc::new(loader), PageGeometry::a4());

    let document = renderer.render_paginated(&request).await.unwrap();

    assert_eq!(document.images.len(), 1);
    assert!(document
        .pages
        .iter()
        .all(|page| page.header.kind == BannerKind::Image));
}

// =============================================================================
// Handler and storage
// =============================================================================

#[tokio::test]
async fn handler_writes_named_pdf_to_output_directory() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(LocalDocumentFileStorage::new(dir.path()));
    let loader = InMemoryImageLoader::new().with_image("mem://header.png", png(600, 60));
    let handler = GenerateContractHandler::new(
        Arc::new(HtmlContractRenderer::new()),
        Arc::new(PaginatedContractRenderer::new(
            Arc::new(loader),
            PageGeometry::a4(),
        )),
        Arc::new(PdfWriter::new()),
        storage.clone(),
        CompanyData::default_identity(),
    );

    let cmd = GenerateContractCommand::new(agency_template(), data(), ExportFormat::Pdf, today());
    let saved = handler.handle_and_store(cmd).await.unwrap();

    assert_eq!(
        saved.document.filename,
        "contrato_agenciamento_artistico_joão_da_silva_2024-05-01.pdf"
    );
    assert!(storage.exists(&saved.document.filename).await.unwrap());
    let bytes = storage.read(&saved.document.filename).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(storage.checksum(&saved.document.filename).await.unwrap(), saved.stored.checksum);
}

#[tokio::test]
async fn blank_counter_party_name_falls_back_in_filename() {
    let dir = TempDir::new().unwrap();
    let handler = GenerateContractHandler::new(
        Arc::new(HtmlContractRenderer::new()),
        Arc::new(PaginatedContractRenderer::new(
            Arc::new(InMemoryImageLoader::new()),
            PageGeometry::a4(),
        )),
        Arc::new(PdfWriter::new()),
        Arc::new(LocalDocumentFileStorage::new(dir.path())),
        CompanyData::default_identity(),
    );
    let template = ContractTemplate {
        name: "Contrato de Shows".to_string(),
        template_type: "shows".to_string(),
        ..Default::default()
    };

    let cmd =
        GenerateContractCommand::new(template, ContractData::default(), ExportFormat::Html, today());
    let document = handler.handle(cmd).await.unwrap();

    assert_eq!(document.filename, "contrato_shows_sem_nome_2024-05-01.html");
    let html = String::from_utf8(document.content).unwrap();
    assert!(html.contains("(nome completo)"));
    assert!(html.contains("TESTEMUNHAS:"));
}
