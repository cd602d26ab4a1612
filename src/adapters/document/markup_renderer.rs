//! HtmlContractRenderer - Standalone HTML rendering of a contract.
//!
//! Builds the document section by section into one string. No I/O: image
//! banners are emitted as `<img>` references and left for the viewer to load.

use tracing::debug;

use crate::domain::contract::{wording, ContractAssembly, PartyBlock};
use crate::ports::{ContractGenerator, ContractRequest, DocumentError};

/// Renders contracts as self-contained HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlContractRenderer {
    include_default_css: bool,
}

impl HtmlContractRenderer {
    pub fn new() -> Self {
        Self {
            include_default_css: true,
        }
    }

    /// Disable the embedded stylesheet.
    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    /// Renders an already assembled contract.
    pub fn render_assembly(&self, assembly: &ContractAssembly) -> String {
        let mut body = String::new();

        body.push_str(&self.header_section(assembly));
        body.push_str(&format!(
            "<h1 class=\"contract-title\">{}</h1>\n",
            html_escape(&assembly.title)
        ));
        body.push_str(&self.parties_section(assembly));
        body.push_str(&paragraph("introduction", wording::INTRODUCTION));
        body.push_str(&self.clauses_section(assembly));
        body.push_str(&paragraph("closing", wording::CLOSING));
        body.push_str(&paragraph("place-date", &assembly.place_and_date));
        body.push_str(&self.signatures_section(assembly));
        body.push_str(&self.witnesses_section());
        body.push_str(&self.footer_section(assembly));

        self.wrap_html(body, &assembly.title)
    }

    fn header_section(&self, assembly: &ContractAssembly) -> String {
        match &assembly.header_image {
            Some(src) => format!(
                "<header class=\"banner\"><img src=\"{}\" alt=\"\"></header>\n",
                html_escape(src)
            ),
            None => {
                let mut section = String::from("<header class=\"banner banner-text\">\n");
                section.push_str(&format!(
                    "<div class=\"company-name\">{}</div>\n",
                    html_escape(&assembly.company.name)
                ));
                if !assembly.company.tagline.trim().is_empty() {
                    section.push_str(&format!(
                        "<div class=\"company-tagline\">{}</div>\n",
                        html_escape(&assembly.company.tagline)
                    ));
                }
                section.push_str("</header>\n");
                section
            }
        }
    }

    fn parties_section(&self, assembly: &ContractAssembly) -> String {
        let mut section = String::from("<section class=\"parties\">\n");
        for party in [&assembly.parties.issuer, &assembly.parties.counter_party] {
            section.push_str(&paragraph("party", &party.paragraph));
        }
        section.push_str("</section>\n");
        section
    }

    fn clauses_section(&self, assembly: &ContractAssembly) -> String {
        let mut section = String::from("<section class=\"clauses\">\n");
        for clause in &assembly.clauses {
            section.push_str(&format!(
                "<h2 class=\"clause-heading\">{}</h2>\n",
                html_escape(&clause.heading)
            ));
            section.push_str(&paragraph("clause-body", &clause.body));
        }
        section.push_str("</section>\n");
        section
    }

    fn signatures_section(&self, assembly: &ContractAssembly) -> String {
        let (left, right) = assembly.parties.ordered();
        let mut section = String::from("<section class=\"signatures\">\n");
        section.push_str(&signature_block(left));
        section.push_str(&signature_block(right));
        section.push_str("</section>\n");
        section
    }

    fn witnesses_section(&self) -> String {
        let mut section = String::from("<section class=\"witnesses\">\n");
        section.push_str(&format!(
            "<p class=\"witnesses-heading\">{}</p>\n",
            html_escape(wording::WITNESSES_HEADING)
        ));
        section.push_str("<div class=\"witness-row\">\n");
        for _ in 0..wording::WITNESS_COUNT {
            section.push_str("<div class=\"witness\">\n<div class=\"signature-line\"></div>\n");
            section.push_str(&format!(
                "<p>{}</p>\n<p>{}</p>\n",
                html_escape(wording::WITNESS_NAME_LINE),
                html_escape(wording::WITNESS_DOCUMENT_LINE)
            ));
            section.push_str("</div>\n");
        }
        section.push_str("</div>\n</section>\n");
        section
    }

    fn footer_section(&self, assembly: &ContractAssembly) -> String {
        match &assembly.footer_image {
            Some(src) => format!(
                "<footer class=\"banner\"><img src=\"{}\" alt=\"\"></footer>\n",
                html_escape(src)
            ),
            None => String::new(),
        }
    }

    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="contract">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }
}

impl Default for HtmlContractRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractGenerator for HtmlContractRenderer {
    fn render(&self, request: &ContractRequest<'_>) -> Result<String, DocumentError> {
        request.validate()?;
        let assembly = request.assemble();
        let html = self.render_assembly(&assembly);
        debug!(
            structure = %assembly.structure(),
            clauses = assembly.clauses.len(),
            bytes = html.len(),
            "rendered contract markup"
        );
        Ok(html)
    }
}

fn signature_block(party: &PartyBlock) -> String {
    format!(
        "<div class=\"signature\">\n<div class=\"signature-line\"></div>\n\
         <p class=\"signature-name\">{}</p>\n<p class=\"signature-label\">{}</p>\n</div>\n",
        html_escape(&party.name),
        html_escape(&party.label)
    )
}

/// Escaped paragraph; newlines in the source become line breaks.
fn paragraph(class: &str, text: &str) -> String {
    let lines: Vec<String> = text.lines().map(html_escape).collect();
    format!("<p class=\"{}\">{}</p>\n", class, lines.join("<br>\n"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Default CSS for printable contracts.
const DEFAULT_CSS: &str = r#"
        @page { size: A4; margin: 20mm; }
        body {
            font-family: Helvetica, Arial, sans-serif;
            font-size: 11pt;
            line-height: 1.5;
            color: #111;
            margin: 0;
        }
        .contract { max-width: 170mm; margin: 0 auto; }
        .banner img { width: 100%; display: block; }
        .banner-text { text-align: center; border-bottom: 1px solid #444; padding-bottom: 8px; }
        .company-name { font-size: 14pt; font-weight: bold; }
        .company-tagline { font-size: 9pt; color: #555; }
        .contract-title { text-align: center; font-size: 16pt; margin: 24px 0; }
        .party, .clause-body, .introduction, .closing { text-align: justify; }
        .clause-heading { font-size: 11pt; font-weight: bold; margin: 18px 0 6px; }
        .place-date { text-align: right; margin-top: 24px; }
        .signatures, .witness-row { display: flex; justify-content: space-between; gap: 40px; margin-top: 48px; }
        .signature, .witness { flex: 1; text-align: center; }
        .witness { text-align: left; }
        .signature-line { border-top: 1px solid #000; margin-bottom: 4px; }
        .signature-name { font-weight: bold; margin: 0; }
        .signature-label { margin: 0; }
        .witnesses-heading { font-weight: bold; margin-top: 36px; }
        footer.banner { margin-top: 36px; }
"#;
