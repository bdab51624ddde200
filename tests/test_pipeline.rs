//! End-to-end tests: raw model output through normalization and layout to
//! serialized PDF bytes.

use bilan_pdf::{
    layout_document, normalize_report, render_report, split_model_output, strip_markup,
    PdfRenderConfig, PdfRenderer,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

const RAW_REPORT: &str = "Bilan kinésithérapique\n\n\
    1. Informations patient\n\
    Nom et prénom : Jean Dupont\n\
    Âge : 54 ans\n\
    Situation familiale : …\n\n\
    2. Motif de consultation\n\
    Raison de la venue : lombalgie chronique\n\n\
    3. Évaluation clinique\n";

#[test]
fn test_render_report_produces_pdf() {
    init_logging();
    let pdf = render_report("Bilan kinésithérapique", Some("25/08/2026"), RAW_REPORT)
        .expect("rendering should succeed");
    assert!(pdf.starts_with(b"%PDF-1.4"));
    assert!(pdf.ends_with(b"%%EOF\n"));
}

#[test]
fn test_pdf_structure_uncompressed() {
    let clean = normalize_report(RAW_REPORT);
    let pages = layout_document("Bilan kinésithérapique", Some("25/08/2026"), &clean);
    let pdf = PdfRenderer::with_config(PdfRenderConfig::default().with_compress(false))
        .render(&pages)
        .expect("rendering should succeed");

    assert_eq!(count_occurrences(&pdf, b"/Type /Page "), pages.len());
    assert_eq!(count_occurrences(&pdf, b"/Type /Pages "), 1);
    assert_eq!(count_occurrences(&pdf, b"/Type /Catalog"), 1);
    assert!(count_occurrences(&pdf, b"/BaseFont /Helvetica ") >= 1);
    assert!(count_occurrences(&pdf, b"/BaseFont /Helvetica-Bold") >= 1);
    assert_eq!(count_occurrences(&pdf, b"/Filter /FlateDecode"), 0);

    // WinAnsi bytes for the accented title must appear in the content stream
    assert!(count_occurrences(&pdf, b"Bilan kin\xE9sith\xE9rapique") >= 1);
}

#[test]
fn test_compression_flag() {
    let pages = layout_document("Titre", None, "corps du rapport");
    let compressed = PdfRenderer::new().render(&pages).expect("render");
    let plain = PdfRenderer::with_config(PdfRenderConfig::default().with_compress(false))
        .render(&pages)
        .expect("render");

    assert!(count_occurrences(&compressed, b"/Filter /FlateDecode") >= 1);
    assert_eq!(count_occurrences(&plain, b"/Filter /FlateDecode"), 0);
}

#[test]
fn test_multi_page_document_structure() {
    let body: Vec<String> = (1..=400).map(|i| format!("ligne {}", i)).collect();
    let pages = layout_document("Titre", None, &body.join("\n"));
    assert!(pages.len() > 1);

    let pdf = PdfRenderer::with_config(PdfRenderConfig::default().with_compress(false))
        .render(&pages)
        .expect("render");
    assert_eq!(count_occurrences(&pdf, b"/Type /Page "), pages.len());
    let kids_entry = format!("/Count {}", pages.len());
    assert!(count_occurrences(&pdf, kids_entry.as_bytes()) >= 1);
}

#[test]
fn test_empty_page_list_yields_one_blank_page() {
    let pdf = PdfRenderer::with_config(PdfRenderConfig::default().with_compress(false))
        .render(&[])
        .expect("render");
    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(count_occurrences(&pdf, b"/Type /Page "), 1);
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bilan.pdf");

    let pages = layout_document("Titre", None, "corps");
    PdfRenderer::new().render_to_file(&pages, &path).expect("write file");

    let bytes = std::fs::read(&path).expect("read back");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn test_metadata_written() {
    let pages = layout_document("Titre", None, "corps");
    let config = PdfRenderConfig::default()
        .with_compress(false)
        .with_title("Bilan - Jean Dupont")
        .with_author("Cabinet de kinésithérapie");
    let pdf = PdfRenderer::with_config(config).render(&pages).expect("render");
    assert!(count_occurrences(&pdf, b"/Title (Bilan - Jean Dupont)") >= 1);
    assert!(count_occurrences(&pdf, b"/Creator (bilan_pdf)") >= 1);
}

#[test]
fn test_full_model_output_chain() {
    init_logging();
    let model_output = "{\"patient\": {\"nom\": \"Dupont\"}}\n\n\
        ## Bilan kinésithérapique\n\n\
        1. Informations patient\n\
        **Nom et prénom** : Jean Dupont\n\
        Âge : …\n\n\
        2. Motif de consultation\n\
        Raison : lombalgie\n";

    let (json, prose) = split_model_output(model_output);
    assert_eq!(json.expect("schema block")["patient"]["nom"], "Dupont");

    let clean = normalize_report(&strip_markup(&prose));
    assert_eq!(
        clean,
        "Bilan kinésithérapique\n\n1. Informations patient\nNom et prénom : Jean Dupont\n\n2. Motif de consultation\nRaison : lombalgie"
    );

    let pdf = render_report("", None, &prose).expect("render");
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_malformed_input_degrades_gracefully() {
    // No sections at all: layout still produces a title page with the footer
    let pdf = render_report("Titre", None, "du texte sans aucune structure").expect("render");
    assert!(pdf.starts_with(b"%PDF-"));
}
