// Template Renderer: pure projections of a document into a visual tree
// (three templates) or a plain-text transcript.

pub mod classic;
pub mod handlers;
pub mod minimal;
pub mod modern;
pub mod parts;
pub mod plain_text;
pub mod tree;

use crate::models::preferences::TemplateId;
use crate::models::resume::ResumeDocument;

pub use plain_text::to_plain_text;
pub use tree::RenderedLayout;

/// Projects `doc` through the chosen template. The accent color only lands in
/// style fields; neither input is modified.
pub fn render(doc: &ResumeDocument, template: TemplateId, accent_color: &str) -> RenderedLayout {
    match template {
        TemplateId::Classic => classic::render(doc, accent_color),
        TemplateId::Modern => modern::render(doc, accent_color),
        TemplateId::Minimal => minimal::render(doc, accent_color),
    }
}
