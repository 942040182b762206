//! Standalone printable documents, opened in a new window from the
//! premium page.

mod document_checklist;
mod mail_templates;
mod report;
mod visit_checklist;

pub use document_checklist::DocumentChecklist;
pub use mail_templates::MailTemplates;
pub use report::AnalysisReport;
pub use visit_checklist::VisitChecklist;

use crate::domain::AnalysisResult;
use chrono::NaiveDate;
use maud::{html, Markup};

/// Everything a document may print besides its fixed text.
pub struct DocumentContext<'a> {
    pub analysis: &'a AnalysisResult,
    pub report_id: String,
    pub issued_on: NaiveDate,
}

impl DocumentContext<'_> {
    /// German short date, e.g. `05.03.2025`.
    pub fn issued_on_label(&self) -> String {
        self.issued_on.format("%d.%m.%Y").to_string()
    }
}

pub trait DocumentRenderer: Sync {
    fn title(&self) -> &'static str;

    /// A complete HTML document including the print toolbar.
    fn render(&self, ctx: &DocumentContext) -> Markup;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    AnalysisReport,
    DocumentChecklist,
    VisitChecklist,
    MailTemplates,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::AnalysisReport,
        DocumentKind::DocumentChecklist,
        DocumentKind::VisitChecklist,
        DocumentKind::MailTemplates,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            DocumentKind::AnalysisReport => "analysis",
            DocumentKind::DocumentChecklist => "documents",
            DocumentKind::VisitChecklist => "site-visit",
            DocumentKind::MailTemplates => "mail",
        }
    }

    pub fn button_title(self) -> &'static str {
        match self {
            DocumentKind::AnalysisReport => "Analysebericht",
            DocumentKind::DocumentChecklist | DocumentKind::VisitChecklist => "Checkliste",
            DocumentKind::MailTemplates => "Mustermail",
        }
    }

    pub fn button_text(self) -> &'static str {
        match self {
            DocumentKind::AnalysisReport => "Ausführliche Version zur Bankenvorlage",
            DocumentKind::DocumentChecklist => "Erforderliche Unterlagen für Ihr Objekt",
            DocumentKind::VisitChecklist => "Durchführung Ortsbesichtigung, Tipps & Tricks",
            DocumentKind::MailTemplates => "Unterlagenanforderung & Terminvereinbarung",
        }
    }

    pub fn renderer(self) -> &'static dyn DocumentRenderer {
        match self {
            DocumentKind::AnalysisReport => &AnalysisReport,
            DocumentKind::DocumentChecklist => &DocumentChecklist,
            DocumentKind::VisitChecklist => &VisitChecklist,
            DocumentKind::MailTemplates => &MailTemplates,
        }
    }
}

/// Brand line and title block shared by the single-sheet documents.
fn paper(title: &str, subtitle: &str, content: Markup) -> Markup {
    html! {
        div class="page-wrapper" {
            article class="paper" {
                div class="paper-brand" {
                    div { "PropertyMind Expose" span { "Check" } }
                    div class="badge" { "Premium Service" }
                }
                header class="paper-header" {
                    h1 { (title) }
                    p { (subtitle) }
                }
                (content)
            }
        }
    }
}

/// One checklist section. An item may carry a short note.
fn checklist(title: &str, items: &[(&str, Option<&str>)]) -> Markup {
    html! {
        section class="doc-section" {
            h2 class="doc-section-title" { (title) }
            ul class="checklist" {
                @for (text, note) in items {
                    li {
                        span class="checkbox" {}
                        span class="item-text" {
                            (text)
                            @if let Some(note) = note {
                                " " span class="item-note" { "(" (note) ")" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footnote(text: &str) -> Markup {
    html! {
        p class="doc-footnote" { (text) }
    }
}
