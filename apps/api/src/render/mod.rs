//! Rendering Pipeline — pure transformation from a document snapshot to the
//! ordered, printable section list.
//!
//! # Section rules
//! - Header is always emitted; the rest only when they have content.
//! - Order is fixed: Header, Summary, Experience, Projects, Education, Skills.
//! - Summary and bullets are dropped when blank after trimming. Bullets are
//!   filtered here and only here; the model keeps them so editing can resume
//!   on an unfinished line.
//! - Every other field is tested for emptiness as typed: an empty field falls
//!   back to a placeholder label, or is omitted for optional lines. A field
//!   holding only spaces counts as filled.
//! - The experience date range and the education graduation date are always
//!   present, even when empty.

pub mod text;

use serde::Serialize;

use crate::document::{Document, EducationEntry, EntityId, ExperienceEntry, ProjectEntry};

pub use text::render_text;

const NAME_PLACEHOLDER: &str = "Your Name";
const POSITION_PLACEHOLDER: &str = "Position";
const COMPANY_PLACEHOLDER: &str = "Company";
const PROJECT_NAME_PLACEHOLDER: &str = "Project Name";
const DEGREE_PLACEHOLDER: &str = "Degree";
const SCHOOL_PLACEHOLDER: &str = "School";

/// Separator between start and end date.
pub(crate) const DATE_RANGE_SEPARATOR: &str = " – ";

// ────────────────────────────────────────────────────────────────────────────
// View types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum Section {
    Header {
        name: String,
        contacts: Vec<String>,
    },
    Summary {
        text: String,
    },
    Experience {
        entries: Vec<ExperienceView>,
    },
    Projects {
        entries: Vec<ProjectView>,
    },
    Education {
        entries: Vec<EducationView>,
    },
    Skills {
        skills: Vec<String>,
    },
}

impl Section {
    /// Heading printed above the section body. The header has none.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Section::Header { .. } => None,
            Section::Summary { .. } => Some("Professional Summary"),
            Section::Experience { .. } => Some("Experience"),
            Section::Projects { .. } => Some("Projects"),
            Section::Education { .. } => Some("Education"),
            Section::Skills { .. } => Some("Skills"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub id: EntityId,
    pub position: String,
    pub company: String,
    pub date_range: String,
    pub location: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: EntityId,
    pub name: String,
    pub technologies: Option<String>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationView {
    pub id: EntityId,
    pub degree: String,
    pub school: String,
    pub gpa: Option<String>,
    pub graduation_date: String,
    pub location: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub fn render(doc: &Document) -> DocumentView {
    let mut sections = vec![render_header(doc)];

    if !is_blank(&doc.summary) {
        sections.push(Section::Summary {
            text: doc.summary.clone(),
        });
    }

    if !doc.experience.is_empty() {
        sections.push(Section::Experience {
            entries: doc.experience.iter().map(render_experience).collect(),
        });
    }

    if !doc.projects.is_empty() {
        sections.push(Section::Projects {
            entries: doc.projects.iter().map(render_project).collect(),
        });
    }

    if !doc.education.is_empty() {
        sections.push(Section::Education {
            entries: doc.education.iter().map(render_education).collect(),
        });
    }

    if !doc.skills.is_empty() {
        sections.push(Section::Skills {
            skills: doc.skills.clone(),
        });
    }

    DocumentView { sections }
}

fn render_header(doc: &Document) -> Section {
    let info = &doc.personal_info;
    let contacts = [
        &info.email,
        &info.phone,
        &info.location,
        &info.linkedin_url,
        &info.github_url,
    ]
    .into_iter()
    .filter_map(|field| non_empty(field))
    .collect();

    Section::Header {
        name: or_placeholder(&info.name, NAME_PLACEHOLDER),
        contacts,
    }
}

fn render_experience(entry: &ExperienceEntry) -> ExperienceView {
    ExperienceView {
        id: entry.id,
        position: or_placeholder(&entry.position, POSITION_PLACEHOLDER),
        company: or_placeholder(&entry.company, COMPANY_PLACEHOLDER),
        date_range: date_range(&entry.start_date, &entry.end_date),
        location: non_empty(&entry.location),
        bullets: visible_bullets(&entry.bullets),
    }
}

fn render_project(entry: &ProjectEntry) -> ProjectView {
    ProjectView {
        id: entry.id,
        name: or_placeholder(&entry.name, PROJECT_NAME_PLACEHOLDER),
        technologies: non_empty(&entry.technologies).map(|t| format!("Technologies: {t}")),
        description: non_empty(&entry.description),
        bullets: visible_bullets(&entry.bullets),
    }
}

fn render_education(entry: &EducationEntry) -> EducationView {
    EducationView {
        id: entry.id,
        degree: or_placeholder(&entry.degree, DEGREE_PLACEHOLDER),
        school: or_placeholder(&entry.school, SCHOOL_PLACEHOLDER),
        gpa: non_empty(&entry.gpa).map(|g| format!("GPA: {g}")),
        graduation_date: entry.graduation_date.clone(),
        location: non_empty(&entry.location),
    }
}

/// `start – end`, with either end possibly empty.
fn date_range(start: &str, end: &str) -> String {
    format!("{start}{DATE_RANGE_SEPARATOR}{end}")
}

fn visible_bullets(bullets: &[String]) -> Vec<String> {
    bullets.iter().filter(|b| !is_blank(b)).cloned().collect()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    non_empty(text).unwrap_or_else(|| placeholder.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ids::IdAllocator;
    use crate::document::{BulletKind, EntryKind};

    fn titles(view: &DocumentView) -> Vec<Option<&'static str>> {
        view.sections.iter().map(Section::title).collect()
    }

    #[test]
    fn test_empty_document_renders_only_header() {
        let view = render(&Document::default());
        assert_eq!(
            view.sections,
            vec![Section::Header {
                name: "Your Name".to_string(),
                contacts: vec![],
            }]
        );
    }

    #[test]
    fn test_blank_summary_is_suppressed() {
        let doc = Document::default().update_summary("   \n ");
        assert_eq!(render(&doc).sections.len(), 1);
    }

    #[test]
    fn test_summary_is_verbatim() {
        let doc = Document::default().update_summary("  Systems engineer. ");
        let view = render(&doc);
        assert_eq!(
            view.sections[1],
            Section::Summary {
                text: "  Systems engineer. ".to_string()
            }
        );
    }

    #[test]
    fn test_header_contacts_fixed_order_skip_empty() {
        let doc = Document::default()
            .update_personal_info("github", "github.com/ada")
            .update_personal_info("email", "ada@example.com")
            .update_personal_info("phone", "")
            .update_personal_info("name", "Ada");
        let view = render(&doc);
        assert_eq!(
            view.sections[0],
            Section::Header {
                name: "Ada".to_string(),
                contacts: vec!["ada@example.com".to_string(), "github.com/ada".to_string()],
            }
        );
    }

    #[test]
    fn test_blank_bullets_filtered_at_render_only() {
        let ids = IdAllocator::new();
        let id = ids.allocate();
        let doc = Document::default().add_entry(EntryKind::Experience, id);
        let doc = doc.set_bullets(
            BulletKind::Experience,
            id,
            vec!["".into(), "Built X".into(), "  ".into()],
        );

        let view = render(&doc);
        let Section::Experience { entries } = &view.sections[1] else {
            panic!("expected experience section, got {:?}", view.sections[1]);
        };
        assert_eq!(entries[0].bullets, vec!["Built X".to_string()]);
        assert_eq!(doc.experience[0].bullets.len(), 3);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let ids = IdAllocator::new();
        let doc = Document::default().add_skill("Rust");
        let doc = doc.add_entry(EntryKind::Education, ids.allocate());
        let doc = doc.add_entry(EntryKind::Project, ids.allocate());
        let doc = doc.add_entry(EntryKind::Experience, ids.allocate());
        let doc = doc.update_summary("Summary");

        assert_eq!(
            titles(&render(&doc)),
            vec![
                None,
                Some("Professional Summary"),
                Some("Experience"),
                Some("Projects"),
                Some("Education"),
                Some("Skills"),
            ]
        );
    }

    #[test]
    fn test_placeholders_for_blank_entries() {
        let ids = IdAllocator::new();
        let doc = Document::default().add_entry(EntryKind::Experience, ids.allocate());
        let doc = doc.add_entry(EntryKind::Project, ids.allocate());
        let doc = doc.add_entry(EntryKind::Education, ids.allocate());
        let view = render(&doc);

        let Section::Experience { entries } = &view.sections[1] else {
            panic!("expected experience");
        };
        assert_eq!(entries[0].position, "Position");
        assert_eq!(entries[0].company, "Company");
        assert_eq!(entries[0].date_range, " – ");
        assert_eq!(entries[0].location, None);
        assert!(entries[0].bullets.is_empty());

        let Section::Projects { entries } = &view.sections[2] else {
            panic!("expected projects");
        };
        assert_eq!(entries[0].name, "Project Name");
        assert_eq!(entries[0].technologies, None);

        let Section::Education { entries } = &view.sections[3] else {
            panic!("expected education");
        };
        assert_eq!(entries[0].degree, "Degree");
        assert_eq!(entries[0].school, "School");
        assert_eq!(entries[0].gpa, None);
        assert_eq!(entries[0].graduation_date, "");
        assert_eq!(entries[0].location, None);
    }

    #[test]
    fn test_optional_lines_when_present() {
        let ids = IdAllocator::new();
        let edu = ids.allocate();
        let doc = Document::default().add_entry(EntryKind::Education, edu);
        let proj = ids.allocate();
        let doc = doc.add_entry(EntryKind::Project, proj);
        let doc = doc
            .update_field(EntryKind::Education, edu, "gpa", "3.8")
            .update_field(EntryKind::Education, edu, "graduationDate", "May 2020")
            .update_field(EntryKind::Project, proj, "technologies", "Rust, Tokio")
            .update_field(EntryKind::Project, proj, "description", "A scheduler");
        let view = render(&doc);

        let Section::Projects { entries } = &view.sections[1] else {
            panic!("expected projects");
        };
        assert_eq!(entries[0].technologies.as_deref(), Some("Technologies: Rust, Tokio"));
        assert_eq!(entries[0].description.as_deref(), Some("A scheduler"));

        let Section::Education { entries } = &view.sections[2] else {
            panic!("expected education");
        };
        assert_eq!(entries[0].gpa.as_deref(), Some("GPA: 3.8"));
        assert_eq!(entries[0].graduation_date, "May 2020");
    }

    #[test]
    fn test_date_range_always_rendered() {
        assert_eq!(date_range("Jan 2021", ""), "Jan 2021 – ");
        assert_eq!(date_range("2019", "2021"), "2019 – 2021");
        assert_eq!(date_range("", ""), " – ");
    }

    #[test]
    fn test_whitespace_fields_count_as_filled() {
        let ids = IdAllocator::new();
        let id = ids.allocate();
        let doc = Document::default()
            .update_personal_info("name", "  ")
            .update_personal_info("phone", " ")
            .add_entry(EntryKind::Education, id)
            .update_field(EntryKind::Education, id, "gpa", " ");
        let view = render(&doc);

        assert_eq!(
            view.sections[0],
            Section::Header {
                name: "  ".to_string(),
                contacts: vec![" ".to_string()],
            }
        );
        let Section::Education { entries } = &view.sections[1] else {
            panic!("expected education");
        };
        assert_eq!(entries[0].gpa.as_deref(), Some("GPA:  "));
    }

    #[test]
    fn test_end_to_end_add_update_set_bullets() {
        let ids = IdAllocator::new();
        let id = ids.allocate();
        let doc = Document::default().add_entry(EntryKind::Experience, id);
        let doc = doc.update_field(EntryKind::Experience, id, "company", "Acme");
        let doc = doc.set_bullets(BulletKind::Experience, id, vec!["Shipped feature A".into()]);

        let view = render(&doc);
        let Section::Experience { entries } = &view.sections[1] else {
            panic!("expected experience section");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Acme");
        assert_eq!(entries[0].position, "Position");
        assert_eq!(entries[0].bullets, vec!["Shipped feature A".to_string()]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = Document::default()
            .update_personal_info("name", "Ada")
            .add_skill("Rust")
            .add_skill("Go");
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_view_serializes_with_section_tag() {
        let json = serde_json::to_value(render(&Document::default().add_skill("Rust"))).unwrap();
        assert_eq!(json["sections"][0]["section"], "header");
        assert_eq!(json["sections"][1]["section"], "skills");
        assert_eq!(json["sections"][1]["skills"][0], "Rust");
    }
}
