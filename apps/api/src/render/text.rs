//! Plain-text export of a rendered view, suitable for printing or pasting.

use std::fmt::Write;

use crate::render::{
    DocumentView, EducationView, ExperienceView, ProjectView, Section, DATE_RANGE_SEPARATOR,
};

const BULLET: &str = "• ";
const CONTACT_SEPARATOR: &str = " | ";

/// Writes the view as plain text. Sections are separated by one blank line;
/// entries inside a section by one blank line as well. A date range with both
/// ends empty and an empty graduation date are left off the page.
pub fn render_text(view: &DocumentView) -> String {
    let blocks: Vec<String> = view.sections.iter().map(render_section).collect();
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn render_section(section: &Section) -> String {
    let mut out = String::new();
    if let Some(title) = section.title() {
        out.push_str(&title.to_uppercase());
        out.push('\n');
    }

    match section {
        Section::Header { name, contacts } => {
            out.push_str(name);
            if !contacts.is_empty() {
                out.push('\n');
                out.push_str(&contacts.join(CONTACT_SEPARATOR));
            }
        }
        Section::Summary { text } => out.push_str(text.trim()),
        Section::Experience { entries } => {
            out.push_str(&join_entries(entries.iter().map(experience_block)));
        }
        Section::Projects { entries } => {
            out.push_str(&join_entries(entries.iter().map(project_block)));
        }
        Section::Education { entries } => {
            out.push_str(&join_entries(entries.iter().map(education_block)));
        }
        Section::Skills { skills } => out.push_str(&skills.join(", ")),
    }
    out
}

fn join_entries(blocks: impl Iterator<Item = String>) -> String {
    blocks.collect::<Vec<_>>().join("\n\n")
}

fn experience_block(entry: &ExperienceView) -> String {
    let mut lines = vec![format!("{}, {}", entry.position, entry.company)];
    let dates = (entry.date_range != DATE_RANGE_SEPARATOR).then_some(entry.date_range.as_str());
    let meta: Vec<&str> = [dates, entry.location.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !meta.is_empty() {
        lines.push(meta.join(CONTACT_SEPARATOR));
    }
    push_bullets(&mut lines, &entry.bullets);
    lines.join("\n")
}

fn project_block(entry: &ProjectView) -> String {
    let mut lines = vec![entry.name.clone()];
    lines.extend(entry.technologies.iter().cloned());
    lines.extend(entry.description.iter().cloned());
    push_bullets(&mut lines, &entry.bullets);
    lines.join("\n")
}

fn education_block(entry: &EducationView) -> String {
    let mut out = format!("{}, {}", entry.degree, entry.school);
    let graduation = (!entry.graduation_date.is_empty()).then(|| entry.graduation_date.clone());
    for line in [&entry.gpa, &graduation, &entry.location]
        .into_iter()
        .flatten()
    {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n{line}");
    }
    out
}

fn push_bullets(lines: &mut Vec<String>, bullets: &[String]) {
    lines.extend(bullets.iter().map(|b| format!("{BULLET}{}", b.trim())));
}
