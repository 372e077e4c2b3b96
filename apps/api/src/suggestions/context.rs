use serde::Serialize;

use crate::document::{BulletKind, Document, EntityId};
use crate::suggestions::prompts::{EXPERIENCE_HINT, PROJECT_HINT};

/// The `context` object sent to the suggestion service: a subset of the
/// entry's own fields plus a free-text hint under `context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SuggestionContext {
    Experience {
        company: String,
        position: String,
        context: String,
    },
    Project {
        name: String,
        technologies: String,
        description: String,
        context: String,
    },
}

impl SuggestionContext {
    /// Builds the context from the entry as it is in `doc` right now.
    /// Returns `None` if the entry does not exist. A blank `hint` falls back to
    /// the default hint for the kind.
    pub fn from_document(
        doc: &Document,
        kind: BulletKind,
        id: EntityId,
        hint: Option<&str>,
    ) -> Option<Self> {
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());
        match kind {
            BulletKind::Experience => {
                let entry = doc.experience.iter().find(|e| e.id == id)?;
                Some(SuggestionContext::Experience {
                    company: entry.company.clone(),
                    position: entry.position.clone(),
                    context: hint.unwrap_or(EXPERIENCE_HINT).to_string(),
                })
            }
            BulletKind::Project => {
                let entry = doc.projects.iter().find(|e| e.id == id)?;
                Some(SuggestionContext::Project {
                    name: entry.name.clone(),
                    technologies: entry.technologies.clone(),
                    description: entry.description.clone(),
                    context: hint.unwrap_or(PROJECT_HINT).to_string(),
                })
            }
        }
    }

    pub fn kind(&self) -> BulletKind {
        match self {
            SuggestionContext::Experience { .. } => BulletKind::Experience,
            SuggestionContext::Project { .. } => BulletKind::Project,
        }
    }
}
