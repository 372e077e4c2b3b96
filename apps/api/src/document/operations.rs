//! Mutation operations on the résumé document.
//!
//! Every operation is a total function `(&Document, args) -> Document`. Unknown
//! ids, unknown field names and out-of-range bullet indices degrade to no-ops
//! that return a value equal to the input. Nothing here panics or errors.

use crate::document::ids::EntityId;
use crate::document::models::{
    BulletKind, Document, EducationEntry, EducationField, EntryKind, ExperienceEntry,
    ExperienceField, PersonalInfoField, ProjectEntry, ProjectField,
};

trait Entity {
    fn id(&self) -> EntityId;
}

trait Bulleted: Entity {
    fn bullets(&self) -> &[String];
    fn bullets_mut(&mut self) -> &mut Vec<String>;
}

impl Entity for ExperienceEntry {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for EducationEntry {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for ProjectEntry {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Bulleted for ExperienceEntry {
    fn bullets(&self) -> &[String] {
        &self.bullets
    }

    fn bullets_mut(&mut self) -> &mut Vec<String> {
        &mut self.bullets
    }
}

impl Bulleted for ProjectEntry {
    fn bullets(&self) -> &[String] {
        &self.bullets
    }

    fn bullets_mut(&mut self) -> &mut Vec<String> {
        &mut self.bullets
    }
}

/// Copies `doc` and applies `edit` to the entry with `id` in the list chosen by
/// `select`. If no entry matches, the copy is returned untouched.
fn edit_entry<T, S, E>(doc: &Document, select: S, id: EntityId, edit: E) -> Document
where
    T: Entity,
    S: Fn(&mut Document) -> &mut Vec<T>,
    E: FnOnce(&mut T),
{
    let mut next = doc.clone();
    if let Some(entry) = select(&mut next).iter_mut().find(|e| e.id() == id) {
        edit(entry);
    }
    next
}

fn remove_from<T: Entity>(entries: &mut Vec<T>, id: EntityId) {
    entries.retain(|e| e.id() != id);
}

impl Document {
    // ── Entries ────────────────────────────────────────────────────────────

    /// Appends a new entry with default field values under `id`, which must
    /// come from an `IdAllocator`.
    pub fn add_entry(&self, kind: EntryKind, id: EntityId) -> Document {
        let mut next = self.clone();
        match kind {
            EntryKind::Experience => next.experience.push(ExperienceEntry::new(id)),
            EntryKind::Education => next.education.push(EducationEntry::new(id)),
            EntryKind::Project => next.projects.push(ProjectEntry::new(id)),
        }
        next
    }

    pub fn update_field(&self, kind: EntryKind, id: EntityId, field: &str, value: &str) -> Document {
        let value = value.to_string();
        match kind {
            EntryKind::Experience => {
                let Some(field) = ExperienceField::parse(field) else {
                    return self.clone();
                };
                edit_entry(self, |d| &mut d.experience, id, |e: &mut ExperienceEntry| {
                    let slot = match field {
                        ExperienceField::Company => &mut e.company,
                        ExperienceField::Position => &mut e.position,
                        ExperienceField::StartDate => &mut e.start_date,
                        ExperienceField::EndDate => &mut e.end_date,
                        ExperienceField::Location => &mut e.location,
                    };
                    *slot = value;
                })
            }
            EntryKind::Education => {
                let Some(field) = EducationField::parse(field) else {
                    return self.clone();
                };
                edit_entry(self, |d| &mut d.education, id, |e: &mut EducationEntry| {
                    let slot = match field {
                        EducationField::School => &mut e.school,
                        EducationField::Degree => &mut e.degree,
                        EducationField::GraduationDate => &mut e.graduation_date,
                        EducationField::Gpa => &mut e.gpa,
                        EducationField::Location => &mut e.location,
                    };
                    *slot = value;
                })
            }
            EntryKind::Project => {
                let Some(field) = ProjectField::parse(field) else {
                    return self.clone();
                };
                edit_entry(self, |d| &mut d.projects, id, |e: &mut ProjectEntry| {
                    let slot = match field {
                        ProjectField::Name => &mut e.name,
                        ProjectField::Description => &mut e.description,
                        ProjectField::Technologies => &mut e.technologies,
                    };
                    *slot = value;
                })
            }
        }
    }

    /// Removes the entry with `id`. The id is never handed out again.
    pub fn remove_entry(&self, kind: EntryKind, id: EntityId) -> Document {
        let mut next = self.clone();
        match kind {
            EntryKind::Experience => remove_from(&mut next.experience, id),
            EntryKind::Education => remove_from(&mut next.education, id),
            EntryKind::Project => remove_from(&mut next.projects, id),
        }
        next
    }

    pub fn contains(&self, kind: EntryKind, id: EntityId) -> bool {
        match kind {
            EntryKind::Experience => self.experience.iter().any(|e| e.id == id),
            EntryKind::Education => self.education.iter().any(|e| e.id == id),
            EntryKind::Project => self.projects.iter().any(|e| e.id == id),
        }
    }

    // ── Bullets ────────────────────────────────────────────────────────────

    pub fn bullets(&self, kind: BulletKind, id: EntityId) -> Option<&[String]> {
        match kind {
            BulletKind::Experience => find_bullets(&self.experience, id),
            BulletKind::Project => find_bullets(&self.projects, id),
        }
    }

    /// Replaces the entry's whole bullet list. Suggestions and manual edits
    /// both land here.
    pub fn set_bullets(&self, kind: BulletKind, id: EntityId, bullets: Vec<String>) -> Document {
        match kind {
            BulletKind::Experience => edit_entry(self, |d| &mut d.experience, id, |e: &mut ExperienceEntry| {
                *e.bullets_mut() = bullets;
            }),
            BulletKind::Project => edit_entry(self, |d| &mut d.projects, id, |e: &mut ProjectEntry| {
                *e.bullets_mut() = bullets;
            }),
        }
    }

    /// Appends a blank bullet line.
    pub fn append_bullet(&self, kind: BulletKind, id: EntityId) -> Document {
        let Some(current) = self.bullets(kind, id) else {
            return self.clone();
        };
        let mut bullets = current.to_vec();
        bullets.push(String::new());
        self.set_bullets(kind, id, bullets)
    }

    pub fn update_bullet(&self, kind: BulletKind, id: EntityId, index: usize, value: &str) -> Document {
        let Some(current) = self.bullets(kind, id) else {
            return self.clone();
        };
        if index >= current.len() {
            return self.clone();
        }
        let mut bullets = current.to_vec();
        bullets[index] = value.to_string();
        self.set_bullets(kind, id, bullets)
    }

    pub fn remove_bullet(&self, kind: BulletKind, id: EntityId, index: usize) -> Document {
        let Some(current) = self.bullets(kind, id) else {
            return self.clone();
        };
        if index >= current.len() {
            return self.clone();
        }
        let mut bullets = current.to_vec();
        bullets.remove(index);
        self.set_bullets(kind, id, bullets)
    }

    // ── Skills ─────────────────────────────────────────────────────────────

    /// Adds the trimmed skill unless it is empty or already present
    /// (case-sensitive).
    pub fn add_skill(&self, raw: &str) -> Document {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return self.clone();
        }
        let mut next = self.clone();
        next.skills.push(skill.to_string());
        next
    }

    pub fn remove_skill(&self, value: &str) -> Document {
        let mut next = self.clone();
        next.skills.retain(|s| s != value);
        next
    }

    // ── Personal info & summary ────────────────────────────────────────────

    pub fn update_personal_info(&self, field: &str, value: &str) -> Document {
        let mut next = self.clone();
        let Some(field) = PersonalInfoField::parse(field) else {
            return next;
        };
        let info = &mut next.personal_info;
        let slot = match field {
            PersonalInfoField::Name => &mut info.name,
            PersonalInfoField::Email => &mut info.email,
            PersonalInfoField::Phone => &mut info.phone,
            PersonalInfoField::Location => &mut info.location,
            PersonalInfoField::LinkedinUrl => &mut info.linkedin_url,
            PersonalInfoField::GithubUrl => &mut info.github_url,
        };
        *slot = value.to_string();
        next
    }

    pub fn update_summary(&self, value: &str) -> Document {
        let mut next = self.clone();
        next.summary = value.to_string();
        next
    }
}

fn find_bullets<T: Bulleted>(entries: &[T], id: EntityId) -> Option<&[String]> {
    entries.iter().find(|e| e.id() == id).map(|e| e.bullets())
}
