use serde::{Deserialize, Serialize};

use crate::document::ids::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Experience,
    Education,
    Project,
}

/// The entry kinds that carry a bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletKind {
    Experience,
    Project,
}

impl BulletKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BulletKind::Experience => "experience",
            BulletKind::Project => "project",
        }
    }
}

impl From<BulletKind> for EntryKind {
    fn from(kind: BulletKind) -> Self {
        match kind {
            BulletKind::Experience => EntryKind::Experience,
            BulletKind::Project => EntryKind::Project,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntityId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            location: String::new(),
            bullets: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntityId,
    pub school: String,
    pub degree: String,
    pub graduation_date: String,
    pub gpa: String,
    pub location: String,
}

impl EducationEntry {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            school: String::new(),
            degree: String::new(),
            graduation_date: String::new(),
            gpa: String::new(),
            location: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub bullets: Vec<String>,
}

impl ProjectEntry {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            technologies: String::new(),
            bullets: vec![String::new()],
        }
    }
}

/// The whole résumé for one editing session.
///
/// Values are never mutated in place once published: every operation in
/// `document::operations` returns a fresh `Document`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Insertion-ordered set: trimmed, non-empty, no duplicates.
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Field names accepted by the update operations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalInfoField {
    Name,
    Email,
    Phone,
    Location,
    LinkedinUrl,
    GithubUrl,
}

impl PersonalInfoField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "location" => Some(Self::Location),
            "linkedinUrl" | "linkedin" => Some(Self::LinkedinUrl),
            "githubUrl" | "github" => Some(Self::GithubUrl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Location,
}

impl ExperienceField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "company" => Some(Self::Company),
            "position" => Some(Self::Position),
            "startDate" => Some(Self::StartDate),
            "endDate" => Some(Self::EndDate),
            "location" => Some(Self::Location),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    GraduationDate,
    Gpa,
    Location,
}

impl EducationField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "school" => Some(Self::School),
            "degree" => Some(Self::Degree),
            "graduationDate" => Some(Self::GraduationDate),
            "gpa" => Some(Self::Gpa),
            "location" => Some(Self::Location),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    Technologies,
}

impl ProjectField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "technologies" => Some(Self::Technologies),
            _ => None,
        }
    }
}
