//! # Content Document Types
//!
//! The shapes of everything editable on the public site. The aggregate root
//! is [`PortfolioDocument`]; it is persisted whole under one key, so every
//! type here is a plain serde document with camelCase wire names.
//!
//! Partial updates happen at the in-memory API boundary only: each editable
//! section has a `*Patch` type whose `Some` fields replace the current value
//! and whose `None` fields leave it untouched. At the storage boundary the
//! document is always written wholesale.

use serde::{Deserialize, Serialize};

// ============================================================================
// AGGREGATE ROOT
// ============================================================================

/// Everything the admin panel can edit, persisted whole under one key.
///
/// Exactly one document exists per storage area. When no document is
/// present the content store seeds the sample content from
/// [`defaults`](super::defaults) so the site never renders empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    /// Landing section headline content
    pub hero: HeroData,
    /// Biography and credentials
    pub about: AboutData,
    /// Project cards
    pub projects: Vec<Project>,
    /// Interactive dashboard cards
    pub dashboards: Vec<Dashboard>,
    /// Footer / contact section details
    pub contact_info: ContactInfo,
}

// ============================================================================
// HERO
// ============================================================================

/// Landing section headline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    /// Main headline
    pub title: String,
    /// Kicker line shown above the headline
    pub subtitle: String,
    /// Supporting paragraph
    pub description: String,
}

/// Partial update for [`HeroData`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroPatch {
    /// New headline, if changing
    pub title: Option<String>,
    /// New kicker line, if changing
    pub subtitle: Option<String>,
    /// New supporting paragraph, if changing
    pub description: Option<String>,
}

impl HeroPatch {
    pub(crate) fn apply(self, hero: &mut HeroData) {
        if let Some(title) = self.title {
            hero.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            hero.subtitle = subtitle;
        }
        if let Some(description) = self.description {
            hero.description = description;
        }
    }
}

// ============================================================================
// ABOUT
// ============================================================================

/// Biography and credentials shown in the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    /// Academic background line
    pub background: String,
    /// Years of experience, as displayed (e.g. "5+")
    pub years_of_experience: String,
    /// Industries worked in
    pub industries: String,
    /// Degree level
    pub degree: String,
    /// Degree field
    pub field: String,
    /// Granting institution
    pub university: String,
    /// Certification list, comma separated as displayed
    pub certifications: String,
    /// Headshot image URL (may be overridden by an uploaded asset)
    pub headshot: String,
    /// Free-form journey paragraph
    pub journey: String,
    /// Extra admin-authored sections
    #[serde(default)]
    pub sections: Vec<CustomSection>,
    /// Placement tuning for the headshot image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot_settings: Option<HeadshotSettings>,
}

/// Partial update for the plain-text fields of [`AboutData`].
///
/// Sections and headshot settings have their own operations on the content
/// store; a patch never touches them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct AboutPatch {
    pub background: Option<String>,
    pub years_of_experience: Option<String>,
    pub industries: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub university: Option<String>,
    pub certifications: Option<String>,
    pub headshot: Option<String>,
    pub journey: Option<String>,
}

impl AboutPatch {
    pub(crate) fn apply(self, about: &mut AboutData) {
        if let Some(v) = self.background {
            about.background = v;
        }
        if let Some(v) = self.years_of_experience {
            about.years_of_experience = v;
        }
        if let Some(v) = self.industries {
            about.industries = v;
        }
        if let Some(v) = self.degree {
            about.degree = v;
        }
        if let Some(v) = self.field {
            about.field = v;
        }
        if let Some(v) = self.university {
            about.university = v;
        }
        if let Some(v) = self.certifications {
            about.certifications = v;
        }
        if let Some(v) = self.headshot {
            about.headshot = v;
        }
        if let Some(v) = self.journey {
            about.journey = v;
        }
    }
}

/// How a custom about section renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Plain paragraph
    #[default]
    Text,
    /// Pull quote
    Quote,
    /// Emphasized callout box
    Highlight,
    /// Bulleted list (one item per line of content)
    List,
}

/// An admin-authored section appended to the about page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    /// Locally generated identifier
    pub id: String,
    /// Section heading
    pub title: String,
    /// Body text; for [`SectionKind::List`], one item per line
    pub content: String,
    /// Rendering style
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
}

/// Placement tuning for the headshot image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadshotSettings {
    /// Image URL these settings apply to
    pub url: String,
    /// Focal point within the frame
    pub position: HeadshotPosition,
    /// Width over height of the crop frame
    pub aspect_ratio: f32,
    /// Let the renderer fit the image automatically, ignoring position
    pub auto_fit: bool,
}

/// Focal point of the headshot crop, in percent of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadshotPosition {
    /// Horizontal focal point, in percent from the left edge
    pub x: f32,
    /// Vertical focal point, in percent from the top edge
    pub y: f32,
}

// ============================================================================
// PROJECTS
// ============================================================================

/// One project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Locally assigned identifier, unique within the document
    pub id: u32,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
    /// Tool/technique tags, in display order
    pub tags: Vec<String>,
    /// Cover image URL (may be overridden by an uploaded asset)
    pub image: String,
    /// Live demo link
    pub demo_link: String,
    /// Source code link
    pub code_link: String,
    /// Soft-delete flag; hidden cards stay in the document
    pub is_hidden: bool,
}

/// Fields the admin supplies when creating a project; id and visibility are
/// assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub code_link: String,
}

/// Partial update for [`Project`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub is_hidden: Option<bool>,
}

impl ProjectPatch {
    pub(crate) fn apply(self, project: &mut Project) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.tags {
            project.tags = v;
        }
        if let Some(v) = self.image {
            project.image = v;
        }
        if let Some(v) = self.demo_link {
            project.demo_link = v;
        }
        if let Some(v) = self.code_link {
            project.code_link = v;
        }
        if let Some(v) = self.is_hidden {
            project.is_hidden = v;
        }
    }
}

// ============================================================================
// DASHBOARDS
// ============================================================================

/// One interactive dashboard card. A project card plus the visualization
/// tool it was built with and a featured flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Locally assigned identifier, unique within the document
    pub id: u32,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
    /// Tool/technique tags, in display order
    pub tags: Vec<String>,
    /// Cover image URL (may be overridden by an uploaded asset)
    pub image: String,
    /// Live demo link
    pub demo_link: String,
    /// Source code link
    pub code_link: String,
    /// Visualization tool the dashboard was built with
    #[serde(rename = "type")]
    pub tool: String,
    /// Shown enlarged at the top of the dashboards section. Intended to be
    /// true for at most one dashboard; use
    /// [`feature_dashboard`](super::ContentStore::feature_dashboard) to keep
    /// it that way.
    #[serde(default)]
    pub featured: bool,
    /// Soft-delete flag; hidden cards stay in the document
    pub is_hidden: bool,
}

/// Fields the admin supplies when creating a dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct DashboardDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub code_link: String,
    #[serde(rename = "type")]
    pub tool: String,
}

/// Partial update for [`Dashboard`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct DashboardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    #[serde(rename = "type")]
    pub tool: Option<String>,
    pub featured: Option<bool>,
    pub is_hidden: Option<bool>,
}

impl DashboardPatch {
    pub(crate) fn apply(self, dashboard: &mut Dashboard) {
        if let Some(v) = self.title {
            dashboard.title = v;
        }
        if let Some(v) = self.description {
            dashboard.description = v;
        }
        if let Some(v) = self.tags {
            dashboard.tags = v;
        }
        if let Some(v) = self.image {
            dashboard.image = v;
        }
        if let Some(v) = self.demo_link {
            dashboard.demo_link = v;
        }
        if let Some(v) = self.code_link {
            dashboard.code_link = v;
        }
        if let Some(v) = self.tool {
            dashboard.tool = v;
        }
        if let Some(v) = self.featured {
            dashboard.featured = v;
        }
        if let Some(v) = self.is_hidden {
            dashboard.is_hidden = v;
        }
    }
}

// ============================================================================
// CONTACT
// ============================================================================

/// Footer / contact section details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Public contact address
    pub email: String,
    /// Display phone number
    pub phone: String,
    /// Display location line
    pub location: String,
    /// LinkedIn profile link
    pub linkedin_url: String,
    /// GitHub profile link
    pub github_url: String,
}

/// Partial update for [`ContactInfo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl ContactPatch {
    pub(crate) fn apply(self, contact: &mut ContactInfo) {
        if let Some(v) = self.email {
            contact.email = v;
        }
        if let Some(v) = self.phone {
            contact.phone = v;
        }
        if let Some(v) = self.location {
            contact.location = v;
        }
        if let Some(v) = self.linkedin_url {
            contact.linkedin_url = v;
        }
        if let Some(v) = self.github_url {
            contact.github_url = v;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let doc = crate::content::defaults::default_document();
        let json = serde_json::to_string(&doc).unwrap();

        assert!(json.contains("\"contactInfo\""));
        assert!(json.contains("\"demoLink\""));
        assert!(json.contains("\"isHidden\""));
        assert!(json.contains("\"yearsOfExperience\""));
        // Dashboard tool name serializes under its historical wire name
        assert!(json.contains("\"type\""));
    }

    #[test]
    fn test_section_kind_wire_format() {
        let section = CustomSection {
            id: "s1".into(),
            title: "Publications".into(),
            content: "one\ntwo".into(),
            kind: SectionKind::List,
        };
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"type\":\"list\""));

        let parsed: CustomSection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, SectionKind::List);
    }

    #[test]
    fn test_section_kind_defaults_to_text() {
        // Entries written before the kind field existed must still parse
        let parsed: CustomSection =
            serde_json::from_str(r#"{"id":"s1","title":"Note","content":"hi"}"#).unwrap();
        assert_eq!(parsed.kind, SectionKind::Text);
    }

    #[test]
    fn test_patch_leaves_other_fields_untouched() {
        let mut project = Project {
            id: 7,
            title: "Original".into(),
            description: "Body".into(),
            tags: vec!["SQL".into()],
            image: "img".into(),
            demo_link: "#demo".into(),
            code_link: "#code".into(),
            is_hidden: false,
        };
        let before = project.clone();

        ProjectPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.title, "Renamed");
        assert_eq!(project.description, before.description);
        assert_eq!(project.tags, before.tags);
        assert_eq!(project.image, before.image);
        assert_eq!(project.demo_link, before.demo_link);
        assert_eq!(project.code_link, before.code_link);
        assert_eq!(project.is_hidden, before.is_hidden);
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = crate::content::defaults::default_document();
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: PortfolioDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
