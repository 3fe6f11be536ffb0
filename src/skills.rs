//! # Skills Store
//!
//! The skill list shown as grouped progress bars. Ordering within a
//! category is significant and is adjusted with explicit up/down reorder
//! operations; categories themselves are derived from the skills, in first
//! appearance order.
//!
//! Icons are a closed set resolved through [`SkillIcon`] rather than free
//! strings: the persisted name of an icon that no longer exists falls back
//! to the default instead of breaking rendering.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore};

/// The icon registry for skill rows.
///
/// Serialized by name; unknown names deserialize to the default so the list
/// keeps rendering after an icon is renamed or removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[allow(missing_docs)]
pub enum SkillIcon {
    #[default]
    Database,
    Table,
    Activity,
    BarChart4,
    LineChart,
    Code,
    FileCode,
    Server,
    Cpu,
    Layers,
    GitBranch,
    Terminal,
    Python,
}

impl SkillIcon {
    /// Every registered icon, in display order for pickers.
    pub const ALL: &'static [SkillIcon] = &[
        SkillIcon::Database,
        SkillIcon::Table,
        SkillIcon::Activity,
        SkillIcon::BarChart4,
        SkillIcon::LineChart,
        SkillIcon::Code,
        SkillIcon::FileCode,
        SkillIcon::Server,
        SkillIcon::Cpu,
        SkillIcon::Layers,
        SkillIcon::GitBranch,
        SkillIcon::Terminal,
        SkillIcon::Python,
    ];

    /// The persisted name, which is also the renderer lookup key.
    pub fn name(self) -> &'static str {
        match self {
            SkillIcon::Database => "Database",
            SkillIcon::Table => "Table",
            SkillIcon::Activity => "Activity",
            SkillIcon::BarChart4 => "BarChart4",
            SkillIcon::LineChart => "LineChart",
            SkillIcon::Code => "Code",
            SkillIcon::FileCode => "FileCode",
            SkillIcon::Server => "Server",
            SkillIcon::Cpu => "Cpu",
            SkillIcon::Layers => "Layers",
            SkillIcon::GitBranch => "GitBranch",
            SkillIcon::Terminal => "Terminal",
            SkillIcon::Python => "PythonIcon",
        }
    }

    /// Resolve a persisted name; unknown names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == name)
            .unwrap_or_default()
    }
}

impl From<String> for SkillIcon {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<SkillIcon> for String {
    fn from(icon: SkillIcon) -> Self {
        icon.name().to_string()
    }
}

/// One skill row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Locally generated identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Proficiency, 0-100
    pub level: u8,
    /// Icon shown next to the name
    pub icon: SkillIcon,
    /// Grouping header the skill renders under
    pub category: String,
}

/// Fields supplied when creating a skill; the id is assigned by the store.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct SkillDraft {
    pub name: String,
    pub level: u8,
    pub icon: SkillIcon,
    pub category: String,
}

/// Partial update for [`Skill`].
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
    pub icon: Option<SkillIcon>,
    pub category: Option<String>,
}

/// Which way a reorder moves a skill within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the front of the category
    Up,
    /// Toward the back of the category
    Down,
}

/// Store for the skill list.
pub struct SkillsStore {
    kv: KeyValueStore,
    slice: RwLock<Option<Vec<Skill>>>,
}

impl SkillsStore {
    /// Create a skills store over the given storage handle.
    pub fn new(kv: KeyValueStore) -> Self {
        Self {
            kv,
            slice: RwLock::new(None),
        }
    }

    fn with_slice<R>(&self, f: impl FnOnce(&mut Vec<Skill>) -> R) -> R {
        let mut guard = self.slice.write();
        let slice = guard.get_or_insert_with(|| {
            self.kv
                .get(keys::SKILLS)
                .unwrap_or_else(default_skills)
        });
        f(slice)
    }

    fn persist(&self, slice: &[Skill]) {
        if let Err(e) = self.kv.set(keys::SKILLS, &slice) {
            tracing::warn!(error = %e, "unable to persist skills");
        }
    }

    /// Every skill, in display order.
    pub fn skills(&self) -> Vec<Skill> {
        self.with_slice(|slice| slice.clone())
    }

    /// Category headers, deduplicated, in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        self.with_slice(|slice| {
            let mut categories: Vec<String> = Vec::new();
            for skill in slice.iter() {
                if !categories.contains(&skill.category) {
                    categories.push(skill.category.clone());
                }
            }
            categories
        })
    }

    /// Add a skill at the end of the list.
    pub fn add(&self, draft: SkillDraft) -> Result<Skill> {
        if draft.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        validate_level(draft.level)?;

        let skill = Skill {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            level: draft.level,
            icon: draft.icon,
            category: draft.category,
        };
        self.with_slice(|slice| {
            slice.push(skill.clone());
            self.persist(slice);
        });
        Ok(skill)
    }

    /// Merge `patch` into the skill with this id. Unknown ids are a no-op.
    pub fn update(&self, id: &str, patch: SkillPatch) -> Result<()> {
        if let Some(level) = patch.level {
            validate_level(level)?;
        }
        self.with_slice(|slice| {
            if let Some(skill) = slice.iter_mut().find(|s| s.id == id) {
                if let Some(name) = patch.name {
                    skill.name = name;
                }
                if let Some(level) = patch.level {
                    skill.level = level;
                }
                if let Some(icon) = patch.icon {
                    skill.icon = icon;
                }
                if let Some(category) = patch.category {
                    skill.category = category;
                }
            }
            self.persist(slice);
        });
        Ok(())
    }

    /// Delete a skill. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) {
        self.with_slice(|slice| {
            slice.retain(|s| s.id != id);
            self.persist(slice);
        });
    }

    /// Swap a skill with its nearest neighbor in the same category.
    ///
    /// Silent no-op when the skill is already at its category boundary, or
    /// when the id is unknown.
    pub fn reorder(&self, id: &str, direction: Direction) {
        self.with_slice(|slice| {
            let Some(index) = slice.iter().position(|s| s.id == id) else {
                return;
            };
            let category = slice[index].category.clone();

            let neighbor = match direction {
                Direction::Up => slice[..index]
                    .iter()
                    .rposition(|s| s.category == category),
                Direction::Down => slice[index + 1..]
                    .iter()
                    .position(|s| s.category == category)
                    .map(|offset| index + 1 + offset),
            };

            if let Some(neighbor) = neighbor {
                slice.swap(index, neighbor);
                self.persist(slice);
            }
        });
    }

    /// Discard the in-memory slice; the next access re-reads storage.
    pub fn reload(&self) {
        *self.slice.write() = None;
    }
}

fn validate_level(level: u8) -> Result<()> {
    if level > 100 {
        return Err(Error::InvalidSkillLevel(level as u16));
    }
    Ok(())
}

/// The skill list a fresh profile starts from.
fn default_skills() -> Vec<Skill> {
    let seed: &[(&str, u8, SkillIcon, &str)] = &[
        ("SQL", 90, SkillIcon::Database, "Data Analysis"),
        ("Excel", 95, SkillIcon::Table, "Data Analysis"),
        ("Statistical Analysis", 85, SkillIcon::Activity, "Data Analysis"),
        ("Tableau", 88, SkillIcon::BarChart4, "Data Visualization"),
        ("Power BI", 82, SkillIcon::LineChart, "Data Visualization"),
        ("Data Storytelling", 90, SkillIcon::LineChart, "Data Visualization"),
        ("Python", 80, SkillIcon::Python, "Programming"),
        ("R", 75, SkillIcon::Code, "Programming"),
        ("JavaScript", 65, SkillIcon::FileCode, "Programming"),
        ("Hadoop", 60, SkillIcon::Server, "Big Data"),
        ("Spark", 55, SkillIcon::Cpu, "Big Data"),
        ("Pandas", 85, SkillIcon::Layers, "Tools & Frameworks"),
        ("Scikit-learn", 75, SkillIcon::Layers, "Tools & Frameworks"),
        ("Git", 80, SkillIcon::GitBranch, "Tools & Frameworks"),
        ("Terminal", 85, SkillIcon::Terminal, "Tools & Frameworks"),
    ];
    seed.iter()
        .enumerate()
        .map(|(index, (name, level, icon, category))| Skill {
            id: (index + 1).to_string(),
            name: (*name).to_string(),
            level: *level,
            icon: *icon,
            category: (*category).to_string(),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
