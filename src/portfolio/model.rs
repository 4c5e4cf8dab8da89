//! Portfolio data model, deserialized from the JSON data file.

use crate::cycler::TitleList;
use crate::error::FolioError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Hero section data.
    pub personal_info: PersonalInfo,
    /// About text.
    pub summary: String,
    /// Work history, most recent first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Talks and community work.
    #[serde(default)]
    pub speaking: Option<Speaking>,
    /// Skill categories in document order.
    #[serde(default, deserialize_with = "skill_groups")]
    pub skills: Vec<SkillGroup>,
    /// Selected work.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Contact links.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Name, rotating titles and contact basics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Full name.
    pub name: String,
    /// `|`-separated list of titles for the cycler.
    pub title: String,
    /// Where the person is based.
    pub location: String,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// One-line pitch under the title.
    #[serde(default)]
    pub tagline: Option<String>,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Office location.
    pub location: String,
    /// Free-form date range.
    pub period: String,
    /// Bullet points.
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Public speaking and community involvement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaking {
    /// Lead line.
    pub headline: String,
    /// Paragraph under the headline.
    pub summary: String,
    /// Short tags such as "Conference Speaker".
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Heading over the community roles.
    #[serde(default)]
    pub leadership_title: Option<String>,
    /// Community roles held.
    #[serde(default)]
    pub leadership: Vec<CommunityRole>,
}

/// A volunteer or community position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommunityRole {
    /// Position title.
    pub role: String,
    /// Club, conference or group.
    pub organization: String,
    /// What the role involves.
    #[serde(default)]
    pub description: String,
}

/// A named list of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    /// Category name, as written in the data file.
    pub category: String,
    /// Skills in that category.
    pub items: Vec<String>,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project name.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Technology tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Where to find it.
    #[serde(default)]
    pub link: Option<String>,
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl Portfolio {
    /// Load and parse a portfolio data file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Read`] if the file cannot be read and
    /// [`FolioError::Data`] if it is not a valid portfolio document.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let contents = fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio: Self = serde_json::from_str(&contents).map_err(|source| FolioError::Data {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            titles = portfolio.titles().len(),
            experience = portfolio.experience.len(),
            "loaded portfolio"
        );
        Ok(portfolio)
    }

    /// The rotating titles, split from `personalInfo.title`.
    pub fn titles(&self) -> TitleList {
        TitleList::parse_separated(&self.personal_info.title)
    }
}

/// Collect a JSON object of `category -> [skill]` in document order.
fn skill_groups<'de, D>(deserializer: D) -> Result<Vec<SkillGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<SkillGroup>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of skill categories to lists of skills")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((category, items)) = map.next_entry::<String, Vec<String>>()? {
                groups.push(SkillGroup { category, items });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "personalInfo": {
            "name": "Ada Example",
            "title": "Data Scientist | ML Engineer |Speaker",
            "location": "Paris, France",
            "email": "ada@example.com"
        },
        "summary": "Builds things.",
        "experience": [
            {
                "role": "Lead",
                "company": "Acme",
                "location": "Remote",
                "period": "2021 - Present",
                "achievements": ["Shipped", "Scaled"]
            }
        ],
        "speaking": {
            "headline": "Talking AI",
            "summary": "Explaining models to people.",
            "leadership": [
                { "role": "VP Education", "organization": "Toastmasters" }
            ]
        },
        "skills": {
            "Programming": ["Python", "Rust"],
            "Cloud": ["GCP"],
            "Analytics": []
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let portfolio: Portfolio = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(portfolio.personal_info.name, "Ada Example");
        assert_eq!(portfolio.personal_info.email.as_deref(), Some("ada@example.com"));
        assert_eq!(portfolio.personal_info.tagline, None);
        assert_eq!(portfolio.experience[0].achievements, ["Shipped", "Scaled"]);
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.links.is_empty());
    }

    #[test]
    fn test_speaking_block() {
        let portfolio: Portfolio = serde_json::from_str(SAMPLE).unwrap();
        let speaking = portfolio.speaking.unwrap();
        assert_eq!(speaking.headline, "Talking AI");
        assert!(speaking.highlights.is_empty());
        assert_eq!(speaking.leadership[0].organization, "Toastmasters");
        assert_eq!(speaking.leadership[0].description, "");

        let bare: Portfolio = serde_json::from_str(
            r#"{ "personalInfo": { "name": "x", "title": "y", "location": "z" }, "summary": "" }"#,
        )
        .unwrap();
        assert_eq!(bare.speaking, None);
    }

    #[test]
    fn test_skills_keep_document_order() {
        let portfolio: Portfolio = serde_json::from_str(SAMPLE).unwrap();
        let categories: Vec<&str> = portfolio.skills.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, ["Programming", "Cloud", "Analytics"]);
        assert!(portfolio.skills[2].items.is_empty());
    }

    #[test]
    fn test_titles_are_split_and_trimmed() {
        let portfolio: Portfolio = serde_json::from_str(SAMPLE).unwrap();
        let list = portfolio.titles();
        let titles: Vec<&str> = list.iter().map(|t| t.as_str()).collect();
        assert_eq!(titles, ["Data Scientist", "ML Engineer", "Speaker"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let portfolio = Portfolio::load(file.path()).unwrap();
        assert_eq!(portfolio.summary, "Builds things.");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = Portfolio::load(&path).unwrap_err();
        assert!(matches!(err, FolioError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "personalInfo": { "name": "x" } }"#).unwrap();

        let err = Portfolio::load(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Data { .. }));
        assert!(err.to_string().contains("invalid portfolio data"));
    }
}
