use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Placeholder for text fields the catalog left out
pub const UNKNOWN: &str = "未知";

/// Number of records kept per section of the report
pub const RECORDS_PER_SECTION: usize = 5;

/// Kind of listing being fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Tv,
    Movie,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Tv => write!(f, "tv"),
            MediaKind::Movie => write!(f, "movie"),
        }
    }
}

/// A single movie or TV show as it appears in the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaRecord {
    pub title: String,
    /// Average rating on a 0-10 scale
    pub rating: f64,
    pub year: String,
    /// Comma-joined genre names
    pub genres: String,
    /// Comma-joined director names
    pub directors: String,
    /// Comma-joined cast names
    pub casts: String,
    pub url: String,
}

impl MediaRecord {
    /// Builds a record from string slices, used by the curated lists
    pub fn new(
        title: &str,
        rating: f64,
        year: &str,
        genres: &str,
        directors: &str,
        casts: &str,
        url: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            rating,
            year: year.to_string(),
            genres: genres.to_string(),
            directors: directors.to_string(),
            casts: casts.to_string(),
            url: url.to_string(),
        }
    }
}

// ============================================================================
// Douban API Types
// ============================================================================

/// Response envelope shared by `search`, `new_movies` and `top250`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectList {
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl SubjectList {
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Converts the leading subjects into report records
    pub fn into_records(self) -> Vec<MediaRecord> {
        self.subjects
            .into_iter()
            .take(RECORDS_PER_SECTION)
            .map(MediaRecord::from)
            .collect()
    }
}

/// Raw subject from the Douban movie API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subject {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub rating: Option<SubjectRating>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<Person>,
    #[serde(default)]
    pub casts: Vec<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectRating {
    #[serde(default)]
    pub average: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub name: String,
}

/// Douban is inconsistent about whether `id` and `year` are strings or numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn join_names(people: &[Person]) -> String {
    people
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<Subject> for MediaRecord {
    fn from(subject: Subject) -> Self {
        MediaRecord {
            title: subject.title.unwrap_or_else(|| UNKNOWN.to_string()),
            rating: subject.rating.map(|r| r.average).unwrap_or(0.0),
            year: subject.year.unwrap_or_else(|| UNKNOWN.to_string()),
            genres: subject.genres.join(", "),
            directors: join_names(&subject.directors),
            casts: join_names(&subject.casts),
            url: format!(
                "https://movie.douban.com/subject/{}/",
                subject.id.unwrap_or_default()
            ),
        }
    }
}
