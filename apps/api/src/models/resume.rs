use serde::{Deserialize, Deserializer, Serialize};

/// A single role on the resume. `bullets` are free-text achievement lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub start: String,
    pub end: String,
}

/// Structured resume as submitted by the client.
/// Created per request and never mutated after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

impl Resume {
    /// All bullets in experience order, then bullet order within each entry.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|xp| xp.bullets.iter().map(String::as_str))
    }
}

/// Clients send `"links": null` as often as they omit the field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
