use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommentsPage {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Comment {
    pub id: String,
    pub author: CommentAuthor,
    #[serde(rename = "createdTime", with = "date_format")]
    pub created_time: DateTime<Utc>,
    pub text: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommentAuthor {
    pub name: String,
}

mod date_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
