use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deserialize_null_default;

/// An image attached to an exhibition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExhibitionImage {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    pub imageid: u64,
    pub idsid: u64,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub renditionnumber: Option<String>,
    pub displayorder: i64,
    pub baseimageurl: String,
    #[serde(default)]
    pub alttext: Option<String>,
    pub width: u32,
    #[serde(default)]
    pub iiifbaseuri: Option<String>,
    pub height: u32,
}

/// An exhibition record.
///
/// `id` identifies the exhibition for artwork listing; `exhibitionid` is a
/// separate catalog number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exhibition {
    pub id: u64,
    pub exhibitionid: u64,
    pub title: String,
    pub begindate: String,
    #[serde(default)]
    pub enddate: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub shortdescription: Option<String>,
    #[serde(default)]
    pub primaryimageurl: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<ExhibitionImage>,
}

impl Exhibition {
    /// Begin date as `MMM d` ("Jan 12").
    pub fn formatted_begin_date(&self) -> String {
        format_short_date(&self.begindate)
    }

    /// End date as `MMM d`, if the exhibition has one.
    pub fn formatted_end_date(&self) -> Option<String> {
        self.enddate.as_deref().map(format_short_date)
    }

    /// Primary image URL, falling back to the first exhibition image.
    pub fn cover_image_url(&self) -> Option<&str> {
        self.primaryimageurl
            .as_deref()
            .or_else(|| self.images.first().map(|image| image.baseimageurl.as_str()))
    }
}

/// Render a `yyyy-MM-dd` date as `MMM d`; anything unparseable passes through.
fn format_short_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}
