use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::deserialize_null_default;

/// Stable identifier the remote collection issues for an object.
///
/// It is the only key used for favoriting and hydration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        ArtworkId(id)
    }
}

impl FromStr for ArtworkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ArtworkId)
    }
}

/// An image attached to an artwork.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtworkImage {
    #[serde(default)]
    pub baseimageurl: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A person associated with an artwork (artist, maker, publisher, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            Some(role) => write!(f, "{} ({})", self.name, role),
            None => write!(f, "{}", self.name),
        }
    }
}

/// An object record from the collection.
///
/// A later fetch of the same id may return a different record; each fetch is
/// authoritative for the call that made it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display date, free-form ("c. 1650", "1880-1885")
    #[serde(default)]
    pub dated: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<ArtworkImage>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub people: Vec<Artist>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

impl Artwork {
    /// Base URL of the first image that has one.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images
            .iter()
            .find_map(|image| image.baseimageurl.as_deref())
    }

    /// People joined as `name (role), name (role)`, or `None` if there are none.
    pub fn artist_line(&self) -> Option<String> {
        if self.people.is_empty() {
            return None;
        }
        Some(
            self.people
                .iter()
                .map(Artist::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": 299843,
            "title": "Bowl",
            "description": null,
            "dated": "c. 1650",
            "images": [{"baseimageurl": "https://nrs.example/urn-3:HUAM:1", "caption": null}],
            "people": [{"name": "Unidentified Artist", "role": "Artist"}],
            "division": "Asian and Mediterranean Art",
            "medium": "Porcelain",
            "accessionyear": 1943
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, ArtworkId(299843));
        assert_eq!(artwork.dated.as_deref(), Some("c. 1650"));
        assert_eq!(
            artwork.primary_image_url(),
            Some("https://nrs.example/urn-3:HUAM:1")
        );
        assert_eq!(
            artwork.artist_line().as_deref(),
            Some("Unidentified Artist (Artist)")
        );
    }

    #[test]
    fn test_decode_minimal_record() {
        let artwork: Artwork =
            serde_json::from_str(r#"{"id": 5, "title": "Untitled", "people": null}"#).unwrap();
        assert!(artwork.images.is_empty());
        assert!(artwork.people.is_empty());
        assert_eq!(artwork.primary_image_url(), None);
        assert_eq!(artwork.artist_line(), None);
    }

    #[test]
    fn test_decode_missing_title_fails() {
        assert!(serde_json::from_str::<Artwork>(r#"{"id": 5}"#).is_err());
    }

    #[test]
    fn test_primary_image_skips_images_without_url() {
        let artwork = Artwork {
            id: ArtworkId(1),
            title: "Print".to_string(),
            description: None,
            dated: None,
            images: vec![
                ArtworkImage {
                    baseimageurl: None,
                    caption: Some("verso".to_string()),
                },
                ArtworkImage {
                    baseimageurl: Some("https://img/2".to_string()),
                    caption: None,
                },
            ],
            people: vec![],
            division: None,
            medium: None,
        };
        assert_eq!(artwork.primary_image_url(), Some("https://img/2"));
    }

    #[test]
    fn test_artwork_id_parse() {
        assert_eq!(" 101 ".parse::<ArtworkId>().unwrap(), ArtworkId(101));
        assert!("abc".parse::<ArtworkId>().is_err());
        assert_eq!(ArtworkId(7).to_string(), "7");
    }
}
