//! Client-side text filter over already-fetched records.

use crate::models::{Artwork, Exhibition};

/// Records that expose free text for the local filter.
pub trait Searchable {
    /// Text fields the filter looks at, in no particular order.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Artwork {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(person) = self.people.first() {
            fields.push(person.name.as_str());
        }
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }
}

impl Searchable for Exhibition {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.title.as_str()),
            self.shortdescription.as_deref(),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Items whose fields contain `query` case-insensitively, in original order.
///
/// An empty query keeps every item.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Artist, ArtworkId};

    fn artwork(id: u64, title: &str) -> Artwork {
        Artwork {
            id: ArtworkId(id),
            title: title.to_string(),
            description: None,
            dated: None,
            images: vec![],
            people: vec![],
            division: None,
            medium: None,
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = vec![artwork(1, "Vase"), artwork(2, "Bowl"), artwork(3, "Cup")];
        let shown = filter_items(&items, "");
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().zip(&items).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_unique_title_substring_yields_one_item() {
        let items = vec![artwork(1, "Blue Vase"), artwork(2, "Bowl"), artwork(3, "Cup")];
        let shown = filter_items(&items, "vas");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, ArtworkId(1));
    }

    #[test]
    fn test_case_insensitive_and_order_preserving() {
        let items = vec![
            artwork(1, "Cat Study"),
            artwork(2, "Landscape"),
            artwork(3, "Sleeping cat"),
        ];
        let ids: Vec<_> = filter_items(&items, "CAT").iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![ArtworkId(1), ArtworkId(3)]);
    }

    #[test]
    fn test_matches_description_and_first_person() {
        let mut described = artwork(1, "Untitled");
        described.description = Some("A study of harbor boats".to_string());
        let mut attributed = artwork(2, "Portrait");
        attributed.people = vec![
            Artist {
                name: "John Singer Sargent".to_string(),
                role: Some("Artist".to_string()),
            },
            Artist {
                name: "Harbor Press".to_string(),
                role: Some("Publisher".to_string()),
            },
        ];
        let items = vec![described, attributed];

        let harbor: Vec<_> = filter_items(&items, "harbor").iter().map(|a| a.id).collect();
        assert_eq!(harbor, vec![ArtworkId(1)]);

        let sargent: Vec<_> = filter_items(&items, "sargent").iter().map(|a| a.id).collect();
        assert_eq!(sargent, vec![ArtworkId(2)]);
    }

    #[test]
    fn test_exhibition_fields() {
        let exhibition = Exhibition {
            id: 1,
            exhibitionid: 2,
            title: "Prints".to_string(),
            begindate: "2024-01-01".to_string(),
            enddate: None,
            description: None,
            shortdescription: Some("Works on paper from Edo Japan".to_string()),
            primaryimageurl: None,
            images: vec![],
        };
        assert_eq!(filter_items(std::slice::from_ref(&exhibition), "edo").len(), 1);
        assert!(filter_items(std::slice::from_ref(&exhibition), "oil").is_empty());
    }
}
