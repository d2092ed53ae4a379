//! Listing data models.

use serde::{Deserialize, Serialize};

/// Whether a property is offered for rent or for sale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    /// Value used for the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => "rent",
            ListingType::Sale => "sale",
        }
    }
}

/// A real-estate listing as returned by `GET /api/listing/get`.
///
/// Only the identifier is required. Every descriptive field defaults when the
/// backend leaves it out, so `{"_id": "a", "imageUrls": ["x.jpg"]}` is a valid
/// listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Backend document id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub regular_price: f64,
    #[serde(default)]
    pub discount_price: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default, rename = "type")]
    pub listing_type: Option<ListingType>,
    /// Promoted offer flag, independent of rent/sale
    #[serde(default)]
    pub offer: bool,
    /// Image URLs in display order; the first one is the cover
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub user_ref: Option<String>,
}

impl Listing {
    /// Create a bare listing with an id and its images.
    pub fn new(id: impl Into<String>, image_urls: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            address: String::new(),
            regular_price: 0.0,
            discount_price: 0.0,
            bedrooms: 0,
            bathrooms: 0,
            furnished: false,
            parking: false,
            listing_type: None,
            offer: false,
            image_urls,
            user_ref: None,
        }
    }

    /// First image, used as card cover and carousel background.
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Price shown to visitors: the discounted one for offers.
    pub fn display_price(&self) -> f64 {
        if self.offer {
            self.discount_price
        } else {
            self.regular_price
        }
    }

    pub fn is_rental(&self) -> bool {
        self.listing_type == Some(ListingType::Rent)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_listing_decodes() {
        let listing: Listing =
            serde_json::from_str(r#"{"_id": "a", "imageUrls": ["x.jpg", "z.jpg"]}"#).unwrap();

        assert_eq!(listing.id, "a");
        assert_eq!(listing.cover_image(), Some("x.jpg"));
        assert_eq!(listing.listing_type, None);
        assert!(!listing.offer);
    }

    #[test]
    fn test_id_alias() {
        let listing: Listing = serde_json::from_str(r#"{"id": "b", "imageUrls": []}"#).unwrap();
        assert_eq!(listing.id, "b");
        assert_eq!(listing.cover_image(), None);
    }

    #[test]
    fn test_full_backend_document() {
        let json = r#"{
            "_id": "65f0c2",
            "name": "Sunny loft",
            "description": "Top floor",
            "address": "12 Garden St",
            "regularPrice": 2500,
            "discountPrice": 2100,
            "bathrooms": 1,
            "bedrooms": 2,
            "furnished": true,
            "parking": false,
            "type": "rent",
            "offer": true,
            "imageUrls": ["https://img/1.jpg"],
            "userRef": "u1",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "__v": 0
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.listing_type, Some(ListingType::Rent));
        assert!(listing.is_rental());
        assert_eq!(listing.display_price(), 2100.0);
        assert_eq!(listing.user_ref.as_deref(), Some("u1"));
    }

    #[test]
    fn test_serializes_backend_field_names() {
        let listing = Listing::new("a", vec!["x.jpg".to_string()]);
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["_id"], "a");
        assert_eq!(json["imageUrls"][0], "x.jpg");
    }
}
