use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{non_blank, ParseLabelError};

/// Label the catalog uses for "every category".
pub const ALL_CATEGORIES_LABEL: &str = "Todas";

/// Catalog category of a dress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Noiva")]
    Bride,
    #[serde(rename = "Madrinha")]
    Bridesmaid,
    #[serde(rename = "Formatura")]
    Graduation,
    #[serde(rename = "Debutante")]
    Debutante,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Bride,
        Category::Bridesmaid,
        Category::Graduation,
        Category::Debutante,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Bride => "Noiva",
            Category::Bridesmaid => "Madrinha",
            Category::Graduation => "Formatura",
            Category::Debutante => "Debutante",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or_else(|| ParseLabelError {
                kind: "category",
                label: label.to_string(),
            })
    }
}

/// Represents a rentable dress in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dress {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "precoAluguel")]
    pub rental_price: f64,
    #[serde(rename = "imagens")]
    pub images: Vec<String>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "disponivel")]
    pub available: bool,
    #[serde(rename = "tamanhos")]
    pub sizes: Vec<String>,
}

/// Payload for creating a new dress. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DressCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "precoAluguel")]
    pub rental_price: f64,
    #[serde(rename = "imagens")]
    pub images: Vec<String>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "disponivel")]
    pub available: bool,
    #[serde(rename = "tamanhos")]
    pub sizes: Vec<String>,
}

impl DressCreate {
    /// Splits a comma separated size list ("36, 38,,40") into clean labels.
    pub fn parse_sizes(raw: &str) -> Vec<String> {
        raw.split(',')
            .filter_map(non_blank)
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if non_blank(&self.name).is_none() {
            return Err("Dress name is required".to_string());
        }
        if self.images.is_empty() {
            return Err("At least one image is required".to_string());
        }
        validate_price(self.rental_price)
    }
}

/// Field-by-field update of a dress. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DressPatch {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
    #[serde(rename = "precoAluguel", default)]
    pub rental_price: Option<f64>,
    #[serde(rename = "imagens", default)]
    pub images: Option<Vec<String>>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "disponivel", default)]
    pub available: Option<bool>,
    #[serde(rename = "tamanhos", default)]
    pub sizes: Option<Vec<String>>,
}

impl DressPatch {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if let Some(price) = self.rental_price {
            validate_price(price)?;
        }
        if matches!(&self.images, Some(images) if images.is_empty()) {
            return Err("At least one image is required".to_string());
        }
        if matches!(&self.name, Some(name) if non_blank(name).is_none()) {
            return Err("Dress name is required".to_string());
        }
        Ok(())
    }

    pub(crate) fn apply(self, dress: &mut Dress) {
        if let Some(name) = self.name {
            dress.name = name;
        }
        if let Some(category) = self.category {
            dress.category = category;
        }
        if let Some(rental_price) = self.rental_price {
            dress.rental_price = rental_price;
        }
        if let Some(images) = self.images {
            dress.images = images;
        }
        if let Some(description) = self.description {
            dress.description = description;
        }
        if let Some(available) = self.available {
            dress.available = available;
        }
        if let Some(sizes) = self.sizes {
            dress.sizes = sizes;
        }
    }
}

fn validate_price(price: f64) -> Result<(), String> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(format!("Invalid rental price: {price}"))
    }
}

/// Catalog filter. Both conditions must hold; an absent or empty condition
/// does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DressFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring of the name or the description, untrimmed.
    pub search: Option<String>,
}

impl DressFilter {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    /// Builds a filter from the catalog's selector labels, where
    /// [`ALL_CATEGORIES_LABEL`] means no category restriction.
    pub fn from_labels(category: &str, search: &str) -> Result<Self, ParseLabelError> {
        let category = match category {
            ALL_CATEGORIES_LABEL | "" => None,
            label => Some(label.parse()?),
        };
        Ok(Self {
            category,
            search: (!search.is_empty()).then(|| search.to_string()),
        })
    }

    pub fn matches(&self, dress: &Dress) -> bool {
        if let Some(category) = self.category {
            if dress.category != category {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                dress.name.to_lowercase().contains(&needle)
                    || dress.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dress(name: &str, category: Category, description: &str) -> Dress {
        Dress {
            id: "d".to_string(),
            name: name.to_string(),
            category,
            rental_price: 100.0,
            images: vec!["https://img/1.jpg".to_string()],
            description: description.to_string(),
            available: true,
            sizes: vec!["38".to_string()],
        }
    }

    #[test]
    fn test_contract_field_names() {
        let json = serde_json::to_value(dress("Boho", Category::Bride, "Renda")).unwrap();
        assert_eq!(json["nome"], "Boho");
        assert_eq!(json["categoria"], "Noiva");
        assert_eq!(json["precoAluguel"], 100.0);
        assert_eq!(json["disponivel"], true);
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert!("Casual".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_is_conjunctive_and_case_insensitive() {
        let bride = dress("Vestido Noiva Boho", Category::Bride, "Manga longa");
        let bridesmaid = dress("Vestido Madrinha Rosa", Category::Bridesmaid, "Tule rosa");

        let filter = DressFilter {
            category: Some(Category::Bride),
            search: Some("BOHO".to_string()),
        };
        assert!(filter.matches(&bride));
        assert!(!filter.matches(&bridesmaid));

        let by_description = DressFilter::search("tule");
        assert!(by_description.matches(&bridesmaid));
        assert!(!by_description.matches(&bride));

        let mismatched = DressFilter {
            category: Some(Category::Bridesmaid),
            search: Some("boho".to_string()),
        };
        assert!(!mismatched.matches(&bride));
        assert!(!mismatched.matches(&bridesmaid));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let any = dress("Any", Category::Debutante, "");
        assert!(DressFilter::search("").matches(&any));
        assert!(DressFilter::default().matches(&any));
    }

    #[test]
    fn test_search_whitespace_is_significant() {
        let boho = dress("Vestido Noiva Boho", Category::Bride, "Ideal para casamentos");
        assert!(!DressFilter::search("   ").matches(&boho));
        assert!(!DressFilter::search("boho ").matches(&boho));
        assert!(DressFilter::search("noiva boho").matches(&boho));
    }

    #[test]
    fn test_filter_from_labels() {
        let all = DressFilter::from_labels(ALL_CATEGORIES_LABEL, "").unwrap();
        assert_eq!(all, DressFilter::default());

        let grad = DressFilter::from_labels("Formatura", " azul ").unwrap();
        assert_eq!(grad.category, Some(Category::Graduation));
        assert_eq!(grad.search.as_deref(), Some(" azul "));

        assert!(DressFilter::from_labels("Festa", "").is_err());
    }

    #[test]
    fn test_create_validation() {
        let mut create = DressCreate {
            name: "Sereia".to_string(),
            category: Category::Bride,
            rental_price: 900.0,
            images: vec![],
            description: String::new(),
            available: true,
            sizes: DressCreate::parse_sizes("36, 38,,40 "),
        };
        assert_eq!(create.sizes, vec!["36", "38", "40"]);
        assert!(create.validate().is_err());

        create.images.push("https://img/sereia.jpg".to_string());
        assert!(create.validate().is_ok());

        create.rental_price = -1.0;
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let patch: Result<DressPatch, _> = serde_json::from_str(r#"{"cor": "azul"}"#);
        assert!(patch.is_err());

        let patch: DressPatch = serde_json::from_str(r#"{"disponivel": false}"#).unwrap();
        let mut target = dress("Boho", Category::Bride, "");
        patch.apply(&mut target);
        assert!(!target.available);
        assert_eq!(target.name, "Boho");
    }
}
