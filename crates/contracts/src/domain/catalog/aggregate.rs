use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub image: String,
    #[serde(default)]
    pub secondary_images: Vec<String>,
    pub stock: u32,
    pub rating: f32,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ProductColor>,
}

impl Product {
    /// Blank product with a fresh id, backing the back-office "new product" form.
    pub fn draft(category: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            price: 0.0,
            description: String::new(),
            category: category.to_string(),
            sub_category: None,
            image: String::new(),
            secondary_images: Vec::new(),
            stock: 0,
            rating: 5.0,
            sizes: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Main image followed by the secondary ones, for the product gallery.
    pub fn gallery(&self) -> Vec<String> {
        std::iter::once(self.image.clone())
            .chain(self.secondary_images.iter().cloned())
            .collect()
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    /// Case-insensitive match against name, description and category.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}
