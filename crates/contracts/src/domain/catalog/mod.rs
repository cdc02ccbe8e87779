pub mod aggregate;
pub mod form;
pub mod seed;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use aggregate::{Product, ProductColor};
use seed::{ALL_CATEGORIES, DEFAULT_CATEGORIES, SEED_PRODUCTS, UNCATEGORIZED};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("O nome da categoria não pode ser vazio")]
    EmptyName,
    #[error("A categoria \"{0}\" não pode ser alterada")]
    Protected(String),
    #[error("A categoria \"{0}\" já existe")]
    Duplicate(String),
    #[error("Categoria \"{0}\" não encontrada")]
    UnknownCategory(String),
    #[error("Produto \"{0}\" não encontrado")]
    UnknownProduct(String),
}

/// Category selection and search text driving the home page listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: String,
    pub query: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

impl CatalogFilter {
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: SEED_PRODUCTS.clone(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Catalog {
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products visible under the filter, in catalog order.
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.category == ALL_CATEGORIES || p.category == filter.category)
            .filter(|p| p.matches_query(&filter.query))
            .collect()
    }

    /// Categories shown in navigation (everything except the "all" pseudo-category).
    pub fn navigable_categories(&self) -> impl Iterator<Item = &String> {
        self.categories.iter().filter(|c| c.as_str() != ALL_CATEGORIES)
    }

    /// New products go first.
    pub fn add_product(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    pub fn update_product(&mut self, product: Product) -> Result<(), CatalogError> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| CatalogError::UnknownProduct(product.id.clone()))?;
        *slot = product;
        Ok(())
    }

    pub fn delete_product(&mut self, id: &str) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    pub fn add_category(&mut self, name: &str) -> Result<String, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.categories.iter().any(|c| c == name) {
            return Err(CatalogError::Duplicate(name.to_string()));
        }
        self.categories.push(name.to_string());
        Ok(name.to_string())
    }

    /// Rename a category and re-label its products. Returns the trimmed new name.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<String, CatalogError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if old == ALL_CATEGORIES {
            return Err(CatalogError::Protected(old.to_string()));
        }
        if new != old && self.categories.iter().any(|c| c == new) {
            return Err(CatalogError::Duplicate(new.to_string()));
        }
        let slot = self
            .categories
            .iter_mut()
            .find(|c| c.as_str() == old)
            .ok_or_else(|| CatalogError::UnknownCategory(old.to_string()))?;
        *slot = new.to_string();

        for product in self.products.iter_mut().filter(|p| p.category == old) {
            product.category = new.to_string();
        }
        Ok(new.to_string())
    }

    /// Remove a category; its products stay in the catalog as uncategorized.
    pub fn delete_category(&mut self, name: &str) -> Result<(), CatalogError> {
        if name == ALL_CATEGORIES {
            return Err(CatalogError::Protected(name.to_string()));
        }
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        if self.categories.len() == before {
            return Err(CatalogError::UnknownCategory(name.to_string()));
        }
        for product in self.products.iter_mut().filter(|p| p.category == name) {
            product.category = UNCATEGORIZED.to_string();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.products.len(), 3);
        assert_eq!(catalog.categories.first().map(String::as_str), Some("Todos"));
        assert_eq!(catalog.navigable_categories().count(), 4);
    }

    #[test]
    fn test_filter_by_category_and_query() {
        let catalog = Catalog::default();
        let mut filter = CatalogFilter::default();
        assert_eq!(catalog.filtered(&filter).len(), 3);

        filter.category = "Masculino".into();
        assert_eq!(catalog.filtered(&filter).len(), 2);

        filter.query = "MOLETOM".into();
        let found = catalog.filtered(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");

        filter.category = "Feminino".into();
        assert!(catalog.filtered(&filter).is_empty());
    }

    #[test]
    fn test_query_matches_category_name() {
        let catalog = Catalog::default();
        let filter = CatalogFilter {
            category: "Todos".into(),
            query: "feminino".into(),
        };
        assert_eq!(catalog.filtered(&filter).len(), 1);
    }

    #[test]
    fn test_add_category_rules() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.add_category("  Infantil ").unwrap(), "Infantil");
        assert_eq!(catalog.add_category("   "), Err(CatalogError::EmptyName));
        assert_eq!(
            catalog.add_category("Infantil"),
            Err(CatalogError::Duplicate("Infantil".into()))
        );
    }

    #[test]
    fn test_rename_category_relabels_products() {
        let mut catalog = Catalog::default();
        catalog.rename_category("Masculino", "Homem").unwrap();
        assert!(catalog.categories.iter().any(|c| c == "Homem"));
        assert_eq!(
            catalog.products.iter().filter(|p| p.category == "Homem").count(),
            2
        );
        assert_eq!(
            catalog.rename_category("Todos", "Tudo"),
            Err(CatalogError::Protected("Todos".into()))
        );
    }

    #[test]
    fn test_delete_category_keeps_products() {
        let mut catalog = Catalog::default();
        catalog.delete_category("Feminino").unwrap();
        assert_eq!(catalog.products.len(), 3);
        assert_eq!(catalog.find("2").unwrap().category, UNCATEGORIZED);
        assert!(catalog.delete_category("Todos").is_err());
        assert!(catalog.delete_category("Feminino").is_err());
    }

    #[test]
    fn test_product_crud() {
        let mut catalog = Catalog::default();
        let mut product = catalog.find("1").unwrap().clone();
        product.id = "99".into();
        catalog.add_product(product.clone());
        assert_eq!(catalog.products[0].id, "99");

        product.price = 10.0;
        catalog.update_product(product).unwrap();
        assert_eq!(catalog.find("99").unwrap().price, 10.0);

        catalog.delete_product("99").unwrap();
        assert!(catalog.find("99").is_none());
        assert!(catalog.delete_product("99").is_err());
    }
}
