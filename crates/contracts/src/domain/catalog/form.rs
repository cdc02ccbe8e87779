//! Back-office product editor input.

use thiserror::Error;

use super::aggregate::{Product, ProductColor};

/// Image used when the editor is saved without any picture.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1523381210434-271e8be1f52b?auto=format&fit=crop&q=80&w=800";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Informe o nome do produto")]
    EmptyName,
    #[error("Preço inválido: \"{0}\"")]
    InvalidPrice(String),
    #[error("Estoque inválido: \"{0}\"")]
    InvalidStock(String),
}

/// Raw editor fields; numbers stay as typed until saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<ProductColor>,
}

impl ProductForm {
    pub fn blank(category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..Self::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price),
            stock: product.stock.to_string(),
            category: product.category.clone(),
            images: product.gallery(),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
        }
    }

    /// Adds a size unless blank or already listed.
    pub fn add_size(&mut self, size: &str) {
        let size = size.trim().to_uppercase();
        if !size.is_empty() && !self.sizes.contains(&size) {
            self.sizes.push(size);
        }
    }

    pub fn remove_size(&mut self, size: &str) {
        self.sizes.retain(|s| s != size);
    }

    pub fn add_image(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.images.push(url.to_string());
        }
    }

    /// Build the product to save. `existing` keeps its id and rating; a new
    /// product gets a fresh id.
    pub fn build(&self, existing: Option<&Product>) -> Result<Product, ProductFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }
        let price = parse_price(&self.price)?;
        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| ProductFormError::InvalidStock(self.stock.clone()))?;

        let mut product = match existing {
            Some(p) => p.clone(),
            None => Product::draft(&self.category),
        };
        let mut images = self.images.iter().filter(|i| !i.trim().is_empty()).cloned();

        product.name = name.to_string();
        product.description = self.description.trim().to_string();
        product.price = price;
        product.stock = stock;
        product.category = self.category.clone();
        product.image = images
            .next()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        product.secondary_images = images.collect();
        product.sizes = self.sizes.clone();
        product.colors = self.colors.clone();
        Ok(product)
    }
}

/// Accepts both `89.90` and `89,90`.
fn parse_price(raw: &str) -> Result<f64, ProductFormError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ProductFormError::InvalidPrice(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn filled() -> ProductForm {
        ProductForm {
            name: "  Jaqueta Jeans ".into(),
            description: "Clássica".into(),
            price: "189,90".into(),
            stock: "7".into(),
            category: "Masculino".into(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_build_new_product() {
        let product = filled().build(None).unwrap();
        assert_eq!(product.name, "Jaqueta Jeans");
        assert_eq!(product.price, 189.90);
        assert_eq!(product.stock, 7);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert!(product.secondary_images.is_empty());
        assert!(!product.id.is_empty());
    }

    #[test]
    fn test_build_keeps_identity_of_existing() {
        let catalog = Catalog::default();
        let original = catalog.find("1").unwrap();
        let mut form = ProductForm::from_product(original);
        form.name = "Renomeado".into();

        let saved = form.build(Some(original)).unwrap();
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.rating, original.rating);
        assert_eq!(saved.name, "Renomeado");
        assert_eq!(saved.gallery(), original.gallery());
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.build(None), Err(ProductFormError::EmptyName));

        let mut form = filled();
        form.price = "abc".into();
        assert!(matches!(form.build(None), Err(ProductFormError::InvalidPrice(_))));

        let mut form = filled();
        form.price = "-1".into();
        assert!(matches!(form.build(None), Err(ProductFormError::InvalidPrice(_))));

        let mut form = filled();
        form.stock = "3.5".into();
        assert!(matches!(form.build(None), Err(ProductFormError::InvalidStock(_))));
    }

    #[test]
    fn test_sizes_are_unique_and_uppercase() {
        let mut form = ProductForm::blank("Feminino");
        form.add_size("m");
        form.add_size(" M ");
        form.add_size("");
        form.add_size("gg");
        assert_eq!(form.sizes, vec!["M".to_string(), "GG".to_string()]);

        form.remove_size("M");
        assert_eq!(form.sizes, vec!["GG".to_string()]);
    }
}
