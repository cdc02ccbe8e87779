//! Application state and its reducer.
//!
//! All mutation goes through [`AppState::apply`]; the router only ever sees a
//! shared reference.

pub mod persist;

use serde::{Deserialize, Serialize};

use crate::domain::cart::Cart;
use crate::domain::catalog::{Catalog, CatalogError, CatalogFilter, Product};
use crate::system::auth::{Session, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login(User),
    Logout,
    AddToCart(Product),
    RemoveFromCart(String),
    UpdateCartQuantity { product_id: String, quantity: u32 },
    ClearCart,
    SelectCategory(String),
    SetSearchQuery(String),
    AddProduct(Product),
    UpdateProduct(Product),
    DeleteProduct(String),
    AddCategory(String),
    RenameCategory { from: String, to: String },
    DeleteCategory(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub session: Session,
    pub cart: Cart,
    pub catalog: Catalog,
    pub filter: CatalogFilter,
}

impl AppState {
    /// State restored from persisted user and cart; catalog starts from the seed.
    pub fn restored(user: Option<User>, cart: Cart) -> Self {
        Self {
            session: Session { user },
            cart,
            ..Self::default()
        }
    }

    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filtered(&self.filter)
    }

    /// Session transitions cannot fail, unlike catalog edits.
    pub fn sign_in(&mut self, user: User) {
        self.session = Session::signed_in(user);
    }

    /// Drops the principal and clears category/search filters; the cart stays.
    pub fn sign_out(&mut self) {
        self.session = Session::anonymous();
        self.filter.reset();
    }

    pub fn apply(&mut self, action: Action) -> Result<(), CatalogError> {
        match action {
            Action::Login(user) => self.sign_in(user),
            Action::Logout => self.sign_out(),
            Action::AddToCart(product) => self.cart.add(product),
            Action::RemoveFromCart(id) => self.cart.remove(&id),
            Action::UpdateCartQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(&product_id, quantity),
            Action::ClearCart => self.cart.clear(),
            Action::SelectCategory(category) => {
                self.filter.category = category;
                self.filter.query.clear();
            }
            Action::SetSearchQuery(query) => self.filter.query = query,
            Action::AddProduct(product) => self.catalog.add_product(product),
            Action::UpdateProduct(product) => self.catalog.update_product(product)?,
            Action::DeleteProduct(id) => {
                self.catalog.delete_product(&id)?;
                self.cart.remove(&id);
            }
            Action::AddCategory(name) => {
                self.catalog.add_category(&name)?;
            }
            Action::RenameCategory { from, to } => {
                let renamed = self.catalog.rename_category(&from, &to)?;
                if self.filter.category == from {
                    self.filter.category = renamed;
                }
            }
            Action::DeleteCategory(name) => {
                self.catalog.delete_category(&name)?;
                if self.filter.category == name {
                    self.filter.category = CatalogFilter::default().category;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(state: &AppState, id: &str) -> Product {
        state.catalog.find(id).unwrap().clone()
    }

    #[test]
    fn test_login_logout_resets_filter() {
        let mut state = AppState::default();
        state
            .apply(Action::Login(User::from_email("ana@exemplo.com")))
            .unwrap();
        assert!(state.session.is_authenticated());

        state.apply(Action::SelectCategory("Feminino".into())).unwrap();
        state.apply(Action::SetSearchQuery("seda".into())).unwrap();
        state.apply(Action::Logout).unwrap();

        assert!(!state.session.is_authenticated());
        assert_eq!(state.filter, CatalogFilter::default());
    }

    #[test]
    fn test_session_transitions_are_infallible() {
        let mut state = AppState::default();
        state.sign_in(User::from_email("ana@exemplo.com"));
        assert_eq!(state.session.role(), Some(crate::system::auth::Role::Customer));

        state.filter.query = "seda".into();
        state.sign_out();
        assert!(!state.session.is_authenticated());
        assert!(!state.filter.is_searching());
    }

    #[test]
    fn test_logout_keeps_cart() {
        let mut state = AppState::default();
        let p = product(&state, "1");
        state.apply(Action::AddToCart(p)).unwrap();
        state.apply(Action::Logout).unwrap();
        assert!(!state.cart_is_empty());
    }

    #[test]
    fn test_select_category_clears_search() {
        let mut state = AppState::default();
        state.apply(Action::SetSearchQuery("linho".into())).unwrap();
        state.apply(Action::SelectCategory("Masculino".into())).unwrap();
        assert!(!state.filter.is_searching());
        assert_eq!(state.visible_products().len(), 2);
    }

    #[test]
    fn test_delete_product_drops_cart_line() {
        let mut state = AppState::default();
        let p = product(&state, "2");
        state.apply(Action::AddToCart(p)).unwrap();
        state.apply(Action::DeleteProduct("2".into())).unwrap();
        assert!(state.cart_is_empty());
        assert!(state.catalog.find("2").is_none());
    }

    #[test]
    fn test_rename_selected_category_follows() {
        let mut state = AppState::default();
        state.apply(Action::SelectCategory("Feminino".into())).unwrap();
        state
            .apply(Action::RenameCategory {
                from: "Feminino".into(),
                to: "Mulher".into(),
            })
            .unwrap();
        assert_eq!(state.filter.category, "Mulher");
        assert_eq!(state.visible_products().len(), 1);
    }

    #[test]
    fn test_delete_selected_category_resets_selection() {
        let mut state = AppState::default();
        state.apply(Action::SelectCategory("Promoção".into())).unwrap();
        state.apply(Action::DeleteCategory("Promoção".into())).unwrap();
        assert_eq!(state.filter.category, "Todos");
    }

    #[test]
    fn test_failed_action_reports_error() {
        let mut state = AppState::default();
        assert_eq!(
            state.apply(Action::DeleteCategory("Todos".into())),
            Err(CatalogError::Protected("Todos".into()))
        );
        assert!(state.apply(Action::AddCategory(" ".into())).is_err());
    }
}
