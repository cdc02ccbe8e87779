pub mod checkout;
pub mod success;
