pub mod error;
pub mod health;
pub mod itens;
pub mod root;

pub use error::ItemError;
