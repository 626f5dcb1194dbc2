mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::{failure_status_code, success_status_code, ItemOperation};
pub use traits::ItemRepository;
