mod json;
mod store;

pub use json::{LoadError, SaveError};
pub use store::{AddError, DeleteError, Store};
