pub mod arguments;
pub mod documents;
pub mod error;
pub mod locator;
pub mod release;
pub mod version;
