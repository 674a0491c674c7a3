pub mod backend;
pub mod cache;
pub mod error;
pub mod resource;

pub use backend::BackendClient;
pub use cache::TagCache;
pub use error::BackendError;
pub use resource::Resource;
