//! Application services — one per resource.

pub mod item_service;
pub mod store_service;
pub mod tag_service;

pub use item_service::ItemService;
pub use store_service::StoreService;
pub use tag_service::TagService;
