pub use catalog_service::CatalogService;

mod catalog_service;
