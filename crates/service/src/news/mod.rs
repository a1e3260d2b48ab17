pub mod domain;
pub mod repository;
pub mod service;

pub use domain::NewsDto;
pub use repository::NewsRepository;
pub use service::NewsService;
