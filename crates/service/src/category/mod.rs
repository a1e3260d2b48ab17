pub mod domain;
pub mod repository;
pub mod service;

pub use domain::CategoryDto;
pub use repository::CategoryRepository;
pub use service::CategoryService;
