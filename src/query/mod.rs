pub mod filter;
pub mod service;
pub mod sort;
pub mod table;

pub use service::QueryService;
pub use table::TableView;
