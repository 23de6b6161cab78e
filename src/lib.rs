pub mod client_info;
pub mod codegen;
pub mod errors;
pub mod history;
pub mod model;
pub mod routes;
pub mod shortener;
pub mod store;
pub mod utils;
