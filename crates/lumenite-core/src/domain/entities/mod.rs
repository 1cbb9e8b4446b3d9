pub mod error_page;
pub mod handler;
pub mod route;
pub mod route_table;

pub use error_page::{ErrorMessage, ErrorPage};
pub use handler::HandlerDescriptor;
pub use route::{Route, RouteSpec};
pub use route_table::RouteTable;
