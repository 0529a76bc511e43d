pub mod body;
pub mod headers;

pub use body::{strip_headers, strip_html};
pub use headers::parse_headers;
