pub mod parameter_error_handler;
pub mod validate;

pub use parameter_error_handler::json_config;
pub use validate::{is_uuid, require_fields, require_uuid};
