pub mod app_error_impl;
pub mod app_state;
pub mod request_meta;
pub mod routes;
