pub mod api_errors;
pub mod routes;
pub mod session_store;
pub mod strapi_client;
