pub mod backend_url;
pub mod bearer_token;
pub mod fetch;
pub mod get_protected_data;
pub mod request_failed;
pub mod token_provider;
