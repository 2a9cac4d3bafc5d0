pub mod send;
pub mod status;

/// Endpoint from the command line, falling back to the config file
pub fn resolve_endpoint(flag: Option<String>, config: &crate::config::Config) -> String {
    flag.or_else(|| config.endpoint.clone()).unwrap_or_default()
}
