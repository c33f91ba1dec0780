//! Backend endpoint configuration

use std::sync::OnceLock;

/// Base URLs of the four clinic services. Auth and staff live on the core
/// service; rooms, services and shifts each run standalone.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub core: String,
    pub rooms: String,
    pub services: String,
    pub shifts: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            core: "http://localhost:3001/api".to_string(),
            rooms: "http://localhost:3002/api".to_string(),
            services: "http://localhost:3003/api".to_string(),
            shifts: "http://localhost:3004/api".to_string(),
        }
    }
}

static ENDPOINTS: OnceLock<Endpoints> = OnceLock::new();

/// Install the endpoint configuration. Call this at startup; the first call
/// wins.
pub fn init_endpoints(endpoints: Endpoints) {
    ENDPOINTS.set(endpoints).ok();
}

/// Get the configured endpoints
pub fn get_endpoints() -> &'static Endpoints {
    ENDPOINTS.get_or_init(Endpoints::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_cover_all_four_services() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.core, "http://localhost:3001/api");
        assert_eq!(endpoints.rooms, "http://localhost:3002/api");
        assert_eq!(endpoints.services, "http://localhost:3003/api");
        assert_eq!(endpoints.shifts, "http://localhost:3004/api");
    }
}
