use serde::Deserialize;
use vuur_models::contact::{ContactSubmission, ServiceCategory};

/// Wire shape of `POST /api/contact`. Every field defaults so that absent
/// required fields surface as a descriptive validation error instead of a
/// deserialization failure; unknown service identifiers are still rejected
/// at the boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub services: Vec<ServiceCategory>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            services: value.services,
        }
    }
}
