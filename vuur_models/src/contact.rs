use serde::{Deserialize, Serialize};

/// One user-filled contact form, serialized for transport and discarded
/// after the notification email has been rendered from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    /// Required, must be non-empty.
    pub first_name: String,
    /// Optional, defaults to empty.
    pub last_name: String,
    /// Required, must be non-empty. No format validation is performed
    /// beyond presence.
    pub email: String,
    /// Optional.
    pub phone: String,
    /// Selected offering categories, in selection order. Duplicates are
    /// harmless.
    pub services: Vec<ServiceCategory>,
}

impl ContactSubmission {
    /// `true` if both required fields are present.
    pub fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty() && !self.email.is_empty()
    }

    /// First and last name joined with a space, without a trailing space
    /// when the last name is empty.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Closed enumeration of the services a prospect can indicate interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Website,
    Social,
    RealEstate,
    Branding,
}

impl ServiceCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Social => "Social",
            Self::RealEstate => "Real Estate",
            Self::Branding => "Branding",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_category_wire_identifiers() {
        for (category, identifier) in [
            (ServiceCategory::Website, "\"website\""),
            (ServiceCategory::Social, "\"social\""),
            (ServiceCategory::RealEstate, "\"real-estate\""),
            (ServiceCategory::Branding, "\"branding\""),
        ] {
            assert_eq!(serde_json::to_string(&category).unwrap(), identifier);
            assert_eq!(
                serde_json::from_str::<ServiceCategory>(identifier).unwrap(),
                category
            );
        }
    }

    #[test]
    fn unknown_service_category_is_rejected() {
        serde_json::from_str::<ServiceCategory>("\"seo\"").unwrap_err();
    }

    #[test]
    fn full_name_without_last_name_has_no_trailing_space() {
        let submission = ContactSubmission {
            first_name: "Jane".into(),
            ..Default::default()
        };
        assert_eq!(submission.full_name(), "Jane");
    }

    #[test]
    fn full_name_with_last_name() {
        let submission = ContactSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        assert_eq!(submission.full_name(), "Jane Doe");
    }

    #[test]
    fn required_fields_presence() {
        let mut submission = ContactSubmission {
            first_name: "Jane".into(),
            email: "jane@x.com".into(),
            ..Default::default()
        };
        assert!(submission.has_required_fields());

        submission.first_name.clear();
        assert!(!submission.has_required_fields());

        submission.first_name = "Jane".into();
        submission.email.clear();
        assert!(!submission.has_required_fields());
    }
}
