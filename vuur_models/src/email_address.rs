use std::str::FromStr;

use serde::{de, Deserialize, Serialize};

/// A bare email address, e.g. `hello@vuursocial.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(pub lettre::Address);

/// An email address with an optional display name, e.g.
/// `VUUR Contact Form <no-reply@vuursocial.com>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: String) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox {
            name: Some(name),
            email: self.0,
        })
    }
}

impl EmailAddressWithName {
    pub fn into_email_address(self) -> EmailAddress {
        EmailAddress(self.0.email)
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(value: EmailAddress) -> Self {
        Self(lettre::message::Mailbox {
            name: None,
            email: value.0,
        })
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl Serialize for EmailAddressWithName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailAddressWithName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mailbox_with_display_name() {
        let mailbox: EmailAddressWithName = "VUUR Contact Form <no-reply@vuursocial.com>"
            .parse()
            .unwrap();
        assert_eq!(mailbox.0.name.as_deref(), Some("VUUR Contact Form"));
        assert_eq!(
            mailbox.into_email_address().as_str(),
            "no-reply@vuursocial.com"
        );
    }

    #[test]
    fn deserialize_from_toml_style_string() {
        let address: EmailAddress =
            serde_json::from_str("\"felipe@vuursocial.com\"").unwrap();
        assert_eq!(address.as_str(), "felipe@vuursocial.com");

        serde_json::from_str::<EmailAddress>("\"not an address\"").unwrap_err();
    }
}
