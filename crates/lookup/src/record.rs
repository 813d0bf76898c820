use {
    serde::{Deserialize, Deserializer, Serialize},
    std::fmt,
};

/// Field of [`LookupRecord`] that must be present in every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Ip,
    Hostname,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ip => "ip",
            Self::Hostname => "hostname",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("key \"{0}\" should not be empty")]
    EmptyField(RequiredField),
}

/// IP information as returned by the lookup service.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct LookupRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ip: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hostname: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    /// Comma separated `latitude,longitude` pair.
    #[serde(rename = "loc")]
    pub location: Option<String>,
    /// Autonomous system number followed by the organization name.
    #[serde(rename = "org")]
    pub organization: Option<String>,
}

/// Treats `null` the same as a missing key, leaving the field empty for
/// [`LookupRecord::validate()`] to reject.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl LookupRecord {
    /// Makes sure the record carries enough information to be useful.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ip.is_empty() {
            return Err(ValidationError::EmptyField(RequiredField::Ip));
        }

        if self.hostname.is_empty() {
            return Err(ValidationError::EmptyField(RequiredField::Hostname));
        }

        Ok(())
    }
}
