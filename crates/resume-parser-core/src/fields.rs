use serde::{Deserialize, Deserializer};

/// One of the structured fields the extraction service returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    College,
    Degree,
    GraduatingYear,
}

impl Field {
    /// Display order of the result panel.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::College,
        Field::Degree,
        Field::GraduatingYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::College => "College",
            Self::Degree => "Degree",
            Self::GraduatingYear => "Graduation Year",
        }
    }

    /// Key used in the service's JSON body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::College => "college",
            Self::Degree => "degree",
            Self::GraduatingYear => "graduating_year",
        }
    }
}

/// Fields extracted from a resume. `None` means absent or empty.
///
/// Deserialization is the service-boundary check: the body must be an
/// object, each known key may hold a string, number, boolean or null, and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractedFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub college: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub graduating_year: Option<String>,
}

impl ExtractedFields {
    /// Parse a success body from the extraction service.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        use serde::de::Error;

        // Derived struct impls also accept JSON arrays; only objects are valid here.
        match serde_json::from_slice::<serde_json::Value>(body)? {
            value @ serde_json::Value::Object(_) => Self::deserialize(value),
            _ => Err(serde_json::Error::custom("expected a JSON object")),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::College => &self.college,
            Field::Degree => &self.degree,
            Field::GraduatingYear => &self.graduating_year,
        };
        value.as_deref()
    }

    /// Every field in display order with its value.
    pub fn entries(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().all(|(_, v)| v.is_none())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    let text = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other @ (Value::Array(_) | Value::Object(_)) => {
            return Err(D::Error::custom(format!(
                "expected a string field, found {}",
                if other.is_array() { "an array" } else { "an object" }
            )));
        }
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
