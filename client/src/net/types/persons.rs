//! Family-records entities owned by the personal-info services.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Relation to the household owner (e.g. "self", "spouse", "child").
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update body for [`Person`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Person> for PersonInput {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            gender: p.gender.clone(),
            birth_date: p.birth_date.clone(),
            id_number: p.id_number.clone(),
            phone: p.phone.clone(),
            email: p.email.clone(),
            relation: p.relation.clone(),
            notes: p.notes.clone(),
        }
    }
}

/// Identity document (ID card, passport, license, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::id")]
    pub person_id: String,
    pub doc_type: String,
    pub number: String,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    pub person_id: String,
    pub doc_type: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::id")]
    pub person_id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    pub street: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_primary: bool,
}

impl Address {
    /// Single-line rendering from the most to the least specific part.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            Some(self.street.as_str()),
            self.district.as_deref(),
            self.city.as_deref(),
            self.province.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressInput {
    pub person_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub is_primary: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::id")]
    pub person_id: String,
    pub bank_name: String,
    pub account_number: String,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BankAccount {
    /// Account number with all but the last four characters hidden.
    #[must_use]
    pub fn masked_number(&self) -> String {
        let chars: Vec<char> = self.account_number.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() <= 4 {
            return chars.into_iter().collect();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("**** {tail}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountInput {
    pub person_id: String,
    pub bank_name: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Contact channel kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Phone,
    Email,
    Wechat,
    #[serde(other)]
    Other,
}

impl ContactKind {
    pub const ALL: [ContactKind; 4] = [Self::Phone, Self::Email, Self::Wechat, Self::Other];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Wechat => "wechat",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "phone" => Self::Phone,
            "email" => Self::Email,
            "wechat" => Self::Wechat,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::id")]
    pub person_id: String,
    #[serde(default)]
    pub kind: ContactKind,
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_primary: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInput {
    pub person_id: String,
    pub kind: ContactKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub is_primary: bool,
}
