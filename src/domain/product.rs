use {
    super::{error::AdminError, id::DocumentId},
    serde::{Deserialize, Deserializer, Serialize},
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Proprietary,
    Classical,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proprietary => "proprietary",
            Self::Classical => "classical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = AdminError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "proprietary" => Ok(Self::Proprietary),
            "classical" => Ok(Self::Classical),
            other => Err(AdminError::Validation(format!(
                "unknown product category: {other}"
            ))),
        }
    }
}

/// One row of a product's price list (serial number, pack quantity, price).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub sr_no: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub qty: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
}

impl PriceRow {
    pub fn is_blank(&self) -> bool {
        [&self.sr_no, &self.qty, &self.price]
            .iter()
            .all(|v| v.is_empty())
    }

    fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProprietaryFields {
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub price_list: Vec<PriceRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassicalFields {
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub dosage_anupan: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub price_list: Vec<PriceRow>,
}

/// Product record as returned by `/api/products` with both field groups populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "documentId")]
    pub document_id: DocumentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub proprietary_fields: Option<ProprietaryFields>,
    #[serde(default)]
    pub classical_fields: Option<ClassicalFields>,
}

/// Create/update form state for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub proprietary_fields: Option<ProprietaryFields>,
    #[serde(default)]
    pub classical_fields: Option<ClassicalFields>,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::Validation("product name is required".into()));
        }
        Ok(())
    }

    /// Body for `POST/PUT /api/products`: only the selected category's field
    /// group is sent (blank price rows dropped, row ids stripped); the other
    /// group is sent as `null` so a category switch clears it.
    pub fn to_payload(&self) -> serde_json::Value {
        let (proprietary, classical) = match self.category {
            Category::Proprietary => {
                let mut fields = self.proprietary_fields.clone().unwrap_or_default();
                fields.price_list = outgoing_rows(&fields.price_list);
                (serde_json::json!(fields), serde_json::Value::Null)
            }
            Category::Classical => {
                let mut fields = self.classical_fields.clone().unwrap_or_default();
                fields.price_list = outgoing_rows(&fields.price_list);
                (serde_json::Value::Null, serde_json::json!(fields))
            }
        };

        serde_json::json!({
            "data": {
                "name": self.name.trim(),
                "category": self.category.as_str(),
                "description": self.description,
                "proprietary_fields": proprietary,
                "classical_fields": classical,
            }
        })
    }
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            category: p.category.unwrap_or(Category::Proprietary),
            description: p.description.clone().unwrap_or_default(),
            proprietary_fields: p.proprietary_fields.clone(),
            classical_fields: p.classical_fields.clone(),
        }
    }
}

fn outgoing_rows(rows: &[PriceRow]) -> Vec<PriceRow> {
    rows.iter()
        .filter(|row| !row.is_blank())
        .map(PriceRow::without_id)
        .collect()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
