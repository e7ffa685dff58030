use serde::{Deserialize, Serialize};

use luxor_core::{DomainError, DomainResult, Entity, Price, ProductId};

/// A purchasable watch.
///
/// Immutable once built. Construct through [`Product::new`] or
/// [`ProductDraft::validate`], both of which reject malformed entries. Serde goes
/// through [`ProductDraft`] as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft", into = "ProductDraft")]
pub struct Product {
    id: ProductId,
    name: String,
    brand: String,
    price: Price,
    image: String,
    tags: Vec<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        tags: Vec<String>,
    ) -> DomainResult<Self> {
        if id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }

        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation(format!("product `{id}`: name cannot be empty")));
        }

        let brand = brand.into().trim().to_string();
        if brand.is_empty() {
            return Err(DomainError::validation(format!(
                "product `{id}`: brand cannot be empty"
            )));
        }

        Ok(Self {
            id,
            name,
            brand,
            price,
            image: image.into(),
            tags,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// `"<brand> <name>"`, as used in cart lines and inquiry messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Catalog entry as authored (JSON, config), before validation.
///
/// `price` is signed so a negative value surfaces as a validation error naming the
/// product rather than as an opaque parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductDraft {
    pub fn validate(self) -> DomainResult<Product> {
        let id = ProductId::parse(&self.id)?;
        let price = u64::try_from(self.price).map_err(|_| {
            DomainError::validation(format!(
                "product `{id}`: price must not be negative (got {})",
                self.price
            ))
        })?;
        Product::new(id, self.name, self.brand, Price::new(price), self.image, self.tags)
    }
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            price: i64::try_from(p.price.amount()).unwrap_or(i64::MAX),
            image: p.image.clone(),
            tags: p.tags.clone(),
        }
    }
}

impl From<Product> for ProductDraft {
    fn from(p: Product) -> Self {
        Self::from(&p)
    }
}

impl TryFrom<ProductDraft> for Product {
    type Error = DomainError;

    fn try_from(draft: ProductDraft) -> DomainResult<Self> {
        draft.validate()
    }
}
