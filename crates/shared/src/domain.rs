use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);
id_newtype!(CommentId);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Free-form weight label such as `200g`.
///
/// Serialized as a JSON string. Numeric JSON values are accepted on input and
/// kept as their decimal text, so `250` and `"250"` load the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Weight(String);

impl Weight {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Weight {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Weight {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawWeight {
            Label(String),
            Number(serde_json::Number),
        }

        Ok(match RawWeight::deserialize(deserializer)? {
            RawWeight::Label(label) => Self(label),
            RawWeight::Number(number) => Self(number.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(alias = "pruductId")]
    pub product_id: ProductId,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub image_url: String,
    pub name: String,
    pub count: u32,
    pub size: Size,
    pub weight: Weight,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Product {
    pub fn comment(&self, comment_id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    pub fn has_comment(&self, comment_id: CommentId) -> bool {
        self.comment(comment_id).is_some()
    }

    /// Removes the comment with `comment_id`, keeping the order of the rest.
    pub fn remove_comment(&mut self, comment_id: CommentId) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == comment_id)?;
        Some(self.comments.remove(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("name must not be blank")]
    BlankName,
    #[error("image url must not be blank")]
    BlankImageUrl,
    #[error("weight must not be blank")]
    BlankWeight,
    #[error("count must be greater than zero")]
    NonPositiveCount,
    #[error("count is too large")]
    CountOutOfRange,
    #[error("width must be greater than zero")]
    NonPositiveWidth,
    #[error("height must be greater than zero")]
    NonPositiveHeight,
}

/// Add-form contents for a product that has no identifier yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub image_url: String,
    pub count: i64,
    pub size: Size,
    pub weight: Weight,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::BlankName);
        }
        if self.image_url.trim().is_empty() {
            return Err(DraftError::BlankImageUrl);
        }
        if self.weight.is_blank() {
            return Err(DraftError::BlankWeight);
        }
        if self.count <= 0 {
            return Err(DraftError::NonPositiveCount);
        }
        if u32::try_from(self.count).is_err() {
            return Err(DraftError::CountOutOfRange);
        }
        // `!(x > 0.0)` also rejects NaN.
        if !(self.size.width > 0.0) {
            return Err(DraftError::NonPositiveWidth);
        }
        if !(self.size.height > 0.0) {
            return Err(DraftError::NonPositiveHeight);
        }
        Ok(())
    }

    pub fn into_product(self, id: ProductId) -> Result<Product, DraftError> {
        self.validate()?;
        let count = u32::try_from(self.count).map_err(|_| DraftError::CountOutOfRange)?;
        Ok(Product {
            id,
            image_url: self.image_url,
            name: self.name,
            count,
            size: self.size,
            weight: self.weight,
            comments: Vec::new(),
        })
    }
}

/// Edit-form contents. Applying an edit never touches the id or comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    pub name: String,
    pub image_url: String,
    pub count: u32,
    pub size: Size,
    pub weight: Weight,
}

impl ProductEdit {
    pub fn apply_to(&self, product: &mut Product) {
        product.name.clone_from(&self.name);
        product.image_url.clone_from(&self.image_url);
        product.count = self.count;
        product.size = self.size;
        product.weight = self.weight.clone();
    }
}

impl From<&Product> for ProductEdit {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            count: product.count,
            size: product.size,
            weight: product.weight.clone(),
        }
    }
}
