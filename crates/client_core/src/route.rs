use std::{fmt, str::FromStr};

use shared::domain::ProductId;
use thiserror::Error;

/// Client-side location: the product list or one product's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Product(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let segment = trimmed.trim_start_matches('/').trim_end_matches('/');
        if segment.is_empty() {
            return Ok(Self::List);
        }
        if segment.contains('/') {
            return Err(RouteError::Unknown(path.to_string()));
        }
        segment
            .parse::<i64>()
            .map(|id| Self::Product(ProductId(id)))
            .map_err(|_| RouteError::Unknown(path.to_string()))
    }

    pub fn path(self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Product(product_id) => format!("/{}", product_id.0),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_and_product_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::List));
        assert_eq!(Route::parse(""), Ok(Route::List));
        assert_eq!(Route::parse("/17"), Ok(Route::Product(ProductId(17))));
        assert_eq!(Route::parse("17/"), Ok(Route::Product(ProductId(17))));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(Route::parse("/products/abc").is_err());
        assert!(Route::parse("/abc").is_err());
        assert!(Route::parse("/1/2").is_err());
    }

    #[test]
    fn display_matches_parse() {
        for route in [Route::List, Route::Product(ProductId(1_700_000_000_123))] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }
}
