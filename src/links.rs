//! Absolute hypermedia links built from the public origin and the route templates.

use crate::routes::paths::{self, BASE_PATH};

#[derive(Clone, Debug)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    /// `origin` is scheme + host + port, e.g. `http://api.test:8181`.
    pub fn new(origin: &str) -> Self {
        LinkBuilder {
            base: format!("{}{}", origin.trim_end_matches('/'), BASE_PATH),
        }
    }

    /// Versioned base URL, e.g. `http://api.test:8181/v1`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Link to a route without parameters.
    pub fn route(&self, template: &str) -> String {
        format!("{}{}", self.base, template)
    }

    /// Link to a route with its `{id}` filled in.
    pub fn entity(&self, template: &str, id: i64) -> String {
        format!("{}{}", self.base, paths::fill(template, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::paths::{BUILDER, LISTINGS};

    #[test]
    fn builds_absolute_links() {
        let links = LinkBuilder::new("http://api.test:8181/");
        assert_eq!(links.base(), "http://api.test:8181/v1");
        assert_eq!(links.route(LISTINGS), "http://api.test:8181/v1/listings");
        assert_eq!(links.entity(BUILDER, 4), "http://api.test:8181/v1/builder/4");
    }
}
