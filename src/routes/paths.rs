//! Route templates. The router registers these and `LinkBuilder` fills them in, so links and
//! routes come from the same strings.

pub const BASE_PATH: &str = "/v1";

pub const ROOT: &str = "/";
pub const LISTINGS: &str = "/listings";
pub const FEATURED_LISTINGS: &str = "/listings/featured";
pub const LISTING: &str = "/listing/{id}";
pub const LISTING_GALLERY: &str = "/listing/{id}/gallery";
pub const LISTING_FLOORPLANS: &str = "/listing/{id}/floorplans";
pub const LISTING_INFO_REQUEST: &str = "/listing/{id}/infoRequest";
pub const BUILDERS: &str = "/builders";
pub const FEATURED_BUILDERS: &str = "/builders/featured";
pub const BUILDER: &str = "/builder/{id}";
pub const BUILDER_LISTINGS: &str = "/builder/{id}/listings";

const ID_PLACEHOLDER: &str = "{id}";

/// Versioned router path for a template, in axum's `:param` syntax.
pub fn axum_path(template: &str) -> String {
    format!("{}{}", BASE_PATH, template.replace(ID_PLACEHOLDER, ":id"))
}

/// Template with `{id}` replaced.
pub fn fill(template: &str, id: i64) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_translate_to_router_syntax() {
        assert_eq!(axum_path(LISTING_GALLERY), "/v1/listing/:id/gallery");
        assert_eq!(axum_path(BUILDERS), "/v1/builders");
        assert_eq!(fill(BUILDER_LISTINGS, 12), "/builder/12/listings");
    }
}
