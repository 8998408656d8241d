//! REST resources: entities serialized together with their `href` and `links`.

use crate::links::LinkBuilder;
use crate::model::{Builder, Listing};
use crate::routes::paths;
use serde::Serialize;
use std::collections::BTreeMap;

pub type Links = BTreeMap<&'static str, String>;

/// Something with a canonical URL and related-resource links.
pub trait RestEntity {
    fn href(&self, links: &LinkBuilder) -> String;
    fn links(&self, links: &LinkBuilder) -> Links;
}

impl RestEntity for Builder {
    fn href(&self, links: &LinkBuilder) -> String {
        links.entity(paths::BUILDER, self.id)
    }

    fn links(&self, links: &LinkBuilder) -> Links {
        Links::from([("listings", links.entity(paths::BUILDER_LISTINGS, self.id))])
    }
}

impl RestEntity for Listing {
    fn href(&self, links: &LinkBuilder) -> String {
        links.entity(paths::LISTING, self.id)
    }

    fn links(&self, links: &LinkBuilder) -> Links {
        Links::from([
            ("requestInfo", links.entity(paths::LISTING_INFO_REQUEST, self.id)),
            ("builder", links.entity(paths::BUILDER, self.builder_id)),
            ("gallery", links.entity(paths::LISTING_GALLERY, self.id)),
            ("floorplans", links.entity(paths::LISTING_FLOORPLANS, self.id)),
        ])
    }
}

#[derive(Serialize)]
pub struct Resource<'a, T: Serialize> {
    pub href: String,
    pub links: Links,
    #[serde(flatten)]
    pub entity: &'a T,
}

impl<'a, T: RestEntity + Serialize> Resource<'a, T> {
    pub fn new(entity: &'a T, links: &LinkBuilder) -> Self {
        Resource {
            href: entity.href(links),
            links: entity.links(links),
            entity,
        }
    }
}

/// A listing plus its embedded builder, itself a linked resource.
#[derive(Serialize)]
pub struct ListingResource<'a> {
    #[serde(flatten)]
    pub listing: Resource<'a, Listing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<Resource<'a, Builder>>,
}

impl<'a> ListingResource<'a> {
    pub fn new(listing: &'a Listing, links: &LinkBuilder) -> Self {
        ListingResource {
            listing: Resource::new(listing, links),
            builder: listing.builder.as_deref().map(|b| Resource::new(b, links)),
        }
    }
}

pub fn listing_resources<'a>(listings: &'a [Listing], links: &LinkBuilder) -> Vec<ListingResource<'a>> {
    listings.iter().map(|l| ListingResource::new(l, links)).collect()
}

pub fn builder_resources<'a>(builders: &'a [Builder], links: &LinkBuilder) -> Vec<Resource<'a, Builder>> {
    builders.iter().map(|b| Resource::new(b, links)).collect()
}

/// Hypermedia root: the entry points a client starts from.
#[derive(Serialize)]
pub struct RootResource {
    pub href: String,
    pub links: Links,
}

impl RootResource {
    pub fn new(links: &LinkBuilder) -> Self {
        RootResource {
            href: links.base().to_string(),
            links: Links::from([
                ("mapListings", links.route(paths::LISTINGS)),
                ("featuredListings", links.route(paths::FEATURED_LISTINGS)),
                ("allBuilders", links.route(paths::BUILDERS)),
                ("featuredBuilders", links.route(paths::FEATURED_BUILDERS)),
            ]),
        }
    }
}
