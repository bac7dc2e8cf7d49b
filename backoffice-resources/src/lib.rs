//! Resource data access for the Backoffice SDK
//!
//! Typed clients for the admin backend's resources, built on
//! [`backoffice_http::ApiClient`]. The crate provides:
//!
//! - **Stale-while-revalidate reads.** [`ResourceClient::list`] and
//!   [`ResourceClient::detail`] answer from a shared [`ResourceCache`];
//!   entries past their freshness window are returned immediately while one
//!   background task refreshes them.
//! - **Envelope normalization.** List and detail payloads arrive in several
//!   historical shapes (bare arrays, `results`, nested `data` objects);
//!   [`envelope`] flattens them all into [`Page`] and plain entities.
//! - **Write-through invalidation.** Create, update, and delete drop every
//!   cached entry for the resource before returning, so the next read
//!   refetches.
//! - **Session-generation fencing.** Cached entries remember the session
//!   generation they were fetched under; after a sign-out or credential swap
//!   they are treated as misses rather than leaked across accounts.
//! - **Table controllers.** [`TableController`] drives a paginated,
//!   debounced-search listing and publishes [`TableState`] over a watch
//!   channel.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_resources::{AdminApi, ListQuery};
//!
//! let admin = AdminApi::new(api);
//!
//! let products = admin.products();
//! let page = products
//!     .list(&ListQuery::default().page(1).search("shampoo"))
//!     .await?;
//! println!("{} of {} products", page.len(), page.total);
//!
//! // Tables wrap a client with debounced search and pagination.
//! let table = admin.table(admin.orders());
//! let mut states = table.subscribe();
//! table.refresh();
//! ```

pub mod admin;
pub mod cache;
pub mod client;
pub mod descriptor;
pub mod entities;
pub mod envelope;
pub mod error;
pub mod page;
pub mod policy;
pub mod query;
pub mod table;

pub use admin::AdminApi;
pub use cache::{EntryKind, Freshness, ResourceCache};
pub use client::ResourceClient;
pub use descriptor::{ResourceDescriptor, UpdateMethod};
pub use entities::{
    BulkOrder, Category, Coupon, CouponKind, Order, OrderItem, OrderStatus, PartnershipRequest,
    PartnershipStatus, Product, StatusChange, SuggestedProduct, Testimonial, User, WhatsappLead,
};
pub use envelope::{normalize_entity, normalize_page};
pub use error::{ResourceError, Result};
pub use page::Page;
pub use policy::ResourcePolicy;
pub use query::ListQuery;
pub use table::{TableController, TableState, DEFAULT_DEBOUNCE};
