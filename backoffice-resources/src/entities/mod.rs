//! Typed backend entities
//!
//! Flat records mirroring the backend's fields: camelCase on the wire,
//! `_id` accepted for ids, lenient defaults so a sparse record still
//! decodes. Money fields are [`rust_decimal::Decimal`], decoded from the
//! backend's JSON numbers.

mod bulk_orders;
mod categories;
mod coupons;
mod leads;
mod orders;
mod partnership;
mod products;
mod suggested;
mod testimonials;
mod users;

pub use bulk_orders::BulkOrder;
pub use categories::Category;
pub use coupons::{Coupon, CouponKind};
pub use leads::WhatsappLead;
pub use orders::{Order, OrderItem, OrderStatus, StatusChange};
pub use partnership::{PartnershipRequest, PartnershipStatus};
pub use products::Product;
pub use suggested::SuggestedProduct;
pub use testimonials::Testimonial;
pub use users::User;
