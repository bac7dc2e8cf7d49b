//! Resource registry
//!
//! [`AdminApi`] hands out configured [`ResourceClient`]s for every resource
//! the console manages. All clients share one [`ResourceCache`], so
//! invalidation and the session-generation check behave uniformly across
//! resources.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use backoffice_http::ApiClient;

use crate::cache::ResourceCache;
use crate::client::ResourceClient;
use crate::descriptor::{ResourceDescriptor, UpdateMethod};
use crate::entities::{
    BulkOrder, Category, Coupon, Order, PartnershipRequest, Product, SuggestedProduct,
    Testimonial, User, WhatsappLead,
};
use crate::table::TableController;

/// Registry of the backend's resources.
#[derive(Clone)]
pub struct AdminApi {
    api: ApiClient,
    cache: Arc<ResourceCache>,
}

impl AdminApi {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: Arc::new(ResourceCache::new()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    /// Builds a client for a resource this registry has no accessor for,
    /// sharing the registry's cache. Also the hook for overriding a policy.
    pub fn resource<T>(&self, descriptor: ResourceDescriptor) -> ResourceClient<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        ResourceClient::new(self.api.clone(), self.cache.clone(), descriptor)
    }

    /// Accounts. Created through registration, so no admin-side create.
    pub fn users(&self) -> ResourceClient<User> {
        self.resource(
            ResourceDescriptor::new("users", "/users")
                .update_with(UpdateMethod::Patch)
                .without_create(),
        )
    }

    pub fn products(&self) -> ResourceClient<Product> {
        self.resource(ResourceDescriptor::new("products", "/products/product"))
    }

    pub fn suggested_products(&self) -> ResourceClient<SuggestedProduct> {
        self.resource(
            ResourceDescriptor::new("suggested-products", "/products/suggested").without_create(),
        )
    }

    pub fn categories(&self) -> ResourceClient<Category> {
        self.resource(ResourceDescriptor::new(
            "categories",
            "/categories/product-category",
        ))
    }

    /// Orders update with PATCH; creation stays enabled for point-of-sale
    /// entry at the counter.
    pub fn orders(&self) -> ResourceClient<Order> {
        self.resource(ResourceDescriptor::new("orders", "/orders").update_with(UpdateMethod::Patch))
    }

    pub fn coupons(&self) -> ResourceClient<Coupon> {
        self.resource(ResourceDescriptor::new("coupons", "/coupons"))
    }

    pub fn testimonials(&self) -> ResourceClient<Testimonial> {
        self.resource(ResourceDescriptor::new(
            "testimonials",
            "/testimonials/testimonial",
        ))
    }

    pub fn whatsapp_leads(&self) -> ResourceClient<WhatsappLead> {
        self.resource(ResourceDescriptor::new("whatsapp-leads", "/leads/whatsApp-lead").read_only())
    }

    pub fn partnership_requests(&self) -> ResourceClient<PartnershipRequest> {
        self.resource(
            ResourceDescriptor::new("partnership-requests", "/partnership-requests")
                .update_with(UpdateMethod::Patch)
                .without_create(),
        )
    }

    pub fn bulk_orders(&self) -> ResourceClient<BulkOrder> {
        self.resource(
            ResourceDescriptor::new("bulk-orders", "/bulk-orders")
                .update_with(UpdateMethod::Patch)
                .without_create(),
        )
    }

    /// Wires a table controller to a resource client, reusing this API's
    /// notification hub.
    pub fn table<T>(&self, client: ResourceClient<T>) -> TableController<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        TableController::new(client, self.api.hub().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_http::HttpConfig;
    use backoffice_notify::{NotificationHub, RecordingNavigator};
    use backoffice_session::SessionStore;

    fn admin() -> AdminApi {
        let api = ApiClient::new(
            HttpConfig::new("http://localhost:4000"),
            SessionStore::in_memory(),
            NotificationHub::new(),
            Arc::new(RecordingNavigator::new()),
        )
        .expect("client");
        AdminApi::new(api)
    }

    #[test]
    fn test_descriptor_wiring() {
        let admin = admin();

        let users = admin.users();
        assert_eq!(users.descriptor().base_path, "/users");
        assert_eq!(users.descriptor().update_method, UpdateMethod::Patch);
        assert!(!users.descriptor().can_create);
        assert!(users.descriptor().can_delete);

        let products = admin.products();
        assert_eq!(products.descriptor().base_path, "/products/product");
        assert_eq!(products.descriptor().update_method, UpdateMethod::Put);
        assert!(products.descriptor().can_create);

        let leads = admin.whatsapp_leads();
        assert!(!leads.descriptor().can_create);
        assert!(!leads.descriptor().can_update);
        assert!(!leads.descriptor().can_delete);

        let orders = admin.orders();
        assert!(orders.descriptor().can_create);
        assert_eq!(orders.descriptor().update_method, UpdateMethod::Patch);
    }
}
