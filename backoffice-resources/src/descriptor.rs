//! Resource descriptors

use backoffice_http::Method;

use crate::policy::ResourcePolicy;

/// Verb a resource's update endpoint expects. The backend is inconsistent
/// about this, so it is data, not convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

impl UpdateMethod {
    pub(crate) fn as_method(self) -> Method {
        match self {
            UpdateMethod::Put => Method::PUT,
            UpdateMethod::Patch => Method::PATCH,
        }
    }
}

/// Static description of one backend resource: where it lives, which
/// mutations it supports, and the fetch policy its reads run under.
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub base_path: &'static str,
    pub update_method: UpdateMethod,
    pub can_create: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub policy: ResourcePolicy,
}

impl ResourceDescriptor {
    /// Full-capability descriptor with PUT updates and the default policy.
    pub fn new(name: &'static str, base_path: &'static str) -> Self {
        Self {
            name,
            base_path,
            update_method: UpdateMethod::Put,
            can_create: true,
            can_update: true,
            can_delete: true,
            policy: ResourcePolicy::default(),
        }
    }

    pub fn update_with(mut self, method: UpdateMethod) -> Self {
        self.update_method = method;
        self
    }

    pub fn without_create(mut self) -> Self {
        self.can_create = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.can_create = false;
        self.can_update = false;
        self.can_delete = false;
        self
    }

    pub fn with_policy(mut self, policy: ResourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn item_path(&self, id: &str) -> String {
        format!("{}/{id}", self.base_path)
    }
}
