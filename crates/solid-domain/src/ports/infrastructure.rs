//! Infrastructure capabilities
//!
//! Activity logging is injected like any other capability so strategies
//! and composites never reach for a global printer.

use async_trait::async_trait;

use crate::capability::{Capability, CapabilityDescriptor};
use crate::error::Result;

/// Records what a composite did
pub trait ActivityLog: Send + Sync {
    fn record(&self, message: &str);
}

/// A remote data source
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Fetch a payload from the remote side
    async fn fetch(&self) -> Result<String>;
}

/// Capability marker for [`ActivityLog`]
pub struct ActivityLogCapability;

impl Capability for ActivityLogCapability {
    type Object = dyn ActivityLog;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "activity_log",
        description: "Records what a composite did",
        methods: &["record"],
    };
}

/// Capability marker for [`RemoteApi`]
pub struct RemoteApiCapability;

impl Capability for RemoteApiCapability {
    type Object = dyn RemoteApi;
    const DESCRIPTOR: CapabilityDescriptor = CapabilityDescriptor {
        name: "remote_api",
        description: "Fetches data from a remote source",
        methods: &["fetch"],
    };
}
