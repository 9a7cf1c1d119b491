//! Health service

use tracing::{instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Backend readiness checks
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ping the backend; a failure is reported, never raised
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        match self.ctx.backend_health().ping().await {
            Ok(()) => ReadinessResponse::ready(true),
            Err(e) => {
                warn!(error = %e, "Backend health check failed");
                ReadinessResponse::ready(false)
            }
        }
    }
}
