//! Health service
//!
//! Liveness and readiness reporting.

use chrono::Utc;
use tracing::{error, instrument};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Process is up; never touches the store
    pub fn liveness(&self, service: &str, uptime_secs: f64) -> HealthResponse {
        HealthResponse {
            status: "ok",
            timestamp: Utc::now(),
            service: service.to_string(),
            uptime: uptime_secs,
        }
    }

    /// Process can reach the database
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        match self.ctx.health_check().ping().await {
            Ok(()) => ReadinessResponse {
                status: "ready",
                database: "connected",
            },
            Err(e) => {
                error!(error = %e, "Database health check failed");
                ReadinessResponse {
                    status: "not_ready",
                    database: "disconnected",
                }
            }
        }
    }
}
