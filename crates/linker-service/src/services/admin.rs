//! Admin service
//!
//! Aggregate statistics for the dashboard.

use linker_core::entities::{IssueStatus, ProxyStatus, Role, UserStatus};
use tracing::instrument;

use crate::dto::{IssueStats, MessageStats, ProxyStats, StatsResponse, UserStats};

use super::context::ServiceContext;
use super::ensure_admin;
use super::error::ServiceResult;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count rows across all entities (admin only)
    #[instrument(skip(self))]
    pub async fn stats(&self, role: Role) -> ServiceResult<StatsResponse> {
        ensure_admin(role)?;

        let users = self.ctx.user_repo();
        let messages = self.ctx.chat_message_repo();
        let issues = self.ctx.issue_repo();
        let proxies = self.ctx.proxy_link_repo();

        let (
            total_users,
            pending_users,
            approved_users,
            total_messages,
            total_issues,
            open_issues,
            resolved_issues,
            total_proxies,
            active_proxies,
        ) = tokio::try_join!(
            users.count(None),
            users.count(Some(UserStatus::Pending)),
            users.count(Some(UserStatus::Approved)),
            messages.count(),
            issues.count(None),
            issues.count(Some(IssueStatus::Open)),
            issues.count(Some(IssueStatus::Resolved)),
            proxies.count(None),
            proxies.count(Some(ProxyStatus::Active)),
        )?;

        Ok(StatsResponse {
            users: UserStats {
                total: total_users,
                pending: pending_users,
                approved: approved_users,
            },
            messages: MessageStats {
                total: total_messages,
            },
            issues: IssueStats {
                total: total_issues,
                open: open_issues,
                resolved: resolved_issues,
            },
            proxies: ProxyStats {
                total: total_proxies,
                active: active_proxies,
            },
        })
    }
}
