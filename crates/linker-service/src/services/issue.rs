//! Issue service
//!
//! Handles issue reports and their status/priority lifecycle.

use linker_core::entities::{Authored, Issue};
use linker_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreateIssueRequest, IssueEnvelope, IssueResponse, IssuesResponse, UpdateIssueRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Issue service
pub struct IssueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IssueService<'a> {
    /// Create a new IssueService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all issues, newest first
    #[instrument(skip(self))]
    pub async fn list_issues(&self) -> ServiceResult<IssuesResponse> {
        let issues = self.ctx.issue_repo().list().await?;

        Ok(IssuesResponse {
            issues: issues.into_iter().map(IssueResponse::from).collect(),
        })
    }

    /// Get issue by ID
    #[instrument(skip(self))]
    pub async fn get_issue(&self, issue_id: Uuid) -> ServiceResult<IssueEnvelope> {
        let issue = self.find_issue(issue_id).await?;

        Ok(IssueEnvelope {
            issue: issue.into(),
        })
    }

    /// Report a new issue as `user_id`
    #[instrument(skip(self, request))]
    pub async fn create_issue(
        &self,
        user_id: Uuid,
        request: CreateIssueRequest,
    ) -> ServiceResult<IssueEnvelope> {
        let title = request.title.trim();
        let description = request.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(ServiceError::validation("Title and description are required"));
        }

        let author = UserService::new(self.ctx).get_user_entity(user_id).await?;

        let issue = Issue::new(
            Uuid::new_v4(),
            user_id,
            title.to_string(),
            description.to_string(),
            request.priority.unwrap_or_default(),
        );

        self.ctx.issue_repo().create(&issue).await?;

        info!(issue_id = %issue.id, priority = %issue.priority, "Issue reported");

        Ok(IssueEnvelope {
            issue: Authored::new(issue, author.summary()).into(),
        })
    }

    /// Change status and/or priority
    #[instrument(skip(self, request))]
    pub async fn update_issue(
        &self,
        issue_id: Uuid,
        request: UpdateIssueRequest,
    ) -> ServiceResult<IssueEnvelope> {
        let mut issue = self.find_issue(issue_id).await?;

        if issue.item.apply_changes(request.status, request.priority) {
            self.ctx.issue_repo().update(&issue.item).await?;
            info!(issue_id = %issue_id, status = %issue.item.status, "Issue updated");
        }

        Ok(IssueEnvelope {
            issue: issue.into(),
        })
    }

    async fn find_issue(&self, issue_id: Uuid) -> ServiceResult<Authored<Issue>> {
        self.ctx
            .issue_repo()
            .find_by_id(issue_id)
            .await?
            .ok_or_else(|| DomainError::IssueNotFound(issue_id).into())
    }
}
