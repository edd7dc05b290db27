//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateIssueRequest, CreateMessageRequest, CreateProxyRequest, CreateUserRequest, LoginRequest,
    UpdateIssueRequest, UpdateProxyRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthorResponse, ChatMessageResponse, HealthResponse, IssueEnvelope, IssueResponse,
    IssueStats, IssuesResponse, LoginResponse, MessageEnvelope, MessageStats, MessagesPage,
    ProxiesResponse, ProxyEnvelope, ProxyResponse, ProxyStats, ReadinessResponse,
    StatsResponse, SuccessResponse, UserEnvelope, UserResponse, UserStats, UsersResponse,
};
