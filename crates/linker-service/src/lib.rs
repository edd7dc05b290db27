//! # linker-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AuthService, ChatService, HealthService, IssueService, ProxyService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
