//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    ChatMessageRepository, HealthCheck, IssueRepository, MessageQuery, ProxyLinkRepository,
    RepoResult, UserRepository,
};
