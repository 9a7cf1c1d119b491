//! # feed-service
//!
//! Application layer: request DTOs and their field checks, existence-check
//! helpers, the interaction validator, and one service per resource.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, HealthService, InteractionService, InteractionValidator, LookupService,
    PostService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, Verdict,
};
