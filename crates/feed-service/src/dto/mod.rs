//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs; presence of required fields is checked by the services,
//!   format rules by `validator`
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateInteractionRequest, CreatePostRequest, ListPostsQuery, LoginRequest, SignUpRequest,
    UpdateTitleQuery,
};

pub use responses::{
    HealthChecks, HealthResponse, IdentityResponse, InteractionResponse, LoginResponse,
    PostResponse, PostStatsResponse, ProfileResponse, ReadinessResponse, SessionResponse,
    SignUpResponse,
};
