//! # API crate — typed REST client for the attendance tracker backend
//!
//! Everything the frontend knows about the backend lives here: the wire
//! types mirrored from its JSON responses, a shared [`ApiClient`] transport
//! that attaches the bearer token to every authenticated request, and one
//! thin wrapper module per backend resource.
//!
//! ## Modules
//!
//! | Module | Covers |
//! |--------|--------|
//! | [`client`] | [`ApiClient`]: base URL, token slot, request helpers |
//! | [`error`] | [`ApiError`]: transport / status / decode taxonomy |
//! | [`types`] | Plain records mirrored from API responses |
//! | [`auth`] | `POST /auth/register`, `POST /auth/login`, `GET /auth/me` |
//! | [`games`] | `GET /games/…` (list, get, search, seasons, count, by team) |
//! | [`teams`] | `GET /teams/` |
//! | [`attendance`] | `POST/GET/PATCH/DELETE /attendance/…` and `/attendance/stats` |
//! | [`admin`] | `POST /admin/refresh-data`, `GET /admin/users`, promote/demote |
//!
//! The wrappers are direct passthroughs: build query parameters (omitting
//! absent values), issue the call, return the parsed body unchanged. No
//! retries, no reshaping, no validation beyond what the type declarations
//! assert. Errors propagate as [`ApiError`].

pub mod admin;
pub mod attendance;
pub mod auth;
mod client;
mod error;
pub mod games;
pub mod teams;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    Attendance, AttendanceCreate, AttendanceStats, AttendanceUpdate, BulkAttendanceItem,
    BulkAttendanceRequest, BulkAttendanceResponse, Game, GameFilters, GameListItem, RefreshResult,
    SeasonInfo, Team, TeamFilters, Token, User, Venue,
};
