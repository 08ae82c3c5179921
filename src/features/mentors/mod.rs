//! Mentor catalog feature.
//!
//! Mentors are created, updated, and soft-deleted by administrators and
//! exposed through paginated, searched, and score-ranked read paths.
//! Inactive mentors never appear in any read.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/mentors` | No | List mentors, newest update first |
//! | GET | `/api/mentors/search` | No | Full-text search |
//! | GET | `/api/mentors/search/like` | No | Substring search fallback |
//! | GET | `/api/mentors/recommended` | No | Score-ranked list |
//! | GET | `/api/mentors/recommended/paged` | No | Score-ranked page |
//! | POST | `/api/mentors/lookup` | No | Batch lookup by ids |
//! | GET | `/api/mentors/{id}` | No | Get one mentor |
//! | POST | `/api/mentors` | Admin | Create mentor |
//! | PUT | `/api/mentors/{id}` | Admin | Update mentor |
//! | DELETE | `/api/mentors/{id}` | Admin | Soft-delete mentor |
//! | GET | `/api/mentors/{id}/subscription` | Yes | Subscription status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MentorService;
