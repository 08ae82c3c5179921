//! Subscription feature.
//!
//! A user holds at most one subscription, which is a set of topics; topics
//! are mentor ids. The mentor catalog consults this feature read-only to
//! answer "is this mentor in the user's subscribed topics".
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/subscriptions/me` | Yes | Caller's subscribed topics |
//! | POST | `/api/subscriptions/topics/{mentor_id}` | Yes | Subscribe |
//! | DELETE | `/api/subscriptions/topics/{mentor_id}` | Yes | Unsubscribe |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SubscriptionService;
