use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use uuid::Uuid;

use crate::features::auth;
use crate::features::mentors::{dtos as mentors_dtos, handlers as mentors_handlers};
use crate::features::subscriptions::{
    dtos as subscriptions_dtos, handlers as subscriptions_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Mentors (public reads)
        mentors_handlers::mentor_handler::list_mentors,
        mentors_handlers::mentor_handler::search_mentors,
        mentors_handlers::mentor_handler::search_mentors_like,
        mentors_handlers::mentor_handler::recommended_mentors,
        mentors_handlers::mentor_handler::recommended_mentors_paged,
        mentors_handlers::mentor_handler::lookup_mentors,
        mentors_handlers::mentor_handler::get_mentor,
        // Mentors (admin + authenticated)
        mentors_handlers::mentor_handler::create_mentor,
        mentors_handlers::mentor_handler::update_mentor,
        mentors_handlers::mentor_handler::delete_mentor,
        mentors_handlers::mentor_handler::get_mentor_subscription,
        // Subscriptions
        subscriptions_handlers::subscription_handler::get_my_topics,
        subscriptions_handlers::subscription_handler::subscribe,
        subscriptions_handlers::subscription_handler::unsubscribe,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            // Mentors
            mentors_dtos::CreateMentorDto,
            mentors_dtos::UpdateMentorDto,
            mentors_dtos::MentorIdsDto,
            mentors_dtos::MentorResponseDto,
            mentors_dtos::MentorSummaryDto,
            mentors_dtos::MentorSubscriptionDto,
            ApiResponse<mentors_dtos::MentorResponseDto>,
            ApiResponse<Vec<mentors_dtos::MentorSummaryDto>>,
            ApiResponse<mentors_dtos::MentorSubscriptionDto>,
            // Subscriptions
            subscriptions_dtos::SubscriptionResponseDto,
            ApiResponse<subscriptions_dtos::SubscriptionResponseDto>,
            ApiResponse<Vec<Uuid>>,
        )
    ),
    tags(
        (name = "mentors", description = "Mentor catalog: CRUD, search, and recommendations"),
        (name = "subscriptions", description = "Per-user topic subscriptions"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "MentorHub API",
        version = "0.1.0",
        description = "API documentation for MentorHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
