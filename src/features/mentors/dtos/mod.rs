mod mentor_dto;

pub use mentor_dto::{
    CreateMentorDto, MentorIdsDto, MentorResponseDto, MentorSubscriptionDto, MentorSummaryDto,
    RecommendedQuery, SearchQuery, UpdateMentorDto,
};
