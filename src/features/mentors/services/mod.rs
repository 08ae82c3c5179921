mod mentor_service;

pub use mentor_service::MentorService;
