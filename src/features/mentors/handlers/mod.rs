pub mod mentor_handler;
