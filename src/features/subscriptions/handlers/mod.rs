pub mod subscription_handler;
