// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod block;
pub mod builder;
pub mod category;
pub mod repositories;
pub mod template;
