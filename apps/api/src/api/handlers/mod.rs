// HTTP handlers, one module per resource

pub mod blocks;
pub mod categories;
pub mod health;
pub mod templates;
