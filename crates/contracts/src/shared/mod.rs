pub mod metadata;
pub mod routing;
