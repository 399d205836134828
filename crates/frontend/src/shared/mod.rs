pub mod api_utils;
pub mod fetch_state;
pub mod icons;
pub mod routing;
