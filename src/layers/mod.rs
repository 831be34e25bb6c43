pub mod anchor;
pub mod marker;
pub mod registry;
pub mod scene;
