pub mod items;
pub mod pics;
