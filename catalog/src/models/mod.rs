pub mod favorites;
pub mod foods;
