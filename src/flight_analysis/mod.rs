pub mod analytical;
pub mod landing;
pub mod statistics;
