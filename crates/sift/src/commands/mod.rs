pub mod ask;
pub mod files;
pub mod load;
pub mod version;
