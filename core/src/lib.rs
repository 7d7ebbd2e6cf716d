pub mod lookup;
pub mod vendors;
