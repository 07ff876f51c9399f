pub mod dams;
pub mod home;
pub mod maps;
