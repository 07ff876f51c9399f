pub mod dam_repo;

pub use dam_repo::DamRepo;
