pub mod dam;
