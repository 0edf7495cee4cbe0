pub mod show;
pub mod simulate;
