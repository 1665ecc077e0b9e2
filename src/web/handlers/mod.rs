pub mod eras;
pub mod mission;
pub mod pages;
