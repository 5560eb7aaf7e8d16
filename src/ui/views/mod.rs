pub mod loading;
pub mod quiz;
