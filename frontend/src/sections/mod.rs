pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod services;
