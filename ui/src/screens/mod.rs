// This file makes the screen modules available to the rest of the application.

pub mod explore;
pub mod home;
pub mod new_home;
pub mod not_found;
pub mod profile;
