//! Request and response bodies exchanged with the mobile client.

pub mod api;
pub mod auth;
pub mod diary;
pub mod personal;
pub mod profile;
pub mod schedule;
pub mod school;
pub mod upload;
