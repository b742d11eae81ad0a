//! Resume dashboard service: an access gate in front of a server-rendered
//! collection of analyzed resumes.

pub mod config;
pub mod errors;
pub mod gate;
pub mod models;
pub mod resumes;
pub mod routes;
pub mod session;
pub mod state;
pub mod view;
