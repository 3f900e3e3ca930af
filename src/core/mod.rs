pub mod controller;
pub mod log;
pub mod validation;
pub mod view_model;
