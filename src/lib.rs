pub mod api;
pub mod config;
pub mod data_models;
pub mod expansion;
pub mod link_generator;
pub mod platforms;
pub mod report;
pub mod search;
pub mod selection;
