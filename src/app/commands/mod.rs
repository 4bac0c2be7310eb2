pub mod addons;
pub mod configure;
pub mod install;
pub mod pipeline;
pub mod rapidez;
