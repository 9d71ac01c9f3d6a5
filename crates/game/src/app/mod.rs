pub(crate) mod bootstrap;
pub(crate) mod config;
pub(crate) mod host;
pub(crate) mod state;
