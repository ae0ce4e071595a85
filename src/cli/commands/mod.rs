//! CLI command modules

pub mod crds;
pub mod info;
pub mod init;
pub mod operator_promise;
