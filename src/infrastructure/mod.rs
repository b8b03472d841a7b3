// Infrastructure layer module
// Database adapters implementing the domain repository traits

pub mod repositories;
