pub mod api;
pub mod mongo;
pub mod validation;
