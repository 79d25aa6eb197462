pub mod error;
pub mod publish;
pub mod viewer;
