pub mod filter;
pub mod form_ops;
pub mod suggest;
