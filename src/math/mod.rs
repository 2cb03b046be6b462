//! Mathematical utilities

/// Activation functions for elementwise matrix maps
pub mod activation;
