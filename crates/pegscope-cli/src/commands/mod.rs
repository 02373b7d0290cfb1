pub mod check;
pub mod loader;
pub mod rewrite;
pub mod scopes;
