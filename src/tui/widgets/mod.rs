pub mod cards;
pub mod help;
pub mod root;
