pub mod goal;
pub mod search;
