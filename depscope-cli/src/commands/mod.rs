pub mod closure;
pub mod common;
pub mod paths;
pub mod rank;
pub mod reach;
pub mod report;
