pub mod info;
pub mod scan;
pub mod simulate;
