pub mod info;
pub mod patients;
