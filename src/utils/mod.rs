//! Small shared helpers with no knowledge of Lambda or AWS

pub mod text;
