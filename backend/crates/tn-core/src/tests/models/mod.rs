mod relation;
mod serialization;
mod user;
