pub mod constants;
pub mod deserializers;
pub mod pagination;
pub mod random;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
