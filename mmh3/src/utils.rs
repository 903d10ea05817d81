#[cfg(test)]
pub(crate) mod tracing;
