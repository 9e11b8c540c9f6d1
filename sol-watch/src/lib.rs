pub mod deltas;
pub mod throttle;
pub mod tracker;

#[cfg(test)]
mod tests;
