pub mod projection;
pub mod solver;
pub mod types;

#[cfg(test)]
mod tests_solver;
