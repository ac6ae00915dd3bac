pub mod case;
pub mod marker;

pub use case::to_snake_case;
pub use marker::strip_marker;

/// Normalize an API name: drop the marker, then snake_case what is left.
pub fn normalize(name: &str, marker: &str) -> String {
    to_snake_case(&strip_marker(name, marker))
}
