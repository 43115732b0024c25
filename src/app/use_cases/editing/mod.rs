//! Use-Cases für das Bearbeiten des Kontrollpolygons.

mod add_point;
mod clear_points;
mod delete_point;
mod move_point;

pub use add_point::add_point;
pub use clear_points::clear_points;
pub use delete_point::delete_point;
pub use move_point::move_selected_point;
