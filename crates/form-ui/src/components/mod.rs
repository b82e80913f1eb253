// Layout and display primitives
pub mod error_label;
pub mod field_label;
pub mod form_field;

// Selection widget
pub mod dropdown;

// Form-bound controls: depend on everything above
pub mod form_dropdown;

pub use dropdown::*;
pub use error_label::*;
pub use field_label::*;
pub use form_dropdown::*;
pub use form_field::*;
