pub mod enums;
pub mod todo;

pub use enums::UiMode;
pub use todo::Todo;
