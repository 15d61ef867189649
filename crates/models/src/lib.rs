//! Record shapes served by the services and the boundary validation that
//! turns raw JSON bodies into them.

pub mod errors;
pub mod game;
pub mod item;
pub mod task;
pub mod validation;

pub use errors::{FieldError, ValidationErrors};
pub use game::Game;
pub use item::Item;
pub use task::{NewTask, Task, TaskPatch};
pub use validation::Patch;
