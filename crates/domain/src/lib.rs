pub mod errors;
pub mod page;
pub mod todo;

pub use errors::*;
pub use page::*;
pub use todo::*;
