pub mod input;
pub mod spinner;
pub mod table;

pub use input::InputField;
pub use spinner::Spinner;
pub use table::RepoTable;
