pub mod sink;
pub mod csv;
pub mod console;
pub mod trajectory;
