pub mod code_generator;
pub mod date;
pub mod jwt;
pub mod password;
pub mod validation;

pub use code_generator::generate_four_digit_code;
pub use date::parse_end_date;
pub use jwt::*;
pub use password::*;
pub use validation::*;
