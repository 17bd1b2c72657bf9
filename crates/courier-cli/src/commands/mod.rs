pub mod common;
pub mod completions;
pub mod date;
pub mod locale;
pub mod mail;
pub mod mask;
pub mod paginate;
pub mod prop;
pub mod session;
pub mod text;
