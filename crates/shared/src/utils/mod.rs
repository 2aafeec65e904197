mod datefmt;
mod di;
mod errors;
mod logger;

pub use self::datefmt::{DATE_PLACEHOLDER, format_date, format_datetime, parse_datetime};
pub use self::di::DependenciesInject;
pub use self::errors::AppError;
pub use self::logger::init_logger;
