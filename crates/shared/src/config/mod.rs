mod clock;
mod jwt;
mod myconfig;

pub use self::clock::SystemClock;
pub use self::jwt::{Claims, JwtConfig};
pub use self::myconfig::Config;
