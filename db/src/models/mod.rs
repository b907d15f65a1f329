mod category;
mod question;

pub use self::category::*;
pub use self::question::*;
