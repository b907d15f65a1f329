mod next;

pub use self::next::*;
