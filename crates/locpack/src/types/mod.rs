mod locale_code;
mod pack;
mod value;

pub use locale_code::LocaleCode;
pub use pack::{LocaleInfo, LocalePack};
pub use value::Value;
