pub mod builtin;
pub mod catalog;
pub mod parser;
pub mod types;

pub use catalog::{
    DEFAULT_LOCALE, Diagnostic, FallbackStage, LoadError, Localizer, PackStore, PackWarning,
    Resolution, Resolver, StoreError, format_message,
};
pub use types::{LocaleCode, LocaleInfo, LocalePack, Value};

/// Creates a `Vec<Value>` of positional arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats and strings directly.
///
/// # Example
///
/// ```
/// use locpack::{args, Value};
///
/// let a = args![3, 10, "30%"];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[0].as_number(), Some(3));
/// assert_eq!(a[2].as_string(), Some("30%"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
