pub mod aliases;
pub mod locale;
pub mod normalize;
pub mod registry;

pub use self::aliases::AliasTable;
pub use self::locale::{LocaleNames, NoLocaleNames};
pub use self::normalize::normalize_structure;
pub use self::registry::LangRegistry;
