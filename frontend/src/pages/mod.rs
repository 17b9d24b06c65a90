mod party;

pub use party::{FormVariant, Party};
