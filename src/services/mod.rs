pub mod phonetics;
pub mod translator;

pub use phonetics::{CmuDict, PhoneticLookup, PhoneticMatch};
pub use translator::{MyMemoryTranslator, Translator};
