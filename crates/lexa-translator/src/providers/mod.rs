mod libre;
mod mymemory;

pub use libre::LibreTranslate;
pub use mymemory::MyMemory;
