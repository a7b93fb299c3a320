mod use_explorer;

pub use use_explorer::*;
