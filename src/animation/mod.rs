pub(crate) mod document;
pub(crate) mod format;
pub(crate) mod player;
