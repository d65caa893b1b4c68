pub(crate) mod bmp;
pub(crate) mod load;
pub(crate) mod png;
