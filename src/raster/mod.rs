pub(crate) mod buffer;
pub(crate) mod filter;
pub(crate) mod resample;
pub(crate) mod sample;
