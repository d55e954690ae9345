pub mod slots;
pub mod texgen;
pub mod util;
