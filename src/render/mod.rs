pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod player;
pub(crate) mod surface;
