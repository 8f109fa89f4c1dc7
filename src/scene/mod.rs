pub(crate) mod block;
pub(crate) mod composition;
pub(crate) mod drawable;
pub(crate) mod entity;
pub(crate) mod gate;
pub(crate) mod grid;
pub(crate) mod line;
pub(crate) mod port;
pub(crate) mod route;
pub(crate) mod shapes;
pub(crate) mod text;
pub(crate) mod timeline;
pub(crate) mod wire;
