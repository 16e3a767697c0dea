//! Extension traits

mod depot;
mod pnr;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use pnr::PnrParamExt as _;
pub(crate) use result::ResultExt as _;
