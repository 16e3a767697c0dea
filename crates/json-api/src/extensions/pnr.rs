//! PNR path parameter parsing.

use railmeal_app::pnr::Pnr;
use salvo::{oapi::extract::PathParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait PnrParamExt {
    fn into_pnr(self) -> Result<Pnr, StatusError>;
}

impl PnrParamExt for PathParam<String> {
    fn into_pnr(self) -> Result<Pnr, StatusError> {
        Pnr::parse(&self.into_inner()).or_400("invalid PNR")
    }
}
