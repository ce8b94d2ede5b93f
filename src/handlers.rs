//! The three partner operations as the UI sees them.
//!
//! Database errors stop here: fetch collapses them to `FetchFailed`, writes turn them
//! into a [`Notice`]. Details only go to the log.

use crate::app::{
    partner_create, partner_list, partner_update, PartnerCreateReq, PartnerDto, PartnerUpdateReq,
};
use crate::error::AppError;
use crate::infra::DbPool;
use crate::notice::{notice_for, Locale, Notice, Operation};

pub fn get_partners(pool: &DbPool) -> Result<Vec<PartnerDto>, AppError> {
    partner_list(pool).map_err(|e| {
        log::error!("Error fetching partners: {} ({})", e, e.code());
        AppError::FetchFailed
    })
}

pub fn create_partner(pool: &DbPool, req: PartnerCreateReq, locale: Locale) -> Notice {
    let outcome = partner_create(pool, req);
    if let Err(e) = &outcome {
        log::error!("Error creating partner: {} ({})", e, e.code());
    }
    notice_for(Operation::Create, &outcome, locale)
}

pub fn update_partner(pool: &DbPool, req: PartnerUpdateReq, locale: Locale) -> Notice {
    let outcome = partner_update(pool, req);
    if let Err(e) = &outcome {
        log::error!("Error updating partner: {} ({})", e, e.code());
    }
    notice_for(Operation::Update, &outcome, locale)
}
